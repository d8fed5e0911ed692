//! Fluent game construction.
//!
//! ```
//! use rust_pursuit::core::{Colour, PlayerConfig, RoundSchedule};
//! use rust_pursuit::game::GameBuilder;
//! use rust_pursuit::graph::{Transport, TransportGraph};
//!
//! let graph = TransportGraph::from_routes([(1, 2, Transport::Taxi), (2, 3, Transport::Bus)]);
//! let game = GameBuilder::new()
//!     .rounds(RoundSchedule::standard())
//!     .fugitive(PlayerConfig::fugitive_defaults(1))
//!     .seeker(PlayerConfig::seeker_defaults(Colour::Blue, 3))
//!     .build(graph)
//!     .unwrap();
//! assert_eq!(game.players(), vec![Colour::Black, Colour::Blue]);
//! ```

use super::controller::PursuitGame;
use crate::core::{ConfigError, GameConfig, PlayerConfig, RoundSchedule};
use crate::graph::Graph;

#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    rounds: Option<RoundSchedule>,
    fugitive: Option<PlayerConfig>,
    seekers: Vec<PlayerConfig>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rounds(mut self, rounds: RoundSchedule) -> Self {
        self.rounds = Some(rounds);
        self
    }

    #[must_use]
    pub fn fugitive(mut self, fugitive: PlayerConfig) -> Self {
        self.fugitive = Some(fugitive);
        self
    }

    /// Add a seeker; rotation follows call order.
    #[must_use]
    pub fn seeker(mut self, seeker: PlayerConfig) -> Self {
        self.seekers.push(seeker);
        self
    }

    /// Assemble and validate the configuration.
    pub fn config(self) -> Result<GameConfig, ConfigError> {
        let rounds = self.rounds.ok_or(ConfigError::EmptyRounds)?;
        let fugitive = self.fugitive.ok_or(ConfigError::MissingFugitive)?;
        let mut seekers = self.seekers.into_iter();
        let first = seekers.next().ok_or(ConfigError::NoSeekers)?;

        let base = GameConfig::new(rounds, fugitive, first);
        let config = seekers.fold(base, GameConfig::with_seeker);
        config.validate()?;
        Ok(config)
    }

    pub fn build<G: Graph>(self, graph: G) -> Result<PursuitGame<G>, ConfigError> {
        PursuitGame::new(self.config()?, graph)
    }
}
