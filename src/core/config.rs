//! Game configuration types.
//!
//! Hosts configure a game by providing:
//! - `RoundSchedule`: which rounds reveal the fugitive
//! - `PlayerConfig`: colour, starting location and tickets for one player
//! - `GameConfig`: the schedule plus one fugitive and one or more seekers
//!
//! Everything is serde-derivable so configurations can be loaded from any
//! format. `GameConfig::validate` enforces the construction invariants and
//! runs on every construction path.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::node::NodeId;
use super::player::Colour;
use super::ticket::{Ticket, TicketLedger};

/// Reveal schedule: one entry per round, `true` for reveal rounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundSchedule(Vec<bool>);

impl RoundSchedule {
    /// Create a schedule. Rejects an empty schedule.
    pub fn new(rounds: Vec<bool>) -> Result<Self, ConfigError> {
        if rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        Ok(Self(rounds))
    }

    /// The 24-round board game schedule, revealing on rounds 3, 8, 13, 18 and 24.
    #[must_use]
    pub fn standard() -> Self {
        const REVEALS: [u32; 5] = [3, 8, 13, 18, 24];
        Self((1..=24).map(|r| REVEALS.contains(&r)).collect())
    }

    /// Number of rounds.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.0.len() as u32
    }

    /// Always false for a validated schedule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether 1-based round `round` is a reveal round. Out-of-range rounds are not.
    #[must_use]
    pub fn is_reveal(&self, round: u32) -> bool {
        round
            .checked_sub(1)
            .and_then(|i| self.0.get(i as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Rounds still to be played after `current_round` rounds have started.
    #[must_use]
    pub fn remaining(&self, current_round: u32) -> u32 {
        self.len().saturating_sub(current_round)
    }

    /// Raw schedule.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Starting configuration for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub colour: Colour,
    pub location: NodeId,

    /// Must contain every ticket kind, zeros included.
    pub tickets: FxHashMap<Ticket, u32>,
}

impl PlayerConfig {
    /// Create a player config from explicit ticket counts.
    pub fn new(
        colour: Colour,
        location: impl Into<NodeId>,
        tickets: impl IntoIterator<Item = (Ticket, u32)>,
    ) -> Self {
        Self {
            colour,
            location: location.into(),
            tickets: tickets.into_iter().collect(),
        }
    }

    /// Fugitive with the board game's starting tickets.
    pub fn fugitive_defaults(location: impl Into<NodeId>) -> Self {
        Self::new(
            Colour::Black,
            location,
            [
                (Ticket::Taxi, 4),
                (Ticket::Bus, 3),
                (Ticket::Underground, 3),
                (Ticket::Double, 2),
                (Ticket::Secret, 5),
            ],
        )
    }

    /// Seeker with the board game's starting tickets.
    pub fn seeker_defaults(colour: Colour, location: impl Into<NodeId>) -> Self {
        Self::new(
            colour,
            location,
            [
                (Ticket::Taxi, 11),
                (Ticket::Bus, 8),
                (Ticket::Underground, 4),
                (Ticket::Double, 0),
                (Ticket::Secret, 0),
            ],
        )
    }

    /// Set one ticket count (builder pattern).
    #[must_use]
    pub fn with_tickets(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }

    /// Ledger for this player's tickets.
    #[must_use]
    pub fn ledger(&self) -> TicketLedger {
        TicketLedger::from_counts(self.tickets.iter().map(|(&t, &c)| (t, c)))
    }

    fn validate_tickets(&self) -> Result<(), ConfigError> {
        for ticket in Ticket::ALL {
            let count = *self.tickets.get(&ticket).ok_or(ConfigError::MissingTicket {
                colour: self.colour,
                ticket,
            })?;
            if self.colour.is_seeker() && ticket.is_fugitive_only() && count != 0 {
                return Err(ConfigError::SeekerSpecialTicket {
                    colour: self.colour,
                    ticket,
                    count,
                });
            }
        }
        Ok(())
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rounds: RoundSchedule,
    pub fugitive: PlayerConfig,

    /// Seekers in rotation order.
    pub seekers: Vec<PlayerConfig>,
}

impl GameConfig {
    /// Create a configuration with one seeker; add more with `with_seeker`.
    pub fn new(rounds: RoundSchedule, fugitive: PlayerConfig, first_seeker: PlayerConfig) -> Self {
        Self {
            rounds,
            fugitive,
            seekers: vec![first_seeker],
        }
    }

    /// Add a seeker (builder pattern).
    #[must_use]
    pub fn with_seeker(mut self, seeker: PlayerConfig) -> Self {
        self.seekers.push(seeker);
        self
    }

    /// All players in rotation order: fugitive first.
    pub fn players(&self) -> impl Iterator<Item = &PlayerConfig> {
        std::iter::once(&self.fugitive).chain(self.seekers.iter())
    }

    /// Check every construction invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        if !self.fugitive.colour.is_fugitive() {
            return Err(ConfigError::FugitiveNotBlack(self.fugitive.colour));
        }
        if self.seekers.is_empty() {
            return Err(ConfigError::NoSeekers);
        }
        if self.seekers.len() > Colour::SEEKERS.len() {
            return Err(ConfigError::TooManySeekers {
                max: Colour::SEEKERS.len(),
                got: self.seekers.len(),
            });
        }
        if self.seekers.iter().any(|s| s.colour.is_fugitive()) {
            return Err(ConfigError::SeekerIsBlack);
        }

        let mut colours = FxHashSet::default();
        let mut locations = FxHashSet::default();
        for player in self.players() {
            if !colours.insert(player.colour) {
                return Err(ConfigError::DuplicateColour(player.colour));
            }
            if !locations.insert(player.location) {
                return Err(ConfigError::DuplicateLocation(player.location));
            }
        }

        for player in self.players() {
            player.validate_tickets()?;
        }
        Ok(())
    }
}
