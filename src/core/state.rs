//! Game state.
//!
//! One explicit value holds everything that changes during play:
//! - Player arena (colours, true locations, ticket ledgers)
//! - Acting player and round counter
//! - The fugitive's last disclosed location and whether disclosure happened
//! - Winners, once the game is over
//! - The public move log
//!
//! Uses `im` persistent structures so look-ahead agents can clone freely.
//! Every mutation through the rules bumps `version`.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::moves::MoveRecord;
use super::node::NodeId;
use super::player::{Colour, Player, PlayerId, PlayerMap};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The fugitive survived the final scheduled round.
    RoundsExhausted,
    /// A seeker stands on the fugitive's true location.
    Captured,
    /// No seeker holds any ticket.
    SeekersOutOfTickets,
    /// The fugitive has no legal move.
    FugitiveCornered,
}

impl WinReason {
    /// Whether this reason is a fugitive victory.
    #[must_use]
    pub const fn fugitive_wins(self) -> bool {
        matches!(
            self,
            WinReason::RoundsExhausted | WinReason::SeekersOutOfTickets
        )
    }
}

/// Complete mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Players in rotation order; the fugitive is `PlayerId::FUGITIVE`.
    pub players: PlayerMap<Player>,

    /// Player to act.
    pub current: PlayerId,

    /// Rounds started so far (0 = not started).
    pub round: u32,

    /// Fugitive location as last disclosed to observers.
    pub last_known: NodeId,

    /// Whether the fugitive has ever been disclosed.
    pub revealed: bool,

    /// Winning colours; empty until the game is over.
    pub winners: OrdSet<Colour>,

    pub win_reason: Option<WinReason>,

    /// Moves as observers saw them.
    pub log: Vector<MoveRecord>,

    version: u64,
}

impl GameState {
    /// Create a fresh state. The fugitive must occupy slot 0.
    #[must_use]
    pub fn new(players: PlayerMap<Player>) -> Self {
        debug_assert!(players[PlayerId::FUGITIVE].is_fugitive());
        Self {
            players,
            current: PlayerId::FUGITIVE,
            round: 0,
            last_known: NodeId::UNKNOWN,
            revealed: false,
            winners: OrdSet::new(),
            win_reason: None,
            log: Vector::new(),
            version: 0,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player to act.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_colour(&self) -> Colour {
        self.current_player().colour
    }

    #[must_use]
    pub fn fugitive(&self) -> &Player {
        &self.players[PlayerId::FUGITIVE]
    }

    pub fn fugitive_mut(&mut self) -> &mut Player {
        &mut self.players[PlayerId::FUGITIVE]
    }

    /// Whether the fugitive is to act.
    #[must_use]
    pub fn fugitive_to_act(&self) -> bool {
        self.current == PlayerId::FUGITIVE
    }

    /// Iterate over seekers with their IDs.
    pub fn seekers(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter().filter(|(_, p)| p.is_seeker())
    }

    /// Arena slot for a colour, if seated.
    #[must_use]
    pub fn player_id(&self, colour: Colour) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.colour == colour)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn player(&self, colour: Colour) -> Option<&Player> {
        self.player_id(colour).map(|id| &self.players[id])
    }

    /// Whether any player other than `except` stands on `node`.
    #[must_use]
    pub fn occupant(&self, node: NodeId, except: PlayerId) -> Option<&Player> {
        self.players
            .iter()
            .find(|(id, p)| *id != except && p.location == node)
            .map(|(_, p)| p)
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.round > 0
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.winners.is_empty()
    }

    /// Hand the turn to the next player in rotation order.
    pub fn advance_player(&mut self) {
        self.current = self.current.next(self.player_count());
    }

    /// Mutation counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Encode a snapshot.
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by [`GameState::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
