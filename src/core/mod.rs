//! Core engine types: nodes, players, tickets, moves, state, RNG, configuration.
//!
//! Nothing here knows the rules; the `rules` module interprets these types.

pub mod node;
pub mod player;
pub mod ticket;
pub mod moves;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use node::NodeId;
pub use player::{Colour, Player, PlayerId, PlayerMap};
pub use ticket::{Ticket, TicketLedger};
pub use moves::{DoubleMove, Move, MoveRecord, MoveSet, TicketMove};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PlayerConfig, RoundSchedule};
pub use error::{ConfigError, GameError, InvariantError, ProtocolError};
pub use state::{GameState, WinReason};
