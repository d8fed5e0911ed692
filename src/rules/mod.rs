//! Game rules.
//!
//! Everything here is a function of the board, the round schedule, and the
//! state:
//! - `movegen`: what the player to act may do
//! - `apply`: how a move changes the state, and which events it raises
//! - `visibility`: where observers think the fugitive is
//! - `win`: when the game ends and who won
//!
//! [`Rules`] wraps these for callers that hold a board and schedule.

pub mod apply;
pub mod engine;
pub mod event;
pub mod movegen;
pub mod visibility;
pub mod win;

pub use apply::apply_move;
pub use engine::{GameResult, Rules};
pub use event::{Discard, EventSink, GameEvent};
pub use movegen::{legal_moves, legal_moves_for};
pub use visibility::{reportable_fugitive_location, Disclosure};
