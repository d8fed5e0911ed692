//! # rust-pursuit
//!
//! Rules engine for hidden-movement pursuit games: one concealed fugitive
//! evades a team of seekers on a transport graph, surfacing only on the
//! reveal rounds of a fixed schedule.
//!
//! ## Design Principles
//!
//! 1. **One Source of Truth**: The engine alone decides whose turn it is,
//!    what is legal, what observers see, and who won.
//!
//! 2. **Explicit State**: Everything that changes lives in one `GameState`
//!    value, cheap to clone via `im-rs` and serializable via serde.
//!
//! 3. **Bring Your Own Board**: The board is any `Graph`; agents and
//!    spectators are traits the host implements.
//!
//! ## Modules
//!
//! - `core`: Nodes, players, tickets, moves, state, RNG, configuration, errors
//! - `graph`: Transport graph trait and an adjacency-list implementation
//! - `rules`: Move generation, application, visibility, win conditions
//! - `game`: Turn controller, agents, spectators
//! - `logging`: Subscriber setup for binaries

pub mod core;
pub mod game;
pub mod graph;
pub mod logging;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Colour, ConfigError, DoubleMove, GameConfig, GameError, GameRng, GameState, InvariantError,
    Move, MoveRecord, MoveSet, NodeId, Player, PlayerConfig, PlayerId, PlayerMap, ProtocolError,
    RoundSchedule, Ticket, TicketLedger, TicketMove, WinReason,
};

pub use crate::graph::{Edge, Graph, Transport, TransportGraph};

pub use crate::rules::{GameEvent, GameResult, Rules};

pub use crate::game::{
    Agent, Agents, FirstMoveAgent, GameBuilder, GameView, MoveRequest, PursuitGame, RandomAgent,
    SharedSpectator, Spectator, TurnOutcome,
};
