//! Running games: turn control, agents, spectators.

pub mod agent;
pub mod builder;
pub mod controller;
pub mod spectator;
pub mod view;

pub use agent::{Agent, Agents, FirstMoveAgent, RandomAgent};
pub use builder::GameBuilder;
pub use controller::{MoveRequest, PursuitGame, TurnOutcome};
pub use spectator::{SharedSpectator, Spectator, SpectatorHub};
pub use view::GameView;
