//! Lifecycle events.
//!
//! The move applier and turn controller report what happened through an
//! [`EventSink`]. Each event is emitted right after the state change it
//! describes, so a sink that inspects the state sees it exactly as of that
//! event.

use serde::{Deserialize, Serialize};

use crate::core::{Colour, GameState, Move, WinReason};

/// Something observers are told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began (1-based).
    RoundStarted { round: u32 },

    /// A move was made; fugitive destinations are already disclosure-filtered.
    MoveMade(Move),

    /// Every seeker has acted; the fugitive is next.
    RotationComplete,

    GameOver {
        winners: Vec<Colour>,
        reason: WinReason,
    },
}

/// Receiver for events.
pub trait EventSink {
    fn emit(&mut self, state: &GameState, event: GameEvent);
}

/// Collects events, ignoring state.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, _state: &GameState, event: GameEvent) {
        self.push(event);
    }
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _state: &GameState, _event: GameEvent) {}
}
