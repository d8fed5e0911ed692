//! Spectator registry and notification.
//!
//! Spectators are shared handles (`Rc<RefCell<..>>`) so the host keeps its
//! own reference for later unregistration. Identity is pointer identity.
//! Notification walks a snapshot of the registry.

use std::cell::RefCell;
use std::rc::Rc;

use super::view::GameView;
use crate::core::{Colour, GameState, Move, ProtocolError, RoundSchedule, WinReason};
use crate::rules::{EventSink, GameEvent};

/// Observer of game lifecycle events. Every method defaults to a no-op.
pub trait Spectator {
    fn on_round_started(&mut self, _view: &GameView<'_>, _round: u32) {}

    /// `mv` already has the fugitive's destination filtered.
    fn on_move_made(&mut self, _view: &GameView<'_>, _mv: &Move) {}

    fn on_rotation_complete(&mut self, _view: &GameView<'_>) {}

    fn on_game_over(&mut self, _view: &GameView<'_>, _winners: &[Colour], _reason: WinReason) {}
}

pub type SharedSpectator = Rc<RefCell<dyn Spectator>>;

/// Registered spectators in registration order.
#[derive(Clone, Default)]
pub struct SpectatorHub {
    spectators: Vec<SharedSpectator>,
}

impl SpectatorHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spectator: SharedSpectator) -> Result<(), ProtocolError> {
        if self.position(&spectator).is_some() {
            return Err(ProtocolError::DuplicateSpectator);
        }
        self.spectators.push(spectator);
        Ok(())
    }

    pub fn unregister(&mut self, spectator: &SharedSpectator) -> Result<(), ProtocolError> {
        let Some(index) = self.position(spectator) else {
            return Err(ProtocolError::UnknownSpectator);
        };
        self.spectators.remove(index);
        Ok(())
    }

    /// Snapshot of the registry.
    #[must_use]
    pub fn spectators(&self) -> Vec<SharedSpectator> {
        self.spectators.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spectators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spectators.is_empty()
    }

    /// Deliver one event to every registered spectator.
    pub fn notify(&self, view: &GameView<'_>, event: &GameEvent) {
        for spectator in self.spectators() {
            let mut spectator = spectator.borrow_mut();
            match event {
                GameEvent::RoundStarted { round } => spectator.on_round_started(view, *round),
                GameEvent::MoveMade(mv) => spectator.on_move_made(view, mv),
                GameEvent::RotationComplete => spectator.on_rotation_complete(view),
                GameEvent::GameOver { winners, reason } => {
                    spectator.on_game_over(view, winners, *reason)
                }
            }
        }
    }

    /// Event sink that forwards to this hub.
    pub(crate) fn dispatch<'a>(&'a self, rounds: &'a RoundSchedule) -> Dispatch<'a> {
        Dispatch { hub: self, rounds }
    }

    fn position(&self, spectator: &SharedSpectator) -> Option<usize> {
        self.spectators
            .iter()
            .position(|s| Rc::ptr_eq(s, spectator))
    }
}

impl std::fmt::Debug for SpectatorHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectatorHub")
            .field("len", &self.len())
            .finish()
    }
}

pub(crate) struct Dispatch<'a> {
    hub: &'a SpectatorHub,
    rounds: &'a RoundSchedule,
}

impl EventSink for Dispatch<'_> {
    fn emit(&mut self, state: &GameState, event: GameEvent) {
        self.hub.notify(&GameView::new(state, self.rounds), &event);
    }
}
