//! Fugitive visibility.
//!
//! Observers never see the fugitive's true location except on reveal
//! rounds. Between reveals they see the last disclosed location, or
//! [`NodeId::UNKNOWN`] if there has never been a reveal.
//!
//! The disclosure memo (`revealed`, `last_known`) is updated when a round
//! starts, so reporting is a pure read.

use crate::core::{GameState, NodeId, RoundSchedule};

/// Fugitive location as observers should see it right now.
#[must_use]
pub fn reportable_fugitive_location(state: &GameState, rounds: &RoundSchedule) -> NodeId {
    if !state.is_started() {
        return NodeId::UNKNOWN;
    }
    Disclosure::of(state).peek(rounds.is_reveal(state.round), state.fugitive().location)
}

/// Working copy of the disclosure memo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disclosure {
    pub revealed: bool,
    pub last_known: NodeId,
}

impl Disclosure {
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        Self {
            revealed: state.revealed,
            last_known: state.last_known,
        }
    }

    /// Location shown for a round that lands the fugitive on `true_location`.
    /// A reveal round updates the memo.
    pub fn observe(&mut self, reveal: bool, true_location: NodeId) -> NodeId {
        if reveal {
            self.revealed = true;
            self.last_known = true_location;
        }
        self.peek(reveal, true_location)
    }

    /// Like [`Disclosure::observe`] without touching the memo.
    #[must_use]
    pub fn peek(&self, reveal: bool, true_location: NodeId) -> NodeId {
        if reveal {
            true_location
        } else if self.revealed {
            self.last_known
        } else {
            NodeId::UNKNOWN
        }
    }

    pub fn commit(self, state: &mut GameState) {
        state.revealed = self.revealed;
        state.last_known = self.last_known;
    }
}

/// Start the next round: bump the counter and disclose on reveal rounds.
/// Returns the new round number.
pub(crate) fn start_round(state: &mut GameState, rounds: &RoundSchedule) -> u32 {
    state.round += 1;
    let mut memo = Disclosure::of(state);
    memo.observe(rounds.is_reveal(state.round), state.fugitive().location);
    memo.commit(state);
    state.round
}
