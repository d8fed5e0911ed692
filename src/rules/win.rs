//! Win conditions.
//!
//! Checked in order, first match wins:
//! 1. Schedule exhausted with the fugitive to act: fugitive wins.
//! 2. A seeker stands on the fugitive's true location: seekers win.
//! 3. No seeker holds any ticket: fugitive wins.
//! 4. Fugitive to act after the start with no legal move: seekers win.
//!
//! Winners are recorded once. Re-checking a finished game never changes them.

use im::OrdSet;
use tracing::info;

use crate::core::{Colour, GameState, MoveSet, RoundSchedule, WinReason};

/// Which condition, if any, ends the game now.
///
/// `fugitive_moves` is the most recently generated legal set for the
/// fugitive; pass `None` when the fugitive is not to act.
#[must_use]
pub fn evaluate(
    state: &GameState,
    rounds: &RoundSchedule,
    fugitive_moves: Option<&MoveSet>,
) -> Option<WinReason> {
    if state.round == rounds.len() && state.fugitive_to_act() {
        return Some(WinReason::RoundsExhausted);
    }

    let fugitive_at = state.fugitive().location;
    if state.seekers().any(|(_, s)| s.location == fugitive_at) {
        return Some(WinReason::Captured);
    }

    if state.seekers().all(|(_, s)| s.tickets.is_exhausted()) {
        return Some(WinReason::SeekersOutOfTickets);
    }

    let cornered = state.fugitive_to_act()
        && state.is_started()
        && fugitive_moves.is_some_and(MoveSet::is_empty);
    if cornered {
        return Some(WinReason::FugitiveCornered);
    }

    None
}

/// Colours that win for a given reason.
#[must_use]
pub fn winners_for(state: &GameState, reason: WinReason) -> OrdSet<Colour> {
    if reason.fugitive_wins() {
        OrdSet::unit(state.fugitive().colour)
    } else {
        state.seekers().map(|(_, s)| s.colour).collect()
    }
}

/// Whether the game is over, recording winners on first detection.
pub fn is_game_over(
    state: &mut GameState,
    rounds: &RoundSchedule,
    fugitive_moves: Option<&MoveSet>,
) -> bool {
    if state.is_game_over() {
        return true;
    }
    match evaluate(state, rounds, fugitive_moves) {
        Some(reason) => {
            state.winners = winners_for(state, reason);
            state.win_reason = Some(reason);
            state.bump_version();
            info!(?reason, winners = ?state.winners, round = state.round, "game over");
            true
        }
        None => false,
    }
}
