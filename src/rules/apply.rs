//! Move application.
//!
//! `apply_move` assumes the move was drawn from the current player's legal
//! set; the turn controller enforces that before calling in. Everything a
//! move changes happens here:
//! - ticket debits, with seeker tickets handed to the fugitive
//! - locations
//! - the acting player (a double move is still one turn)
//! - the round counter and disclosure memo, for fugitive moves
//! - the public move log
//!
//! ## Event order
//!
//! - Seeker move or pass: `MoveMade`
//! - Fugitive ticket move: `RoundStarted`, `MoveMade`
//! - Fugitive double move: `MoveMade(double)`, then `RoundStarted`,
//!   `MoveMade(leg)` for each leg
//!
//! Fugitive moves carry the real tickets but disclosure-filtered
//! destinations. For a double move both shown destinations are worked out
//! before either leg is applied.

use tracing::debug;

use super::event::{EventSink, GameEvent};
use super::visibility::{reportable_fugitive_location, start_round, Disclosure};
use crate::core::{
    DoubleMove, GameState, InvariantError, Move, MoveRecord, PlayerId, RoundSchedule, Ticket,
    TicketMove,
};

/// Apply a legal move for the current player.
pub fn apply_move(
    state: &mut GameState,
    rounds: &RoundSchedule,
    mv: &Move,
    sink: &mut dyn EventSink,
) -> Result<(), InvariantError> {
    if state.player_id(mv.colour()) != Some(state.current) {
        return Err(InvariantError::UnknownColour(mv.colour()));
    }
    debug!(mv = %mv, round = state.round, "applying move");

    match mv {
        Move::Pass(_) => {
            state.advance_player();
            publish(state, sink, *mv);
        }
        Move::Ticket(ticket_move) => apply_ticket(state, rounds, ticket_move, sink)?,
        Move::Double(double_move) => apply_double(state, rounds, double_move, sink)?,
    }

    state.bump_version();
    Ok(())
}

fn apply_ticket(
    state: &mut GameState,
    rounds: &RoundSchedule,
    mv: &TicketMove,
    sink: &mut dyn EventSink,
) -> Result<(), InvariantError> {
    let mover = state.current;
    spend(state, mover, mv.ticket)?;
    state.players[mover].location = mv.destination;
    state.advance_player();

    if mover == PlayerId::FUGITIVE {
        fugitive_leg(state, rounds, sink);
        let shown = reportable_fugitive_location(state, rounds);
        publish(state, sink, Move::ticket(mv.colour, mv.ticket, shown));
    } else {
        publish(state, sink, Move::Ticket(*mv));
    }
    Ok(())
}

fn apply_double(
    state: &mut GameState,
    rounds: &RoundSchedule,
    mv: &DoubleMove,
    sink: &mut dyn EventSink,
) -> Result<(), InvariantError> {
    spend(state, PlayerId::FUGITIVE, Ticket::Double)?;
    state.advance_player();

    let mut memo = Disclosure::of(state);
    let first_shown = memo.observe(rounds.is_reveal(state.round + 1), mv.first.destination);
    let second_shown = memo.observe(rounds.is_reveal(state.round + 2), mv.second.destination);
    let disclosed = DoubleMove::new(
        mv.colour,
        mv.first.ticket,
        first_shown,
        mv.second.ticket,
        second_shown,
    );

    publish(state, sink, Move::Double(disclosed));

    for (leg, shown) in [(mv.first, disclosed.first), (mv.second, disclosed.second)] {
        spend(state, PlayerId::FUGITIVE, leg.ticket)?;
        state.fugitive_mut().location = leg.destination;
        fugitive_leg(state, rounds, sink);
        publish(state, sink, Move::Ticket(shown));
    }
    Ok(())
}

/// Start the round a fugitive leg occupies and announce it.
fn fugitive_leg(state: &mut GameState, rounds: &RoundSchedule, sink: &mut dyn EventSink) {
    let round = start_round(state, rounds);
    sink.emit(state, GameEvent::RoundStarted { round });
}

/// Debit one ticket; seekers' spent tickets go to the fugitive.
fn spend(state: &mut GameState, player: PlayerId, ticket: Ticket) -> Result<(), InvariantError> {
    let spender = &mut state.players[player];
    spender.tickets.debit(ticket, spender.colour)?;
    if spender.is_seeker() {
        state.fugitive_mut().tickets.credit(ticket);
    }
    Ok(())
}

fn publish(state: &mut GameState, sink: &mut dyn EventSink, disclosed: Move) {
    state.log.push_back(MoveRecord::new(state.round, disclosed));
    sink.emit(state, GameEvent::MoveMade(disclosed));
}
