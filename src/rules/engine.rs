//! Rules facade.
//!
//! [`Rules`] bundles the board and the round schedule, the two pieces of
//! configuration every rule needs, so callers hand over only the state.
//! The turn controller drives the game through it; hosts running their own
//! loop (simulations, replays) can use it directly.

use super::apply::apply_move;
use super::event::EventSink;
use super::movegen;
use super::visibility;
use super::win;
use crate::core::{
    Colour, GameState, InvariantError, Move, MoveSet, NodeId, PlayerId, RoundSchedule, WinReason,
};
use crate::graph::Graph;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub reason: WinReason,

    /// Winning colours in colour order.
    pub winners: Vec<Colour>,
}

impl GameResult {
    /// Check if a colour won.
    #[must_use]
    pub fn is_winner(&self, colour: Colour) -> bool {
        self.winners.contains(&colour)
    }

    /// Whether the fugitive side won.
    #[must_use]
    pub fn fugitive_won(&self) -> bool {
        self.reason.fugitive_wins()
    }

    /// Read the result off a finished state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Option<Self> {
        let reason = state.win_reason?;
        Some(Self {
            reason,
            winners: state.winners.iter().copied().collect(),
        })
    }
}

/// Board plus round schedule.
#[derive(Clone, Debug)]
pub struct Rules<G> {
    graph: G,
    rounds: RoundSchedule,
}

impl<G: Graph> Rules<G> {
    pub fn new(graph: G, rounds: RoundSchedule) -> Self {
        Self { graph, rounds }
    }

    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    #[must_use]
    pub fn rounds(&self) -> &RoundSchedule {
        &self.rounds
    }

    /// Legal moves for the player to act.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> MoveSet {
        movegen::legal_moves(&self.graph, &self.rounds, state)
    }

    /// Legal moves for any player.
    #[must_use]
    pub fn legal_moves_for(&self, state: &GameState, player: PlayerId) -> MoveSet {
        movegen::legal_moves_for(&self.graph, &self.rounds, state, player)
    }

    /// Apply a move already known to be legal.
    pub fn apply(
        &self,
        state: &mut GameState,
        mv: &Move,
        sink: &mut dyn EventSink,
    ) -> Result<(), InvariantError> {
        apply_move(state, &self.rounds, mv, sink)
    }

    /// Check for a winner, recording it on first detection.
    pub fn is_game_over(&self, state: &mut GameState, fugitive_moves: Option<&MoveSet>) -> bool {
        win::is_game_over(state, &self.rounds, fugitive_moves)
    }

    /// Check for a winner without recording anything.
    #[must_use]
    pub fn evaluate(
        &self,
        state: &GameState,
        fugitive_moves: Option<&MoveSet>,
    ) -> Option<WinReason> {
        if let Some(reason) = state.win_reason {
            return Some(reason);
        }
        win::evaluate(state, &self.rounds, fugitive_moves)
    }

    #[must_use]
    pub fn reportable_fugitive_location(&self, state: &GameState) -> NodeId {
        visibility::reportable_fugitive_location(state, &self.rounds)
    }
}
