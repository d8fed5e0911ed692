//! Read-only game view.
//!
//! What agents and spectators are allowed to see. The fugitive's location
//! is always visibility-filtered; seekers' locations are public.

use im::Vector;

use crate::core::{Colour, GameState, MoveRecord, NodeId, RoundSchedule, Ticket, WinReason};
use crate::rules::reportable_fugitive_location;

/// Borrowed view over a game in progress.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    state: &'a GameState,
    rounds: &'a RoundSchedule,
}

impl<'a> GameView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState, rounds: &'a RoundSchedule) -> Self {
        Self { state, rounds }
    }

    /// Colours in rotation order, fugitive first.
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.state.players.values().map(|p| p.colour).collect()
    }

    /// Colour of the player to act.
    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_colour()
    }

    /// Rounds started so far; 0 before the fugitive's first move.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn rounds(&self) -> &'a RoundSchedule {
        self.rounds
    }

    /// Where observers see `colour`, or `None` if it is not in the game.
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<NodeId> {
        let player = self.state.player(colour)?;
        if player.is_fugitive() {
            Some(reportable_fugitive_location(self.state, self.rounds))
        } else {
            Some(player.location)
        }
    }

    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.state.player(colour).map(|p| p.tickets.count(ticket))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Winning colours; empty while the game is running.
    #[must_use]
    pub fn winning_players(&self) -> Vec<Colour> {
        self.state.winners.iter().copied().collect()
    }

    #[must_use]
    pub fn win_reason(&self) -> Option<WinReason> {
        self.state.win_reason
    }

    /// Moves as observers saw them.
    #[must_use]
    pub fn log(&self) -> &'a Vector<MoveRecord> {
        &self.state.log
    }
}
