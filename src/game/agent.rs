//! Move-choosing agents.
//!
//! Hosts that can answer synchronously implement [`Agent`] and let
//! [`PursuitGame::start_rotate`](super::PursuitGame::start_rotate) drive the
//! turns. Hosts that answer later (UI, network) use `request_move` and
//! `submit_move` directly instead.

use rustc_hash::FxHashMap;

use super::controller::MoveRequest;
use super::view::GameView;
use crate::core::{Colour, GameRng, GameRngState, Move};

/// Picks one move from a request's legal set.
pub trait Agent {
    /// `request.moves` is never empty. Returning anything outside it is a
    /// protocol violation and is rejected by the controller.
    fn choose_move(&mut self, view: &GameView<'_>, request: &MoveRequest) -> Move;
}

/// Agents seated by colour.
pub type Agents = FxHashMap<Colour, Box<dyn Agent>>;

/// Uniformly random legal moves from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Capture the stream position so the agent can be resumed later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, _view: &GameView<'_>, request: &MoveRequest) -> Move {
        // Sort so the pick depends only on the seed, not on hash order.
        let moves = request.sorted_moves();
        let pass = Move::Pass(request.colour);
        self.rng.choose(&moves).copied().unwrap_or(pass)
    }
}

/// Always the smallest legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveAgent;

impl Agent for FirstMoveAgent {
    fn choose_move(&mut self, _view: &GameView<'_>, request: &MoveRequest) -> Move {
        let pass = Move::Pass(request.colour);
        request.moves.iter().min().copied().unwrap_or(pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, NodeId, Player, PlayerMap, RoundSchedule, Ticket, TicketLedger};

    fn request() -> MoveRequest {
        let moves = (2..8)
            .map(|d| Move::ticket(Colour::Black, Ticket::Taxi, NodeId::new(d)))
            .collect();
        MoveRequest {
            colour: Colour::Black,
            location: NodeId::new(1),
            moves,
        }
    }

    fn state() -> GameState {
        GameState::new(PlayerMap::from_vec(vec![
            Player::new(Colour::Black, NodeId::new(1), TicketLedger::new()),
            Player::new(Colour::Red, NodeId::new(9), TicketLedger::new()),
        ]))
    }

    #[test]
    fn test_first_move_agent_picks_smallest() {
        let state = state();
        let rounds = RoundSchedule::standard();
        let view = GameView::new(&state, &rounds);
        let mv = FirstMoveAgent.choose_move(&view, &request());
        let smallest = Move::ticket(Colour::Black, Ticket::Taxi, NodeId::new(2));
        assert_eq!(mv, smallest);
    }

    #[test]
    fn test_random_agent_is_seeded() {
        let state = state();
        let rounds = RoundSchedule::standard();
        let view = GameView::new(&state, &rounds);
        let request = request();

        let mut a = RandomAgent::new(9);
        let mut b = RandomAgent::new(9);
        for _ in 0..10 {
            let mv = a.choose_move(&view, &request);
            assert!(request.moves.contains(&mv));
            assert_eq!(mv, b.choose_move(&view, &request));
        }
    }

    #[test]
    fn test_random_agent_resumes() {
        let state = state();
        let rounds = RoundSchedule::standard();
        let view = GameView::new(&state, &rounds);
        let request = request();

        let mut agent = RandomAgent::new(3);
        agent.choose_move(&view, &request);
        let saved = agent.rng_state();

        let expected: Vec<_> = (0..5).map(|_| agent.choose_move(&view, &request)).collect();
        let mut resumed = RandomAgent::resume(&saved);
        let replayed: Vec<_> = (0..5).map(|_| resumed.choose_move(&view, &request)).collect();
        assert_eq!(expected, replayed);
    }
}
