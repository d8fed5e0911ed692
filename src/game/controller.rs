//! Turn controller.
//!
//! [`PursuitGame`] owns the canonical state and the spectator registry and
//! is the only thing that mutates either during play.
//!
//! ## Turn protocol
//!
//! 1. `request_move` computes the acting player's legal set and parks it as
//!    the pending request. Asking again before submitting returns the same
//!    request.
//! 2. `submit_move` checks the move against the pending set, applies it,
//!    notifies spectators and re-checks the win conditions.
//!
//! Rejected calls never mutate anything. After the last seeker acts,
//! spectators hear `RotationComplete` unless the game ended instead.

use tracing::{debug, instrument, warn};

use super::agent::Agents;
use super::spectator::{SharedSpectator, SpectatorHub};
use super::view::GameView;
use crate::core::{
    Colour, ConfigError, GameConfig, GameError, GameState, Move, MoveRecord, MoveSet, NodeId,
    Player, PlayerMap, ProtocolError, RoundSchedule, Ticket,
};
use crate::graph::Graph;
use crate::rules::{EventSink, GameEvent, GameResult, Rules};

/// What the acting player is asked to choose from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub colour: Colour,

    /// The acting player's true location.
    pub location: NodeId,

    pub moves: MoveSet,
}

impl MoveRequest {
    /// Legal moves in their total order.
    #[must_use]
    pub fn sorted_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.moves.iter().copied().collect();
        moves.sort_unstable();
        moves
    }
}

/// Result of a submitted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play continues with this colour.
    NextTurn(Colour),

    /// Every seeker has acted; the fugitive is next.
    RotationComplete,

    GameOver(GameResult),
}

/// One game of pursuit on graph `G`.
pub struct PursuitGame<G> {
    rules: Rules<G>,
    state: GameState,
    pending: Option<MoveRequest>,

    /// Fugitive's legal set as of the last time it came up to act.
    fugitive_moves: Option<MoveSet>,

    spectators: SpectatorHub,
}

impl<G: Graph> PursuitGame<G> {
    /// Validate `config` and seat the players.
    pub fn new(config: GameConfig, graph: G) -> Result<Self, ConfigError> {
        config.validate()?;
        if graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }

        let players = config
            .players()
            .map(|p| Player::new(p.colour, p.location, p.ledger()))
            .collect();
        let mut state = GameState::new(PlayerMap::from_vec(players));
        let rules = Rules::new(graph, config.rounds);

        let opening = rules.legal_moves(&state);
        if !rules.is_game_over(&mut state, Some(&opening)) && opening.is_empty() {
            return Err(ConfigError::FugitiveStranded(state.fugitive().location));
        }
        debug!(
            players = state.player_count(),
            rounds = rules.rounds().len(),
            "game created"
        );

        Ok(Self {
            rules,
            state,
            pending: None,
            fugitive_moves: Some(opening),
            spectators: SpectatorHub::new(),
        })
    }

    // === Turn protocol ===

    /// Ask for the acting player's move.
    #[instrument(skip_all, fields(round = self.state.round))]
    pub fn request_move(&mut self) -> Result<MoveRequest, ProtocolError> {
        if self.state.is_game_over() {
            warn!("move requested after game over");
            return Err(ProtocolError::GameOver);
        }
        if let Some(pending) = &self.pending {
            return Ok(pending.clone());
        }

        let player = self.state.current_player();
        let request = MoveRequest {
            colour: player.colour,
            location: player.location,
            moves: self.rules.legal_moves(&self.state),
        };
        if self.state.fugitive_to_act() {
            self.fugitive_moves = Some(request.moves.clone());
        }
        debug!(colour = %request.colour, moves = request.moves.len(), "move requested");

        self.pending = Some(request.clone());
        Ok(request)
    }

    /// Answer the pending request.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn submit_move(&mut self, mv: Move) -> Result<TurnOutcome, GameError> {
        if self.state.is_game_over() {
            warn!("move submitted after game over");
            return Err(ProtocolError::GameOver.into());
        }
        let Some(pending) = &self.pending else {
            warn!("move submitted without a request");
            return Err(ProtocolError::NoPendingRequest.into());
        };
        if !pending.moves.contains(&mv) {
            warn!("illegal move rejected");
            return Err(ProtocolError::IllegalMove(mv).into());
        }
        self.pending = None;

        let mut sink = self.spectators.dispatch(self.rules.rounds());
        self.rules.apply(&mut self.state, &mv, &mut sink)?;

        self.fugitive_moves = self
            .state
            .fugitive_to_act()
            .then(|| self.rules.legal_moves(&self.state));
        let fugitive_moves = self.fugitive_moves.as_ref();
        self.rules.is_game_over(&mut self.state, fugitive_moves);

        if let Some(result) = GameResult::from_state(&self.state) {
            let event = GameEvent::GameOver {
                winners: result.winners.clone(),
                reason: result.reason,
            };
            sink.emit(&self.state, event);
            return Ok(TurnOutcome::GameOver(result));
        }
        if self.state.fugitive_to_act() {
            sink.emit(&self.state, GameEvent::RotationComplete);
            return Ok(TurnOutcome::RotationComplete);
        }

        let next = self.state.current_colour();
        debug!(next = %next, "turn passed");
        Ok(TurnOutcome::NextTurn(next))
    }

    /// Drive turns with synchronous agents until the rotation completes or
    /// the game ends.
    pub fn start_rotate(&mut self, agents: &mut Agents) -> Result<TurnOutcome, GameError> {
        loop {
            let request = self.request_move()?;
            let agent = agents
                .get_mut(&request.colour)
                .ok_or(ProtocolError::MissingAgent(request.colour))?;
            let mv = agent.choose_move(&self.view(), &request);
            match self.submit_move(mv)? {
                TurnOutcome::NextTurn(_) => continue,
                outcome => return Ok(outcome),
            }
        }
    }

    /// Rotate until the game ends.
    pub fn play_to_end(&mut self, agents: &mut Agents) -> Result<GameResult, GameError> {
        if let Some(result) = self.result() {
            return Ok(result);
        }
        loop {
            if let TurnOutcome::GameOver(result) = self.start_rotate(agents)? {
                return Ok(result);
            }
        }
    }

    /// The request waiting for an answer, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<&MoveRequest> {
        self.pending.as_ref()
    }

    // === Spectators ===

    pub fn register_spectator(&mut self, spectator: SharedSpectator) -> Result<(), ProtocolError> {
        self.spectators.register(spectator)
    }

    pub fn unregister_spectator(
        &mut self,
        spectator: &SharedSpectator,
    ) -> Result<(), ProtocolError> {
        self.spectators.unregister(spectator)
    }

    #[must_use]
    pub fn spectators(&self) -> Vec<SharedSpectator> {
        self.spectators.spectators()
    }

    // === Status ===

    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.state, self.rules.rounds())
    }

    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.view().players()
    }

    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_colour()
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn rounds(&self) -> &RoundSchedule {
        self.rules.rounds()
    }

    #[must_use]
    pub fn graph(&self) -> &G {
        self.rules.graph()
    }

    /// Visibility-filtered for the fugitive; `None` for absent colours.
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<NodeId> {
        self.view().player_location(colour)
    }

    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.view().player_tickets(colour, ticket)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winning_players(&self) -> Vec<Colour> {
        self.view().winning_players()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::from_state(&self.state)
    }

    #[must_use]
    pub fn log(&self) -> &im::Vector<MoveRecord> {
        &self.state.log
    }

    /// Full state, including the fugitive's true location.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &Rules<G> {
        &self.rules
    }
}

impl<G> std::fmt::Debug for PursuitGame<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PursuitGame")
            .field("round", &self.state.round)
            .field("current", &self.state.current)
            .field("pending", &self.pending.is_some())
            .field("spectators", &self.spectators)
            .finish_non_exhaustive()
    }
}
