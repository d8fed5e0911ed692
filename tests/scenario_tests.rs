//! End-to-end rule scenarios.
//!
//! Each test sets up a tiny board, plays a few turns through the
//! controller, and checks both the resulting state and what spectators saw.

use std::cell::RefCell;
use std::rc::Rc;

use rust_pursuit::core::{Player, PlayerMap, TicketLedger};
use rust_pursuit::game::{Agents, FirstMoveAgent, GameView, PursuitGame, Spectator, TurnOutcome};
use rust_pursuit::rules::{GameEvent, Rules};
use rust_pursuit::{
    Colour, GameConfig, GameState, Move, NodeId, PlayerConfig, PlayerId, RoundSchedule, Ticket,
    Transport, TransportGraph, WinReason,
};

#[derive(Default)]
struct Recorder {
    events: Vec<GameEvent>,
}

impl Spectator for Recorder {
    fn on_round_started(&mut self, _view: &GameView<'_>, round: u32) {
        self.events.push(GameEvent::RoundStarted { round });
    }

    fn on_move_made(&mut self, _view: &GameView<'_>, mv: &Move) {
        self.events.push(GameEvent::MoveMade(*mv));
    }

    fn on_rotation_complete(&mut self, _view: &GameView<'_>) {
        self.events.push(GameEvent::RotationComplete);
    }

    fn on_game_over(&mut self, _view: &GameView<'_>, winners: &[Colour], reason: WinReason) {
        self.events.push(GameEvent::GameOver {
            winners: winners.to_vec(),
            reason,
        });
    }
}

fn n(id: u32) -> NodeId {
    NodeId::new(id)
}

fn double(first: Ticket, via: NodeId, second: Ticket, to: NodeId) -> Move {
    Move::double(Colour::Black, first, via, second, to)
}

fn schedule(rounds: &[bool]) -> RoundSchedule {
    RoundSchedule::new(rounds.to_vec()).unwrap()
}

/// Fugitive holding only the given tickets.
fn fugitive_with(location: u32, tickets: &[(Ticket, u32)]) -> PlayerConfig {
    let mut config = PlayerConfig::new(Colour::Black, location, Ticket::ALL.map(|t| (t, 0)));
    for &(ticket, count) in tickets {
        config = config.with_tickets(ticket, count);
    }
    config
}

fn seeker_with(colour: Colour, location: u32, tickets: &[(Ticket, u32)]) -> PlayerConfig {
    let mut config = PlayerConfig::new(colour, location, Ticket::ALL.map(|t| (t, 0)));
    for &(ticket, count) in tickets {
        config = config.with_tickets(ticket, count);
    }
    config
}

fn recorded(game: &mut PursuitGame<TransportGraph>) -> Rc<RefCell<Recorder>> {
    let recorder = Rc::new(RefCell::new(Recorder::default()));
    game.register_spectator(recorder.clone()).unwrap();
    recorder
}

fn play(game: &mut PursuitGame<TransportGraph>, mv: Move) -> TurnOutcome {
    let request = game.request_move().unwrap();
    assert!(request.moves.contains(&mv), "{mv} not offered");
    game.submit_move(mv).unwrap()
}

// =============================================================================
// Scenario A: fugitive walks onto a seeker
// =============================================================================

#[test]
fn test_fugitive_may_walk_into_capture() {
    let graph = TransportGraph::from_routes([(1, 2, Transport::Taxi)]);
    let config = GameConfig::new(
        schedule(&[true, false]),
        fugitive_with(1, &[(Ticket::Taxi, 1)]),
        PlayerConfig::seeker_defaults(Colour::Red, 2),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();
    let recorder = recorded(&mut game);

    let into_seeker = Move::ticket(Colour::Black, Ticket::Taxi, n(2));
    let outcome = play(&mut game, into_seeker);

    let TurnOutcome::GameOver(result) = outcome else {
        panic!("expected game over, got {outcome:?}");
    };
    assert_eq!(result.reason, WinReason::Captured);
    assert_eq!(result.winners, vec![Colour::Red]);
    assert!(game.is_game_over());
    assert_eq!(game.winning_players(), vec![Colour::Red]);

    assert_eq!(
        recorder.borrow().events,
        vec![
            GameEvent::RoundStarted { round: 1 },
            GameEvent::MoveMade(into_seeker),
            GameEvent::GameOver {
                winners: vec![Colour::Red],
                reason: WinReason::Captured,
            },
        ]
    );
}

// =============================================================================
// Scenario B: no special tickets, no special moves
// =============================================================================

#[test]
fn test_plain_tickets_only_without_specials() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (1, 3, Transport::Bus),
        (2, 3, Transport::Taxi),
        (3, 4, Transport::Underground),
    ]);
    let config = GameConfig::new(
        schedule(&[false; 5]),
        PlayerConfig::fugitive_defaults(1)
            .with_tickets(Ticket::Secret, 0)
            .with_tickets(Ticket::Double, 0),
        PlayerConfig::seeker_defaults(Colour::Blue, 4),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();

    let request = game.request_move().unwrap();
    assert_eq!(request.moves.len(), 2);
    for mv in &request.moves {
        assert!(!mv.is_double());
        assert!(!mv.uses_secret());
    }
}

#[test]
fn test_specials_add_secret_and_double_moves() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Bus),
        (9, 8, Transport::Taxi),
    ]);
    let config = GameConfig::new(
        schedule(&[false; 5]),
        PlayerConfig::fugitive_defaults(1),
        PlayerConfig::seeker_defaults(Colour::Blue, 9),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();

    let moves = game.request_move().unwrap().moves;
    assert!(moves.contains(&Move::ticket(Colour::Black, Ticket::Secret, n(2))));
    assert!(moves.contains(&double(Ticket::Taxi, n(2), Ticket::Bus, n(3))));
    assert!(moves.contains(&double(Ticket::Secret, n(2), Ticket::Secret, n(3))));
    assert!(moves.contains(&double(Ticket::Taxi, n(2), Ticket::Taxi, n(1))));
}

// =============================================================================
// Scenario C: stuck seekers pass
// =============================================================================

#[test]
fn test_surrounded_seeker_gets_pass() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (1, 3, Transport::Bus),
        (9, 8, Transport::Taxi),
    ]);
    let config = GameConfig::new(
        schedule(&[false; 4]),
        fugitive_with(9, &[(Ticket::Taxi, 2)]),
        PlayerConfig::seeker_defaults(Colour::Red, 1),
    )
    .with_seeker(PlayerConfig::seeker_defaults(Colour::Green, 2))
    .with_seeker(PlayerConfig::seeker_defaults(Colour::Yellow, 3));
    let mut game = PursuitGame::new(config, graph).unwrap();

    play(&mut game, Move::ticket(Colour::Black, Ticket::Taxi, n(8)));

    let request = game.request_move().unwrap();
    assert_eq!(request.colour, Colour::Red);
    assert_eq!(request.moves.len(), 1);
    assert!(request.moves.contains(&Move::Pass(Colour::Red)));

    let outcome = game.submit_move(Move::Pass(Colour::Red)).unwrap();
    assert_eq!(outcome, TurnOutcome::NextTurn(Colour::Green));
    assert_eq!(game.player_location(Colour::Red), Some(n(1)));
}

#[test]
fn test_ticketless_seeker_gets_pass() {
    let graph = TransportGraph::from_routes([(1, 2, Transport::Taxi), (5, 6, Transport::Bus)]);
    let rules = Rules::new(graph, schedule(&[false; 3]));
    let taxis = |count| TicketLedger::from_counts([(Ticket::Taxi, count)]);
    let state = GameState::new(PlayerMap::from_vec(vec![
        Player::new(Colour::Black, n(1), taxis(1)),
        Player::new(Colour::Blue, n(5), taxis(3)),
    ]));

    let moves = rules.legal_moves_for(&state, PlayerId::new(1));
    assert_eq!(moves.len(), 1);
    assert!(moves.contains(&Move::Pass(Colour::Blue)));
}

// =============================================================================
// Scenario D: double move across a reveal
// =============================================================================

#[test]
fn test_double_move_hidden_then_revealed() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Bus),
        (9, 8, Transport::Taxi),
    ]);
    let config = GameConfig::new(
        schedule(&[false, true, false]),
        PlayerConfig::fugitive_defaults(1),
        PlayerConfig::seeker_defaults(Colour::Red, 9),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();
    let recorder = recorded(&mut game);

    let outcome = play(&mut game, double(Ticket::Taxi, n(2), Ticket::Bus, n(3)));

    assert_eq!(outcome, TurnOutcome::NextTurn(Colour::Red));
    assert_eq!(
        recorder.borrow().events,
        vec![
            GameEvent::MoveMade(double(Ticket::Taxi, NodeId::UNKNOWN, Ticket::Bus, n(3))),
            GameEvent::RoundStarted { round: 1 },
            GameEvent::MoveMade(Move::ticket(Colour::Black, Ticket::Taxi, NodeId::UNKNOWN)),
            GameEvent::RoundStarted { round: 2 },
            GameEvent::MoveMade(Move::ticket(Colour::Black, Ticket::Bus, n(3))),
        ]
    );
    assert_eq!(game.current_round(), 2);
    assert_eq!(game.player_location(Colour::Black), Some(n(3)));
    assert_eq!(game.player_tickets(Colour::Black, Ticket::Double), Some(1));
    assert_eq!(game.log().len(), 3);
}

#[test]
fn test_double_move_shows_stale_location_before_reveal() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Taxi),
        (3, 4, Transport::Taxi),
        (9, 8, Transport::Taxi),
    ]);
    let config = GameConfig::new(
        schedule(&[true, false, true, false]),
        PlayerConfig::fugitive_defaults(1),
        PlayerConfig::seeker_defaults(Colour::Red, 9),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();

    play(&mut game, Move::ticket(Colour::Black, Ticket::Taxi, n(2)));
    assert_eq!(game.player_location(Colour::Black), Some(n(2)));
    play(&mut game, Move::ticket(Colour::Red, Ticket::Taxi, n(8)));

    let recorder = recorded(&mut game);
    play(&mut game, double(Ticket::Taxi, n(3), Ticket::Taxi, n(4)));

    let shown = double(Ticket::Taxi, n(2), Ticket::Taxi, n(4));
    assert_eq!(recorder.borrow().events[0], GameEvent::MoveMade(shown));
}

// =============================================================================
// Scenario E: seekers run dry
// =============================================================================

#[test]
fn test_seekers_out_of_tickets() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (5, 6, Transport::Taxi),
        (7, 8, Transport::Bus),
    ]);
    let config = GameConfig::new(
        schedule(&[false; 6]),
        fugitive_with(1, &[(Ticket::Taxi, 3)]),
        seeker_with(Colour::Red, 5, &[(Ticket::Taxi, 1)]),
    )
    .with_seeker(seeker_with(Colour::Blue, 7, &[]));
    let mut game = PursuitGame::new(config, graph).unwrap();
    assert!(!game.is_game_over());

    play(&mut game, Move::ticket(Colour::Black, Ticket::Taxi, n(2)));
    let outcome = play(&mut game, Move::ticket(Colour::Red, Ticket::Taxi, n(6)));

    let TurnOutcome::GameOver(result) = outcome else {
        panic!("expected game over, got {outcome:?}");
    };
    assert_eq!(result.reason, WinReason::SeekersOutOfTickets);
    assert_eq!(result.winners, vec![Colour::Black]);
    assert_eq!(game.player_tickets(Colour::Black, Ticket::Taxi), Some(3));
    assert_eq!(game.current_round(), 1);
}

// =============================================================================
// Full schedule
// =============================================================================

#[test]
fn test_fugitive_wins_when_schedule_runs_out() {
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Taxi),
        (3, 4, Transport::Taxi),
        (10, 11, Transport::Taxi),
    ]);
    let config = GameConfig::new(
        schedule(&[false, true, false]),
        PlayerConfig::fugitive_defaults(1),
        PlayerConfig::seeker_defaults(Colour::Yellow, 10),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();

    let mut agents = Agents::default();
    agents.insert(Colour::Black, Box::new(FirstMoveAgent));
    agents.insert(Colour::Yellow, Box::new(FirstMoveAgent));
    let result = game.play_to_end(&mut agents).unwrap();

    assert_eq!(result.reason, WinReason::RoundsExhausted);
    assert_eq!(result.winners, vec![Colour::Black]);
    assert_eq!(game.current_round(), 3);
    assert_eq!(game.current_player(), Colour::Black);
}

#[test]
fn test_fugitive_cornered() {
    // White's spent ticket is credited to Black, so White rides a line
    // that Black cannot use from node 2.
    let graph = TransportGraph::from_routes([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Bus),
        (5, 6, Transport::Underground),
    ]);
    let config = GameConfig::new(
        schedule(&[false; 4]),
        fugitive_with(1, &[(Ticket::Taxi, 1)]),
        PlayerConfig::seeker_defaults(Colour::White, 5),
    );
    let mut game = PursuitGame::new(config, graph).unwrap();

    play(&mut game, Move::ticket(Colour::Black, Ticket::Taxi, n(2)));
    let ride = Move::ticket(Colour::White, Ticket::Underground, n(6));
    let outcome = play(&mut game, ride);

    let TurnOutcome::GameOver(result) = outcome else {
        panic!("expected game over, got {outcome:?}");
    };
    assert_eq!(result.reason, WinReason::FugitiveCornered);
    assert_eq!(result.winners, vec![Colour::White]);
    let black = |ticket| game.player_tickets(Colour::Black, ticket);
    assert_eq!(black(Ticket::Underground), Some(1));
    assert_eq!(black(Ticket::Taxi), Some(0));
}
