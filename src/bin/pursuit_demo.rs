//! Plays one game between random agents on a small board and narrates it.

use std::cell::RefCell;
use std::rc::Rc;

use clap::Parser;
use tracing::info;

use rust_pursuit::core::GameRng;
use rust_pursuit::game::{Agent, Agents, GameBuilder, GameView, RandomAgent, Spectator};
use rust_pursuit::logging;
use rust_pursuit::{
    Colour, GameError, Move, PlayerConfig, RoundSchedule, Transport, TransportGraph, WinReason,
};

const SEEKER_STARTS: [u32; 5] = [7, 4, 10, 13, 12];

#[derive(Parser)]
#[command(name = "pursuit-demo")]
#[command(about = "Play a hidden-movement pursuit game between random agents")]
struct Cli {
    /// Seed for every agent
    #[arg(short, long, default_value_t = 7)]
    seed: u64,

    /// Number of seekers
    #[arg(short = 'n', long, default_value_t = 3)]
    #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
    seekers: u8,

    /// Use the full 24-round schedule instead of a short one
    #[arg(long)]
    standard: bool,

    /// Log engine internals
    #[arg(short, long)]
    verbose: bool,
}

/// A ring of twelve stops with a hub in the middle.
fn board() -> TransportGraph {
    let mut graph = TransportGraph::new();
    for stop in 1..=12u32 {
        graph.add_route(stop, stop % 12 + 1, Transport::Taxi);
    }
    for stop in [1u32, 4, 7, 10] {
        graph.add_route(13u32, stop, Transport::Bus);
    }
    graph.add_route(1, 7, Transport::Underground);
    graph.add_route(4, 10, Transport::Underground);
    graph.add_route(3, 9, Transport::Ferry);
    graph
}

struct Narrator;

impl Spectator for Narrator {
    fn on_round_started(&mut self, _view: &GameView<'_>, round: u32) {
        println!("-- round {round}");
    }

    fn on_move_made(&mut self, _view: &GameView<'_>, mv: &Move) {
        println!("   {mv}");
    }

    fn on_game_over(&mut self, view: &GameView<'_>, winners: &[Colour], reason: WinReason) {
        let names: Vec<String> = winners.iter().map(ToString::to_string).collect();
        let (round, names) = (view.current_round(), names.join(", "));
        println!("game over after round {round}: {reason:?}, won by {names}");
    }
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rounds = if cli.standard {
        RoundSchedule::standard()
    } else {
        RoundSchedule::new(vec![false, false, true, false, false, true, false, false])?
    };

    let mut builder = GameBuilder::new()
        .rounds(rounds)
        .fugitive(PlayerConfig::fugitive_defaults(1));
    let seated = &Colour::SEEKERS[..usize::from(cli.seekers)];
    for (colour, start) in seated.iter().zip(SEEKER_STARTS) {
        builder = builder.seeker(PlayerConfig::seeker_defaults(*colour, start));
    }
    let mut game = builder.build(board())?;
    game.register_spectator(Rc::new(RefCell::new(Narrator)))?;

    let mut rng = GameRng::new(cli.seed);
    let mut agents = Agents::default();
    for colour in game.players() {
        let agent: Box<dyn Agent> = Box::new(RandomAgent::from_rng(rng.fork()));
        agents.insert(colour, agent);
    }

    info!(seed = cli.seed, seekers = cli.seekers, "starting game");
    let result = game.play_to_end(&mut agents)?;
    info!(reason = ?result.reason, "finished");
    Ok(())
}
