//! Legal move generation.
//!
//! Generation is pure: it reads the state and the graph and returns the
//! full legal set for one player. The set is unordered; callers that need a
//! stable order should sort (moves are `Ord`).
//!
//! ## Destination rules
//!
//! - A node held by another seeker blocks seekers.
//! - A node held by the fugitive never blocks a seeker; that move is a capture.
//! - The fugitive may step onto a seeker (and is caught). Such a first leg
//!   is offered as a single move only, never as the start of a double move.
//!
//! ## Ticket rules
//!
//! Each leg costs the ticket matching its transport, or a secret ticket
//! when the fugitive conceals it. A double move additionally costs one
//! double ticket and needs two scheduled rounds left.

use tracing::trace;

use crate::core::{
    Colour, DoubleMove, GameState, Move, MoveSet, NodeId, Player, PlayerId, RoundSchedule, Ticket,
    TicketLedger, TicketMove,
};
use crate::graph::{Edge, Graph};

/// Legal moves for the player to act.
pub fn legal_moves<G: Graph>(graph: &G, rounds: &RoundSchedule, state: &GameState) -> MoveSet {
    legal_moves_for(graph, rounds, state, state.current)
}

/// Legal moves for `player`, as if it were that player's turn.
pub fn legal_moves_for<G: Graph>(
    graph: &G,
    rounds: &RoundSchedule,
    state: &GameState,
    player: PlayerId,
) -> MoveSet {
    let mover = &state.players[player];
    let reachable = open_edges(graph, state, player, mover.location);

    let moves = if mover.is_fugitive() {
        fugitive_moves(graph, rounds, state, mover, &reachable)
    } else {
        seeker_moves(mover, &reachable)
    };

    trace!(colour = %mover.colour, count = moves.len(), "generated legal moves");
    moves
}

/// Edges from `from` whose destination `player` may enter.
fn open_edges<G: Graph>(graph: &G, state: &GameState, player: PlayerId, from: NodeId) -> Vec<Edge> {
    let mover_is_fugitive = state.players[player].is_fugitive();
    graph
        .edges_from(from)
        .into_iter()
        .filter(|edge| match state.occupant(edge.destination, player) {
            None => true,
            Some(occupant) => mover_is_fugitive || occupant.is_fugitive(),
        })
        .collect()
}

fn seeker_moves(mover: &Player, reachable: &[Edge]) -> MoveSet {
    let mut moves: MoveSet = plain_moves(mover, reachable).map(Move::Ticket).collect();
    if moves.is_empty() {
        moves.insert(Move::Pass(mover.colour));
    }
    moves
}

/// Single moves paid with the edge's own ticket.
fn plain_moves<'a>(
    mover: &'a Player,
    reachable: &'a [Edge],
) -> impl Iterator<Item = TicketMove> + 'a {
    reachable.iter().filter_map(move |edge| {
        let ticket = Ticket::from_transport(edge.transport);
        mover
            .tickets
            .has(ticket, 1)
            .then(|| TicketMove::new(mover.colour, ticket, edge.destination))
    })
}

fn fugitive_moves<G: Graph>(
    graph: &G,
    rounds: &RoundSchedule,
    state: &GameState,
    mover: &Player,
    reachable: &[Edge],
) -> MoveSet {
    let tickets = &mover.tickets;
    let mut moves: MoveSet = plain_moves(mover, reachable).map(Move::Ticket).collect();

    if tickets.has(Ticket::Secret, 1) {
        moves.extend(
            reachable
                .iter()
                .map(|edge| Move::ticket(mover.colour, Ticket::Secret, edge.destination)),
        );
    }

    if tickets.has(Ticket::Double, 1) && rounds.remaining(state.round) >= 2 {
        let occupied = |node| state.occupant(node, PlayerId::FUGITIVE).is_some();
        for first in reachable.iter().filter(|edge| !occupied(edge.destination)) {
            for second in open_edges(graph, state, PlayerId::FUGITIVE, first.destination) {
                let doubles = double_moves(mover.colour, tickets, first, &second);
                moves.extend(doubles.map(Move::Double));
            }
        }
    }

    moves
}

/// Every affordable concealment pattern for one two-hop path.
fn double_moves<'a>(
    colour: Colour,
    tickets: &'a TicketLedger,
    first: &'a Edge,
    second: &'a Edge,
) -> impl Iterator<Item = DoubleMove> + 'a {
    let plain_first = Ticket::from_transport(first.transport);
    let plain_second = Ticket::from_transport(second.transport);

    [
        (plain_first, plain_second),
        (Ticket::Secret, plain_second),
        (plain_first, Ticket::Secret),
        (Ticket::Secret, Ticket::Secret),
    ]
    .into_iter()
    .filter(move |&(a, b)| can_pay(tickets, a, b))
    .map(move |(a, b)| DoubleMove::new(colour, a, first.destination, b, second.destination))
}

/// Whether both legs can be paid. The double ticket itself is checked by the caller.
fn can_pay(tickets: &TicketLedger, first: Ticket, second: Ticket) -> bool {
    if first == second {
        tickets.has(first, 2)
    } else {
        tickets.has(first, 1) && tickets.has(second, 1)
    }
}
