//! Move representation.
//!
//! A move is one of three variants:
//! - `Pass`: a seeker with nowhere to go
//! - `Ticket`: spend one ticket to travel to an adjacent node
//! - `Double`: the fugitive spends a double ticket and makes two ticket moves
//!
//! Moves always carry the acting player's colour, so a move drawn from one
//! player's legal set never compares equal to another player's.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::player::Colour;
use super::ticket::Ticket;

/// A single-ticket move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: NodeId,
}

impl TicketMove {
    #[must_use]
    pub const fn new(colour: Colour, ticket: Ticket, destination: NodeId) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }
}

/// Two ticket moves made in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

impl DoubleMove {
    /// Build a double move from its two legs.
    #[must_use]
    pub const fn new(
        colour: Colour,
        first_ticket: Ticket,
        first_destination: NodeId,
        second_ticket: Ticket,
        second_destination: NodeId,
    ) -> Self {
        Self {
            colour,
            first: TicketMove::new(colour, first_ticket, first_destination),
            second: TicketMove::new(colour, second_ticket, second_destination),
        }
    }

    /// Where the player ends up.
    #[must_use]
    pub const fn final_destination(&self) -> NodeId {
        self.second.destination
    }

    /// Whether both legs spend the same ticket kind.
    #[must_use]
    pub fn same_ticket(&self) -> bool {
        self.first.ticket == self.second.ticket
    }
}

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Pass(Colour),
    Ticket(TicketMove),
    Double(DoubleMove),
}

impl Move {
    /// Shorthand for a ticket move.
    #[must_use]
    pub const fn ticket(colour: Colour, ticket: Ticket, destination: NodeId) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    /// Shorthand for a double move.
    #[must_use]
    pub const fn double(
        colour: Colour,
        first_ticket: Ticket,
        first_destination: NodeId,
        second_ticket: Ticket,
        second_destination: NodeId,
    ) -> Self {
        Move::Double(DoubleMove::new(
            colour,
            first_ticket,
            first_destination,
            second_ticket,
            second_destination,
        ))
    }

    /// The player making this move.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        match self {
            Move::Pass(colour) => *colour,
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
        }
    }

    /// Where the player ends up, or `None` for a pass.
    #[must_use]
    pub const fn final_destination(&self) -> Option<NodeId> {
        match self {
            Move::Pass(_) => None,
            Move::Ticket(m) => Some(m.destination),
            Move::Double(m) => Some(m.final_destination()),
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass(_))
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }

    /// Whether any part of this move spends a secret ticket.
    #[must_use]
    pub fn uses_secret(&self) -> bool {
        match self {
            Move::Pass(_) => false,
            Move::Ticket(m) => m.ticket == Ticket::Secret,
            Move::Double(m) => {
                m.first.ticket == Ticket::Secret || m.second.ticket == Ticket::Secret
            }
        }
    }
}

impl From<TicketMove> for Move {
    fn from(m: TicketMove) -> Self {
        Move::Ticket(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass(colour) => write!(f, "{colour} passes"),
            Move::Ticket(m) => write!(f, "{} {} -> {}", m.colour, m.ticket, m.destination),
            Move::Double(m) => write!(
                f,
                "{} double {} -> {}, {} -> {}",
                m.colour, m.first.ticket, m.first.destination, m.second.ticket, m.second.destination
            ),
        }
    }
}

/// An unordered set of legal moves.
pub type MoveSet = FxHashSet<Move>;

/// A move as observers saw it, with the round it was made in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Round counter after the move (0 for seeker moves before the first round).
    pub round: u32,

    /// The move with disclosure substitution applied.
    pub disclosed: Move,
}

impl MoveRecord {
    #[must_use]
    pub fn new(round: u32, disclosed: Move) -> Self {
        Self { round, disclosed }
    }
}
