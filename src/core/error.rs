//! Error types.
//!
//! - [`ConfigError`]: rejected at construction; no game is created
//! - [`ProtocolError`]: caller misuse at runtime; state is left untouched
//! - [`InvariantError`]: internal bookkeeping failure, never expected once
//!   the first two are enforced

use thiserror::Error;

use super::moves::Move;
use super::node::NodeId;
use super::player::Colour;
use super::ticket::Ticket;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("round schedule is empty")]
    EmptyRounds,
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("fugitive must be Black, got {0}")]
    FugitiveNotBlack(Colour),
    #[error("seeker cannot be Black")]
    SeekerIsBlack,
    #[error("duplicate colour {0}")]
    DuplicateColour(Colour),
    #[error("duplicate starting location {0}")]
    DuplicateLocation(NodeId),
    #[error("{colour} is missing {ticket} tickets")]
    MissingTicket { colour: Colour, ticket: Ticket },
    #[error("seeker {colour} holds {count} {ticket} tickets")]
    SeekerSpecialTicket {
        colour: Colour,
        ticket: Ticket,
        count: u32,
    },
    #[error("at most {max} seekers are supported, got {got}")]
    TooManySeekers { max: usize, got: usize },
    #[error("at least one seeker is required")]
    NoSeekers,
    #[error("no fugitive configured")]
    MissingFugitive,
    #[error("fugitive has no legal opening move from {0}")]
    FugitiveStranded(NodeId),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("move is not in the legal set: {0}")]
    IllegalMove(Move),
    #[error("no move has been requested")]
    NoPendingRequest,
    #[error("game is already over")]
    GameOver,
    #[error("spectator is already registered")]
    DuplicateSpectator,
    #[error("spectator is not registered")]
    UnknownSpectator,
    #[error("no agent seated for {0}")]
    MissingAgent(Colour),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("{colour} has no {ticket} ticket to spend")]
    TicketUnderflow { colour: Colour, ticket: Ticket },
    #[error("{0} is not seated in this game")]
    UnknownColour(Colour),
}

/// Any error the turn controller can surface.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::EmptyRounds.to_string(),
            "round schedule is empty"
        );
        assert_eq!(
            ConfigError::MissingTicket {
                colour: Colour::Red,
                ticket: Ticket::Bus
            }
            .to_string(),
            "Red is missing bus tickets"
        );
        assert_eq!(
            InvariantError::TicketUnderflow {
                colour: Colour::Black,
                ticket: Ticket::Double
            }
            .to_string(),
            "Black has no double ticket to spend"
        );
    }

    #[test]
    fn test_game_error_from() {
        let err: GameError = ProtocolError::GameOver.into();
        assert_eq!(err, GameError::Protocol(ProtocolError::GameOver));
        assert_eq!(err.to_string(), "game is already over");
    }
}
