//! Ticket kinds and per-player ticket ledgers.
//!
//! ## Ticket
//!
//! Three ordinary kinds pay for travel along an edge of the matching
//! transport. Two special kinds belong to the fugitive:
//! - `Secret`: pays for any edge and hides which transport was used
//! - `Double`: authorizes two consecutive moves in one turn
//!
//! ## TicketLedger
//!
//! Fixed-size counter array indexed by `Ticket`. Balances are unsigned, so
//! an overdraft is reported as an [`InvariantError`] instead of going
//! negative.

use serde::{Deserialize, Serialize};

use super::error::InvariantError;
use super::player::Colour;
use crate::graph::Transport;

/// Kind of ticket a player spends to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Double,
    Secret,
}

impl Ticket {
    /// Number of recognized ticket kinds.
    pub const COUNT: usize = 5;

    /// All ticket kinds, in ledger order.
    pub const ALL: [Ticket; Ticket::COUNT] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Double,
        Ticket::Secret,
    ];

    /// Ticket required to travel along an edge of the given transport.
    ///
    /// Ferries have no ordinary ticket; only a secret ticket pays for them.
    #[must_use]
    pub const fn from_transport(transport: Transport) -> Self {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Ledger slot for this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether only the fugitive may hold this kind.
    #[must_use]
    pub const fn is_fugitive_only(self) -> bool {
        matches!(self, Ticket::Double | Ticket::Secret)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Double => "double",
            Ticket::Secret => "secret",
        };
        f.write_str(name)
    }
}

/// Remaining tickets of each kind for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketLedger {
    counts: [u32; Ticket::COUNT],
}

impl TicketLedger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Ticket::COUNT],
        }
    }

    /// Create a ledger from `(kind, count)` pairs. Later pairs overwrite earlier ones.
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (Ticket, u32)>) -> Self {
        let mut ledger = Self::new();
        for (ticket, count) in counts {
            ledger.counts[ticket.index()] = count;
        }
        ledger
    }

    /// Remaining tickets of a kind.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Whether at least `amount` tickets of a kind remain.
    #[must_use]
    pub fn has(&self, ticket: Ticket, amount: u32) -> bool {
        self.count(ticket) >= amount
    }

    /// Whether every balance is zero.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Total tickets across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Spend one ticket. `owner` only labels the error.
    pub fn debit(&mut self, ticket: Ticket, owner: Colour) -> Result<(), InvariantError> {
        let slot = &mut self.counts[ticket.index()];
        let underflow = InvariantError::TicketUnderflow {
            colour: owner,
            ticket,
        };
        *slot = slot.checked_sub(1).ok_or(underflow)?;
        Ok(())
    }

    /// Receive one ticket.
    pub fn credit(&mut self, ticket: Ticket) {
        self.counts[ticket.index()] += 1;
    }

    /// Iterate over `(kind, count)` pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL
            .iter()
            .map(move |&t| (t, self.counts[t.index()]))
    }
}
