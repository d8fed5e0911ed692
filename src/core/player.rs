//! Players and the seat arena.
//!
//! ## Colour
//!
//! The public identity of a player. `Black` is reserved for the fugitive;
//! every other colour is a seeker.
//!
//! ## PlayerId and PlayerMap
//!
//! Players live in a fixed arena. The fugitive is always seat 0 and seekers
//! follow in configuration order, so rotation is just the next index.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::node::NodeId;
use super::ticket::TicketLedger;

/// Player colour. Exactly one player is `Black`, the fugitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    White,
    Yellow,
}

impl Colour {
    /// Colours available to seekers.
    pub const SEEKERS: [Colour; 5] = [
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::White,
        Colour::Yellow,
    ];

    /// Whether this colour belongs to the fugitive.
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Colour::Black)
    }

    /// Whether this colour belongs to a seeker.
    #[must_use]
    pub const fn is_seeker(self) -> bool {
        !self.is_fugitive()
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Seat index in the player arena.
///
/// The fugitive always sits at 0; seekers follow in configuration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The fugitive's seat.
    pub const FUGITIVE: PlayerId = PlayerId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat that acts after this one, wrapping back to the fugitive.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A seated player: colour, true location and tickets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub colour: Colour,
    pub location: NodeId,
    pub tickets: TicketLedger,
}

impl Player {
    #[must_use]
    pub fn new(colour: Colour, location: NodeId, tickets: TicketLedger) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }

    #[must_use]
    pub fn is_fugitive(&self) -> bool {
        self.colour.is_fugitive()
    }

    #[must_use]
    pub fn is_seeker(&self) -> bool {
        self.colour.is_seeker()
    }
}

/// Seats in rotation order, indexed by [`PlayerId`].
///
/// ```
/// use rust_pursuit::core::{PlayerId, PlayerMap};
///
/// let mut moves_made = PlayerMap::from_vec(vec![0u32; 3]);
/// moves_made[PlayerId::new(1)] += 1;
/// assert_eq!(moves_made.values().sum::<u32>(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat `seats` in order. Panics on an empty or oversized arena.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(
            !seats.is_empty() && seats.len() <= usize::from(u8::MAX),
            "arena must hold 1..=255 seats"
        );
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }

    /// Seats with their ids, in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, seat)| (PlayerId(i as u8), seat))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
