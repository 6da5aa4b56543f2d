//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe label for one of the two sides of a duel.
//!
//! ## Seats
//!
//! Fixed two-slot storage indexed by `Seat`. The turn order swaps which seat
//! is current; the stored values themselves never move.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The side that takes the first turn.
    First,
    /// The side that moves second.
    Second,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Get the slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "Seat 1"),
            Seat::Second => write!(f, "Seat 2"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mana_duel::core::{Seat, Seats};
///
/// let mut health = Seats::new(30, 30);
/// health[Seat::Second] -= 4;
///
/// assert_eq!(health[Seat::First], 30);
/// assert_eq!(health[Seat::Second], 26);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    data: [T; 2],
}

impl<T> Seats<T> {
    /// Create storage holding `first` and `second`.
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Borrow `seat` and its opponent mutably at the same time.
    ///
    /// Returns `(seat's data, other seat's data)`.
    pub fn pair_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        match seat {
            Seat::First => (first, second),
            Seat::Second => (second, first),
        }
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for Seats<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for Seats<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
