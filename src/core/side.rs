//! Seat identification and per-seat data storage.
//!
//! ## Side
//!
//! Cribbage is strictly two-handed here, so a seat is one of two variants
//! rather than an open-ended index.
//!
//! ## SideMap
//!
//! Per-side storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides in seating order.
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player #{}", self.index() + 1)
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use cribbage_engine::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
/// scores[Side::Two] += 3;
///
/// assert_eq!(scores[Side::One], 0);
/// assert_eq!(scores[Side::Two], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::One), factory(Side::Two)],
        }
    }

    /// Create a SideMap from explicit values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
