//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Every racket sport here is played between exactly two sides. A side is a
//! single player in singles and a team of two in doubles.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`. Used for point counts, game
//! counts and set counts so that scoring code never branches on
//! "side one or side two".

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides, in order.
    pub const ALL: [Side; 2] = [Side::One, Side::Two];

    /// Parse a 1-based side number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Side::One),
            2 => Some(Side::Two),
            _ => None,
        }
    }

    /// The 1-based side number used in displays and records.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    /// 0-based index into per-side storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Side {}", self.number())
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use racket_score::core::{Side, SideMap};
///
/// let mut games: SideMap<u32> = SideMap::with_value(0);
/// games[Side::Two] += 1;
///
/// assert_eq!(games[Side::One], 0);
/// assert_eq!(games[Side::Two], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::One), factory(Side::Two)],
        }
    }

    /// Create a SideMap from explicit values for side one and side two.
    pub const fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
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

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// The values as a `(side one, side two)` tuple.
    #[must_use]
    pub fn pair(&self) -> (T, T)
    where
        T: Copy,
    {
        (self.data[0], self.data[1])
    }
}

impl SideMap<u32> {
    /// How far `side` is ahead of its opponent (negative when behind).
    #[must_use]
    pub fn lead(&self, side: Side) -> i64 {
        i64::from(self[side]) - i64::from(self[side.opponent()])
    }

    /// The side with the strictly higher count, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.lead(Side::One) {
            l if l > 0 => Some(Side::One),
            l if l < 0 => Some(Side::Two),
            _ => None,
        }
    }

    /// The larger of the two counts.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.data[0].max(self.data[1])
    }

    /// Sum of both counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data[0] + self.data[1]
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
