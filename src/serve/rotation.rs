//! Doubles serve rotation.
//!
//! Players are numbered 1-4. Players 1 and 3 form side one, players 2 and 4
//! form side two. A custom rotation is chosen at match start by naming the
//! first server and the second server (who must be on the other side); the
//! cycle is then
//!
//! ```text
//! first -> second -> first's partner -> second's partner -> first -> ...
//! ```
//!
//! so consecutive servers always alternate sides.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// One of the four doubles players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerSlot {
    P1,
    P2,
    P3,
    P4,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 4] = [PlayerSlot::P1, PlayerSlot::P2, PlayerSlot::P3, PlayerSlot::P4];

    /// Parse a 1-based player number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerSlot::P1),
            2 => Some(PlayerSlot::P2),
            3 => Some(PlayerSlot::P3),
            4 => Some(PlayerSlot::P4),
            _ => None,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerSlot::P1 => 1,
            PlayerSlot::P2 => 2,
            PlayerSlot::P3 => 3,
            PlayerSlot::P4 => 4,
        }
    }

    /// The side this player plays for.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            PlayerSlot::P1 | PlayerSlot::P3 => Side::One,
            PlayerSlot::P2 | PlayerSlot::P4 => Side::Two,
        }
    }

    /// The other player on the same side.
    #[must_use]
    pub const fn partner(self) -> Self {
        match self {
            PlayerSlot::P1 => PlayerSlot::P3,
            PlayerSlot::P3 => PlayerSlot::P1,
            PlayerSlot::P2 => PlayerSlot::P4,
            PlayerSlot::P4 => PlayerSlot::P2,
        }
    }

    /// Both players of a side, lower number first.
    #[must_use]
    pub const fn members(side: Side) -> [PlayerSlot; 2] {
        match side {
            Side::One => [PlayerSlot::P1, PlayerSlot::P3],
            Side::Two => [PlayerSlot::P2, PlayerSlot::P4],
        }
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// The four-player cycle for a custom rotation.
#[must_use]
pub fn rotation_cycle(first: PlayerSlot, second: PlayerSlot) -> [PlayerSlot; 4] {
    [first, second, first.partner(), second.partner()]
}

/// Next server in the custom rotation starting `first -> second`.
///
/// `second` must be on the other side from `first`. When both are on the
/// same side there is no rotation and `current` is returned unchanged.
#[must_use]
pub fn next_server(first: PlayerSlot, second: PlayerSlot, current: PlayerSlot) -> PlayerSlot {
    if first.side() == second.side() {
        return current;
    }

    let cycle = rotation_cycle(first, second);
    match cycle.iter().position(|&slot| slot == current) {
        Some(i) => cycle[(i + 1) % cycle.len()],
        None => current,
    }
}

/// How doubles servers follow each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServeRotation {
    /// Order chosen at match start.
    Custom { first: PlayerSlot, second: PlayerSlot },
    /// Fixed 1 -> 2 -> 3 -> 4 -> 1.
    Standard,
}

impl ServeRotation {
    /// A custom rotation, or `None` when both servers are on the same side.
    #[must_use]
    pub fn custom(first: PlayerSlot, second: PlayerSlot) -> Option<Self> {
        (first.side() != second.side()).then_some(ServeRotation::Custom { first, second })
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, ServeRotation::Custom { .. })
    }

    /// The player who serves first under this rotation.
    #[must_use]
    pub fn opening_server(&self) -> PlayerSlot {
        match *self {
            ServeRotation::Custom { first, .. } => first,
            ServeRotation::Standard => PlayerSlot::P1,
        }
    }

    /// One step along the rotation.
    #[must_use]
    pub fn next(&self, current: PlayerSlot) -> PlayerSlot {
        match *self {
            ServeRotation::Custom { first, second } => next_server(first, second, current),
            ServeRotation::Standard => match current {
                PlayerSlot::P1 => PlayerSlot::P2,
                PlayerSlot::P2 => PlayerSlot::P3,
                PlayerSlot::P3 => PlayerSlot::P4,
                PlayerSlot::P4 => PlayerSlot::P1,
            },
        }
    }

    /// Step once, then once more if the step landed on the wrong side.
    ///
    /// Both cycles alternate sides, so the result is always on `side`.
    #[must_use]
    pub fn next_on_side(&self, current: PlayerSlot, side: Side) -> PlayerSlot {
        let stepped = self.next(current);
        if stepped.side() == side {
            stepped
        } else {
            self.next(stepped)
        }
    }
}

/// Doubles serve tracking carried inside score states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoublesServe {
    pub rotation: ServeRotation,
    pub current: PlayerSlot,
}

impl DoublesServe {
    /// Start a rotation at its opening server.
    #[must_use]
    pub fn new(rotation: ServeRotation) -> Self {
        Self {
            rotation,
            current: rotation.opening_server(),
        }
    }

    /// Start a rotation at a specific server.
    #[must_use]
    pub fn starting_at(rotation: ServeRotation, current: PlayerSlot) -> Self {
        Self { rotation, current }
    }

    /// Side of the current server.
    #[must_use]
    pub fn serving_side(&self) -> Side {
        self.current.side()
    }

    /// The next server in rotation.
    #[must_use]
    pub fn advanced(self) -> Self {
        Self {
            current: self.rotation.next(self.current),
            ..self
        }
    }

    /// The next server in rotation who plays for `side`.
    #[must_use]
    pub fn advanced_to(self, side: Side) -> Self {
        Self {
            current: self.rotation.next_on_side(self.current, side),
            ..self
        }
    }
}
