//! Scoring engine trait for sport implementations.
//!
//! Sports implement `ScoringEngine` to define:
//! - How a point changes the score
//! - When the unit being scored (game or match) is decided
//!
//! Engines are pure: they take the current state by reference and return a
//! new one. Undo is the caller keeping the old value.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// What a single point completed.
///
/// Flags are cumulative in the obvious way: a point that wins the match
/// also wins the set and the game it was played in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointFlags {
    pub game_won: bool,
    pub set_won: bool,
    pub match_won: bool,
    /// Serve passed to the other side without a point being scored.
    pub side_out: bool,
    /// The point brought a set to 6-6 and started a tiebreak.
    pub tiebreak_started: bool,
}

impl PointFlags {
    /// Flags for a point that won a game and nothing more.
    #[must_use]
    pub const fn game() -> Self {
        Self {
            game_won: true,
            set_won: false,
            match_won: false,
            side_out: false,
            tiebreak_started: false,
        }
    }

    /// True when no boundary was crossed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }

    /// Combine flags from two consecutive transitions.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            game_won: self.game_won || other.game_won,
            set_won: self.set_won || other.set_won,
            match_won: self.match_won || other.match_won,
            side_out: self.side_out || other.side_out,
            tiebreak_started: self.tiebreak_started || other.tiebreak_started,
        }
    }
}

/// Result of applying one point: the next state plus what it completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub state: S,
    pub flags: PointFlags,
}

impl<S> Transition<S> {
    #[must_use]
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            flags: PointFlags::default(),
        }
    }

    #[must_use]
    pub fn with_flags(state: S, flags: PointFlags) -> Self {
        Self { state, flags }
    }

    /// Wrap the state, keeping the flags.
    #[must_use]
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Transition<T> {
        Transition {
            state: f(self.state),
            flags: self.flags,
        }
    }
}

/// Scoring engine trait.
///
/// ## Implementation Notes
///
/// - `apply_point` must be deterministic and must not mutate its input
/// - `decided` returns `None` while play continues
/// - Points applied to a decided state return it unchanged with quiet flags
pub trait ScoringEngine {
    /// Score state this engine advances.
    type State: Clone;

    /// Award a point to `winner`.
    fn apply_point(&self, state: &Self::State, winner: Side) -> Transition<Self::State>;

    /// The side that has won the unit this engine scores, if decided.
    fn decided(&self, state: &Self::State) -> Option<Side>;

    // === Convenience Methods ===

    /// Apply a sequence of points, stopping early once the state is decided.
    ///
    /// Returns the final state and the merged flags of every applied point.
    fn replay<I>(&self, state: &Self::State, points: I) -> Transition<Self::State>
    where
        I: IntoIterator<Item = Side>,
    {
        let mut current = state.clone();
        let mut flags = PointFlags::default();

        for winner in points {
            if self.decided(&current).is_some() {
                break;
            }
            let next = self.apply_point(&current, winner);
            flags = flags.merge(next.flags);
            current = next.state;
        }

        Transition::with_flags(current, flags)
    }
}
