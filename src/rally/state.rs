//! Rally game score state (badminton, table tennis, squash).

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::serve::DoublesServe;

/// Score of one rally-scored game.
///
/// Scores only ever increase within a game; a new game starts from a fresh
/// value rather than by decrementing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RallyScoreState {
    pub scores: SideMap<u32>,
    /// Side serving the next rally.
    pub serving: Side,
    /// Present in doubles; tracks which of the four players serves.
    pub doubles: Option<DoublesServe>,
}

impl RallyScoreState {
    /// A 0-0 singles game with `serving` to serve.
    #[must_use]
    pub fn new(serving: Side) -> Self {
        Self {
            scores: SideMap::with_value(0),
            serving,
            doubles: None,
        }
    }

    /// A 0-0 doubles game; the serving side follows the current server.
    #[must_use]
    pub fn doubles(serve: DoublesServe) -> Self {
        Self {
            scores: SideMap::with_value(0),
            serving: serve.serving_side(),
            doubles: Some(serve),
        }
    }

    /// Build a state at an arbitrary score.
    #[must_use]
    pub fn at(one: u32, two: u32, serving: Side) -> Self {
        Self {
            scores: SideMap::from_pair(one, two),
            ..Self::new(serving)
        }
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    /// True when either side's score equals `points`.
    #[must_use]
    pub fn reached(&self, points: u32) -> bool {
        self.scores.iter().any(|(_, &score)| score == points)
    }

    /// A fresh 0-0 game keeping the doubles rotation, with a new server.
    #[must_use]
    pub fn next_game(&self, serving: Side, doubles: Option<DoublesServe>) -> Self {
        Self {
            scores: SideMap::with_value(0),
            serving,
            doubles,
        }
    }

    /// Zero the score, keeping whoever is serving.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.next_game(self.serving, self.doubles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serve::{PlayerSlot, ServeRotation};

    #[test]
    fn test_new_state() {
        let state = RallyScoreState::new(Side::Two);
        assert_eq!(state.scores.pair(), (0, 0));
        assert_eq!(state.serving, Side::Two);
        assert!(state.doubles.is_none());
    }

    #[test]
    fn test_doubles_serving_follows_server() {
        let rotation = ServeRotation::custom(PlayerSlot::P4, PlayerSlot::P1).unwrap();
        let state = RallyScoreState::doubles(DoublesServe::new(rotation));

        assert_eq!(state.serving, Side::Two);
        assert_eq!(state.doubles.unwrap().current, PlayerSlot::P4);
    }

    #[test]
    fn test_reset_keeps_server() {
        let state = RallyScoreState::at(9, 4, Side::Two).reset();
        assert_eq!(state.scores.pair(), (0, 0));
        assert_eq!(state.serving, Side::Two);
    }

    #[test]
    fn test_reached() {
        let state = RallyScoreState::at(11, 7, Side::One);
        assert!(state.reached(11));
        assert!(!state.reached(10));
    }
}
