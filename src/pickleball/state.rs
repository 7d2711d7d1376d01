//! Pickleball game score state.
//!
//! Pickleball is called from the server's point of view as
//! `server score - receiver score - server number`. The state stores each
//! side's own points; the server and receiver scores are views over that
//! pair keyed by whoever is serving, so a side-out swaps which tally is
//! called first without touching either one.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// First or second server within the serving side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerNumber {
    #[default]
    First,
    Second,
}

impl ServerNumber {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            ServerNumber::First => 1,
            ServerNumber::Second => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickleballState {
    /// Points each side has scored this game. Only ever raised while serving.
    pub scores: SideMap<u32>,
    pub serving: Side,
    pub server_number: ServerNumber,
    /// No point has been scored yet in the current service turn.
    pub is_first_serve: bool,
}

impl PickleballState {
    /// A 0-0 game with `serving` on first serve.
    #[must_use]
    pub fn new(serving: Side) -> Self {
        Self {
            scores: SideMap::with_value(0),
            serving,
            server_number: ServerNumber::First,
            is_first_serve: true,
        }
    }

    /// Points of the serving side.
    #[must_use]
    pub fn server_score(&self) -> u32 {
        self.scores[self.serving]
    }

    /// Points of the receiving side.
    #[must_use]
    pub fn receiver_score(&self) -> u32 {
        self.scores[self.serving.opponent()]
    }

    /// Pass the serve to the other side, first server, fresh turn.
    #[must_use]
    pub fn sided_out(&self) -> Self {
        Self {
            serving: self.serving.opponent(),
            server_number: ServerNumber::First,
            is_first_serve: true,
            ..*self
        }
    }

    /// The spoken score, e.g. `"4-2-1"`.
    #[must_use]
    pub fn call(&self) -> String {
        format!(
            "{}-{}-{}",
            self.server_score(),
            self.receiver_score(),
            self.server_number.number()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = PickleballState::new(Side::One);
        assert_eq!(state.server_score(), 0);
        assert_eq!(state.receiver_score(), 0);
        assert_eq!(state.server_number, ServerNumber::First);
        assert!(state.is_first_serve);
        assert_eq!(state.call(), "0-0-1");
    }

    #[test]
    fn test_side_out_swaps_views_not_tallies() {
        let mut state = PickleballState::new(Side::One);
        state.scores[Side::One] = 5;
        state.scores[Side::Two] = 3;
        assert_eq!(state.call(), "5-3-1");

        let swapped = state.sided_out();
        assert_eq!(swapped.scores, state.scores);
        assert_eq!(swapped.serving, Side::Two);
        assert_eq!(swapped.call(), "3-5-1");
    }
}
