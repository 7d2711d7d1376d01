//! Fixed serve turns for table tennis.
//!
//! Table tennis does not give the serve to the rally winner. Each player
//! serves a fixed number of times before the serve passes, dropping to one
//! serve each once both sides reach the deuce score. This layer runs after
//! `RallyEngine` and replaces its winner-serves choice.

use serde::{Deserialize, Serialize};

use super::state::RallyScoreState;

/// Serve-count override applied on top of the rally engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeCountOverride {
    /// Serves per turn before deuce.
    pub serves_per_turn: u32,
    /// Both sides at or above this score means one serve per turn.
    pub deuce_at: u32,
}

impl Default for ServeCountOverride {
    fn default() -> Self {
        Self {
            serves_per_turn: 2,
            deuce_at: 10,
        }
    }
}

impl ServeCountOverride {
    /// Serves per turn for the rally about to be played from `state`.
    #[must_use]
    pub fn serves_for(&self, state: &RallyScoreState) -> u32 {
        let deuce = state.scores.iter().all(|(_, &score)| score >= self.deuce_at);
        if deuce {
            1
        } else {
            self.serves_per_turn
        }
    }

    /// Re-decide the server after a rally.
    ///
    /// `before` is the state the rally was served from, `after` the rally
    /// engine's result and `served` the serves already made in this turn.
    /// Returns the corrected state and the updated serve count.
    #[must_use]
    pub fn apply(
        &self,
        before: &RallyScoreState,
        after: RallyScoreState,
        served: u32,
    ) -> (RallyScoreState, u32) {
        let served = served + 1;
        let turn_over = served >= self.serves_for(before);

        let mut next = after;
        if turn_over {
            next.serving = before.serving.opponent();
            next.doubles = before.doubles.map(|serve| serve.advanced());
        } else {
            next.serving = before.serving;
            next.doubles = before.doubles;
        }

        (next, if turn_over { 0 } else { served })
    }
}
