//! Win-by-two rally scoring.
//!
//! Every rally scores a point for whoever wins it, and the winner serves the
//! next rally. A game goes to the first side to reach the target with a lead
//! of two, unless a hard cap is configured and someone reaches it first.

use crate::core::Side;
use crate::rules::{PointFlags, ScoringEngine, Transition};

use super::state::RallyScoreState;

/// Rally scorer for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RallyEngine {
    /// Points needed to win, subject to the two-point lead.
    pub target_score: u32,
    /// Hard cap: reaching it wins regardless of margin.
    pub max_score: Option<u32>,
    /// Rotate doubles servers on each point.
    pub doubles: bool,
}

impl RallyEngine {
    #[must_use]
    pub const fn new(target_score: u32) -> Self {
        Self {
            target_score,
            max_score: None,
            doubles: false,
        }
    }

    /// Badminton: 21 points, capped at 30.
    #[must_use]
    pub const fn badminton() -> Self {
        Self::new(21).with_max(30)
    }

    /// Table tennis: 11 points, no cap.
    #[must_use]
    pub const fn table_tennis() -> Self {
        Self::new(11)
    }

    /// Squash: 11 points, no cap.
    #[must_use]
    pub const fn squash() -> Self {
        Self::new(11)
    }

    #[must_use]
    pub const fn with_max(mut self, max_score: u32) -> Self {
        self.max_score = Some(max_score);
        self
    }

    #[must_use]
    pub const fn with_doubles(mut self, doubles: bool) -> Self {
        self.doubles = doubles;
        self
    }

    fn is_game_over(&self, state: &RallyScoreState) -> bool {
        let top = state.scores.max();
        if let Some(max) = self.max_score {
            if top >= max {
                return true;
            }
        }
        top >= self.target_score && state.scores.lead(Side::One).abs() >= 2
    }
}

impl ScoringEngine for RallyEngine {
    type State = RallyScoreState;

    fn apply_point(&self, state: &RallyScoreState, winner: Side) -> Transition<RallyScoreState> {
        if self.decided(state).is_some() {
            return Transition::quiet(*state);
        }

        let mut next = *state;
        next.scores[winner] += 1;
        next.serving = winner;

        if self.doubles {
            next.doubles = state.doubles.map(|serve| serve.advanced_to(winner));
        }

        if self.is_game_over(&next) {
            Transition::with_flags(next, PointFlags::game())
        } else {
            Transition::quiet(next)
        }
    }

    fn decided(&self, state: &RallyScoreState) -> Option<Side> {
        if self.is_game_over(state) {
            state.scores.leader()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serve::{DoublesServe, PlayerSlot, ServeRotation};

    #[test]
    fn test_point_increments_and_winner_serves() {
        let engine = RallyEngine::new(11);
        let state = RallyScoreState::new(Side::One);

        let next = engine.apply_point(&state, Side::Two);

        assert_eq!(next.state.scores.pair(), (0, 1));
        assert_eq!(next.state.serving, Side::Two);
        assert!(next.flags.is_quiet());
        assert_eq!(state.scores.pair(), (0, 0));
    }

    #[test]
    fn test_target_needs_two_point_lead() {
        let engine = RallyEngine::new(11);

        let at_ten_all = RallyScoreState::at(10, 10, Side::One);
        let next = engine.apply_point(&at_ten_all, Side::One);
        assert_eq!(next.state.scores.pair(), (11, 10));
        assert!(!next.flags.game_won);

        let next = engine.apply_point(&next.state, Side::One);
        assert!(next.flags.game_won);
        assert_eq!(engine.decided(&next.state), Some(Side::One));
    }

    #[test]
    fn test_straight_win_at_target() {
        let engine = RallyEngine::new(21);
        let state = RallyScoreState::at(20, 5, Side::One);

        let next = engine.apply_point(&state, Side::One);
        assert!(next.flags.game_won);
        assert_eq!(engine.decided(&next.state), Some(Side::One));
    }

    #[test]
    fn test_max_score_caps_game() {
        let engine = RallyEngine::badminton();
        let state = RallyScoreState::at(29, 28, Side::One);

        let next = engine.apply_point(&state, Side::Two);
        assert_eq!(next.state.scores.pair(), (29, 29));
        assert!(!next.flags.game_won);

        let next = engine.apply_point(&next.state, Side::Two);
        assert_eq!(next.state.scores.pair(), (29, 30));
        assert!(next.flags.game_won);
        assert_eq!(engine.decided(&next.state), Some(Side::Two));
    }

    #[test]
    fn test_decided_state_is_unchanged() {
        let engine = RallyEngine::new(11);
        let state = RallyScoreState::at(11, 3, Side::One);

        let next = engine.apply_point(&state, Side::Two);
        assert_eq!(next.state, state);
        assert!(next.flags.is_quiet());
    }

    #[test]
    fn test_doubles_custom_rotation_realigns_to_winner() {
        let engine = RallyEngine::new(21).with_doubles(true);
        let rotation = ServeRotation::custom(PlayerSlot::P1, PlayerSlot::P4).unwrap();
        let state = RallyScoreState::doubles(DoublesServe::new(rotation));

        // Receivers win: one step to player 4.
        let next = engine.apply_point(&state, Side::Two);
        assert_eq!(next.state.doubles.unwrap().current, PlayerSlot::P4);

        // Same side wins again: 4 -> 3 is the wrong side, step again to 2.
        let next = engine.apply_point(&next.state, Side::Two);
        assert_eq!(next.state.doubles.unwrap().current, PlayerSlot::P2);
        assert_eq!(next.state.serving, Side::Two);
    }

    #[test]
    fn test_doubles_standard_rotation() {
        let engine = RallyEngine::new(21).with_doubles(true);
        let state = RallyScoreState::doubles(DoublesServe::new(ServeRotation::Standard));

        let next = engine.apply_point(&state, Side::One);
        // 1 -> 2 is side two, step again to 3.
        assert_eq!(next.state.doubles.unwrap().current, PlayerSlot::P3);
    }

    #[test]
    fn test_singles_engine_ignores_doubles_fields() {
        let engine = RallyEngine::new(21);
        let state = RallyScoreState::doubles(DoublesServe::new(ServeRotation::Standard));

        let next = engine.apply_point(&state, Side::Two);
        assert_eq!(next.state.doubles.unwrap().current, PlayerSlot::P1);
    }
}
