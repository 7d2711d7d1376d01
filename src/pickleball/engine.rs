//! Side-out scoring.
//!
//! Only the serving side scores. When the receivers win a rally the serve
//! passes to them and nobody scores. A game goes to the first side to reach
//! the target with a two-point lead.
//!
//! In doubles the serving side also steps through its two servers: once a
//! service turn has scored, the next point moves to the second server, and a
//! point scored by the second server ends the turn.

use crate::core::{PickleballMode, Settings, Side};
use crate::rules::{PointFlags, ScoringEngine, Transition};

use super::state::{PickleballState, ServerNumber};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickleballEngine {
    pub target_score: u32,
    pub mode: PickleballMode,
}

impl PickleballEngine {
    #[must_use]
    pub const fn new(target_score: u32, mode: PickleballMode) -> Self {
        Self { target_score, mode }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.pickleball.target_score, settings.pickleball.mode)
    }

    fn is_game_over(&self, state: &PickleballState) -> bool {
        state.scores.max() >= self.target_score && state.scores.lead(Side::One).abs() >= 2
    }

    /// Advance the server sub-rotation after the serving side scored.
    fn rotate_after_score(&self, mut state: PickleballState) -> (PickleballState, bool) {
        if self.mode == PickleballMode::Singles {
            state.is_first_serve = false;
            return (state, false);
        }

        match state.server_number {
            ServerNumber::First if !state.is_first_serve => {
                state.server_number = ServerNumber::Second;
                (state, false)
            }
            ServerNumber::Second => (state.sided_out(), true),
            ServerNumber::First => {
                state.is_first_serve = false;
                (state, false)
            }
        }
    }
}

impl ScoringEngine for PickleballEngine {
    type State = PickleballState;

    fn apply_point(&self, state: &PickleballState, winner: Side) -> Transition<PickleballState> {
        if self.decided(state).is_some() {
            return Transition::quiet(*state);
        }

        if winner != state.serving {
            return Transition::with_flags(
                state.sided_out(),
                PointFlags {
                    side_out: true,
                    ..PointFlags::default()
                },
            );
        }

        let mut next = *state;
        next.scores[winner] += 1;

        if self.is_game_over(&next) {
            return Transition::with_flags(next, PointFlags::game());
        }

        let (next, side_out) = self.rotate_after_score(next);
        Transition::with_flags(
            next,
            PointFlags {
                side_out,
                ..PointFlags::default()
            },
        )
    }

    fn decided(&self, state: &PickleballState) -> Option<Side> {
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

    #[test]
    fn test_serving_side_scores() {
        let engine = PickleballEngine::new(11, PickleballMode::Singles);
        let state = PickleballState::new(Side::One);

        let next = engine.apply_point(&state, Side::One);

        assert_eq!(next.state.server_score(), 1);
        assert_eq!(next.state.receiver_score(), 0);
        assert_eq!(next.state.serving, Side::One);
        assert!(!next.state.is_first_serve);
        assert!(next.flags.is_quiet());
    }

    #[test]
    fn test_receiver_win_is_side_out() {
        let engine = PickleballEngine::new(11, PickleballMode::Singles);
        let mut state = PickleballState::new(Side::One);
        state.scores[Side::One] = 4;
        state.is_first_serve = false;

        let next = engine.apply_point(&state, Side::Two);

        assert!(next.flags.side_out);
        assert_eq!(next.state.scores, state.scores);
        assert_eq!(next.state.serving, Side::Two);
        assert_eq!(next.state.server_number, ServerNumber::First);
        assert!(next.state.is_first_serve);
        assert_eq!(next.state.call(), "0-4-1");
    }

    #[test]
    fn test_win_by_two() {
        let engine = PickleballEngine::new(11, PickleballMode::Singles);
        let mut state = PickleballState::new(Side::Two);
        state.scores[Side::One] = 10;
        state.scores[Side::Two] = 10;

        let next = engine.apply_point(&state, Side::Two);
        assert!(!next.flags.game_won);
        assert_eq!(next.state.call(), "11-10-1");

        let next = engine.apply_point(&next.state, Side::Two);
        assert!(next.flags.game_won);
        assert_eq!(engine.decided(&next.state), Some(Side::Two));
    }

    #[test]
    fn test_doubles_sub_rotation() {
        let engine = PickleballEngine::new(11, PickleballMode::Doubles);
        let state = PickleballState::new(Side::One);

        // First scoring point of the turn.
        let next = engine.apply_point(&state, Side::One);
        assert_eq!(next.state.server_number, ServerNumber::First);
        assert!(!next.state.is_first_serve);

        // Second point moves to the second server.
        let next = engine.apply_point(&next.state, Side::One);
        assert_eq!(next.state.server_number, ServerNumber::Second);
        assert_eq!(next.state.serving, Side::One);

        // A point by the second server ends the turn.
        let next = engine.apply_point(&next.state, Side::One);
        assert!(next.flags.side_out);
        assert_eq!(next.state.serving, Side::Two);
        assert_eq!(next.state.server_number, ServerNumber::First);
        assert_eq!(next.state.scores.pair(), (3, 0));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings::default()
            .with_pickleball_target(21)
            .with_pickleball_mode(PickleballMode::Doubles);
        let engine = PickleballEngine::from_settings(&settings);

        assert_eq!(engine.target_score, 21);
        assert_eq!(engine.mode, PickleballMode::Doubles);
    }
}
