//! Property tests for the scoring engines.
//!
//! Properties tested:
//! - Rally points add exactly one to the winner
//! - Tennis game scores stay within 0/15/30/40/Ad with at most one advantage
//! - A tiebreak ends exactly when a side has 7+ points and a 2-point lead
//! - Sets won never exceed the format, and the match ends when a side first
//!   reaches the sets needed
//! - Custom doubles rotations are closed 4-cycles that alternate sides
//! - Pickleball only ever scores for the serving side
//! - Undoing every point returns a session to its start

use proptest::prelude::*;

use racket_score::core::{MatchFormat, PickleballMode, Settings, Side, SideMap};
use racket_score::pickleball::{PickleballEngine, PickleballState};
use racket_score::rally::{RallyEngine, RallyScoreState};
use racket_score::rules::ScoringEngine;
use racket_score::serve::{next_server, PlayerSlot};
use racket_score::session::{MatchSession, MatchSetup, Sport};
use racket_score::tennis::{PointScore, SetPlay, TennisEngine, TennisScoreState};

fn side() -> impl Strategy<Value = Side> {
    any::<bool>().prop_map(|one| if one { Side::One } else { Side::Two })
}

fn points(max: usize) -> impl Strategy<Value = Vec<Side>> {
    prop::collection::vec(side(), 0..max)
}

fn slot() -> impl Strategy<Value = PlayerSlot> {
    prop::sample::select(PlayerSlot::ALL.to_vec())
}

/// Play alternating games until the first set reaches 6-6.
fn six_all(engine: &TennisEngine) -> TennisScoreState {
    let games = (0..12).flat_map(|i| {
        let side = if i % 2 == 0 { Side::One } else { Side::Two };
        std::iter::repeat(side).take(4)
    });
    engine.replay(&TennisScoreState::new(Side::One), games).state
}

proptest! {
    /// Property: the winner gains exactly one point, the loser none.
    #[test]
    fn prop_rally_point_is_monotonic(
        one in 0u32..20,
        two in 0u32..20,
        serving in side(),
        winner in side(),
    ) {
        let engine = RallyEngine::badminton();
        let state = RallyScoreState::at(one, two, serving);
        prop_assume!(engine.decided(&state).is_none());

        let next = engine.apply_point(&state, winner).state;

        prop_assert_eq!(next.scores[winner], state.scores[winner] + 1);
        prop_assert_eq!(next.scores[winner.opponent()], state.scores[winner.opponent()]);
        prop_assert_eq!(next.serving, winner);
    }

    /// Property: a game never shows two advantages or advantage without 40.
    #[test]
    fn prop_tennis_game_scores_are_valid(sequence in points(40)) {
        let engine = TennisEngine::default();
        let mut state = TennisScoreState::new(Side::One);

        for winner in sequence {
            let next = engine.apply_point(&state, winner);
            if next.flags.game_won {
                break;
            }
            state = next.state;

            let game = state.current_set.current_game().expect("regular game in progress");
            let (one, two) = game.points.pair();
            prop_assert!(one != PointScore::Game && two != PointScore::Game);
            prop_assert!(!(one == PointScore::Advantage && two == PointScore::Advantage));
            if one == PointScore::Advantage {
                prop_assert_eq!(two, PointScore::Forty);
            }
            if two == PointScore::Advantage {
                prop_assert_eq!(one, PointScore::Forty);
            }
        }
    }

    /// Property: the tiebreak is over iff max >= 7 and the lead is >= 2.
    #[test]
    fn prop_tiebreak_terminates_at_seven_by_two(sequence in points(60)) {
        let engine = TennisEngine::default();
        let mut state = six_all(&engine);
        prop_assert!(state.in_tiebreak());

        for winner in sequence {
            let next = engine.apply_point(&state, winner);
            match next.state.current_set.play {
                SetPlay::Tiebreak(tiebreak) if next.state.sets.is_empty() => {
                    let (a, b) = tiebreak.points.pair();
                    prop_assert!(!(a.max(b) >= 7 && a.abs_diff(b) >= 2));
                    prop_assert!(!next.flags.set_won);
                }
                _ => {
                    prop_assert!(next.flags.set_won);
                    let points = next.state.sets[0].tiebreak.expect("tiebreak recorded");
                    let (a, b) = points.pair();
                    prop_assert!(a.max(b) >= 7 && a.abs_diff(b) >= 2);
                    prop_assert_eq!(next.state.sets[0].games[winner], 7);
                    break;
                }
            }
            state = next.state;
        }
    }

    /// Property: sets won stay within the format and the match ends exactly
    /// when one side first reaches the sets needed.
    #[test]
    fn prop_set_counts_respect_format(
        sequence in points(600),
        best_of_five in any::<bool>(),
    ) {
        let format = if best_of_five { MatchFormat::BestOf5 } else { MatchFormat::BestOf3 };
        let engine = TennisEngine::from_settings(&Settings::default().with_tennis_format(format));
        let needed = engine.sets_needed();
        let mut state = TennisScoreState::new(Side::One);

        for winner in sequence {
            let next = engine.apply_point(&state, winner);
            let won = next.state.sets_won();

            if state.winner.is_none() {
                prop_assert!(won.total() <= needed * 2 - 1);
                prop_assert_eq!(next.flags.match_won, won.max() == needed && state.sets_won().max() < needed);
            } else {
                prop_assert!(next.flags.is_quiet());
            }
            state = next.state;
        }
    }

    /// Property: four steps return to the first server; sides alternate.
    #[test]
    fn prop_rotation_is_closed_cycle(first in slot(), second in slot()) {
        prop_assume!(first.side() != second.side());

        let mut current = first;
        for _ in 0..4 {
            let next = next_server(first, second, current);
            prop_assert_ne!(next.side(), current.side());
            current = next;
        }
        prop_assert_eq!(current, first);
    }

    /// Property: only the serving side's score moves; losing the rally as
    /// server passes the serve without a point.
    #[test]
    fn prop_pickleball_only_server_scores(sequence in points(200), doubles in any::<bool>()) {
        let mode = if doubles { PickleballMode::Doubles } else { PickleballMode::Singles };
        let engine = PickleballEngine::new(11, mode);
        let mut state = PickleballState::new(Side::One);

        for winner in sequence {
            if engine.decided(&state).is_some() {
                break;
            }
            let next = engine.apply_point(&state, winner);
            let receiver = state.serving.opponent();

            prop_assert_eq!(next.state.scores[receiver], state.scores[receiver]);
            if winner == state.serving {
                prop_assert_eq!(next.state.scores[winner], state.scores[winner] + 1);
            } else {
                prop_assert!(next.flags.side_out);
                prop_assert_eq!(next.state.serving, winner);
                prop_assert_eq!(next.state.scores, state.scores);
            }
            state = next.state;
        }
    }

    /// Property: undoing every point restores the opening state.
    #[test]
    fn prop_undo_unwinds_session(sequence in points(120)) {
        let mut session = MatchSession::start(
            MatchSetup::singles(Sport::TableTennis, "A", "B"),
            &Settings::default(),
        ).unwrap();
        let opening = session.state().clone();

        let mut applied = 0;
        for winner in sequence {
            if session.point(winner).is_err() {
                break;
            }
            applied += 1;
        }

        for _ in 0..applied {
            session.undo().unwrap();
        }
        prop_assert_eq!(session.state(), &opening);
        prop_assert_eq!(session.rallies_won(), SideMap::with_value(0));
        prop_assert!(!session.can_undo());
    }
}
