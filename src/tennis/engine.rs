//! Tennis and padel scoring: point, game, set, match.
//!
//! ## Serve
//!
//! Serve passes after every game, tiebreak included. In doubles the serve
//! moves one step along the rotation; in singles it alternates sides.
//!
//! Inside a tiebreak the serve changes every two points played, so each side
//! serves two in a row starting with the opener. The side that received first in the tiebreak serves the
//! first game of the next set.
//!
//! ## Sets
//!
//! A set goes to the first side with at least six games and a two-game
//! lead. At 6-6 a tiebreak is played when enabled; otherwise games continue
//! until someone leads by two.

use tracing::info;

use crate::core::{Settings, Side, TennisSettings};
use crate::rules::{PointFlags, ScoringEngine, Transition};

use super::game::TennisGameState;
use super::state::{SetInProgress, SetPlay, SetScore, Tiebreak, TennisScoreState};

/// Games a side needs before a set can be won.
pub const GAMES_FOR_SET: u32 = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TennisEngine {
    pub settings: TennisSettings,
}

impl TennisEngine {
    #[must_use]
    pub const fn new(settings: TennisSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.tennis)
    }

    #[must_use]
    pub fn sets_needed(&self) -> u32 {
        self.settings.sets_needed()
    }

    fn pass_serve(state: &mut TennisScoreState) {
        match state.doubles {
            Some(serve) => {
                let serve = serve.advanced();
                state.serving = serve.serving_side();
                state.doubles = Some(serve);
            }
            None => state.serving = state.serving.opponent(),
        }
    }

    fn score_tiebreak_point(&self, mut state: TennisScoreState, mut tiebreak: Tiebreak, winner: Side) -> Transition<TennisScoreState> {
        tiebreak.points[winner] += 1;

        if tiebreak.is_decided() {
            state.current_set.games[winner] += 1;
            info!(%winner, points = ?tiebreak.points.pair(), "tiebreak won");

            // Serve goes back to the opener so the receiver opens the next set.
            state.serving = tiebreak.opener;
            if let (Some(serve), Some(slot)) = (state.doubles.as_mut(), tiebreak.opener_slot) {
                serve.current = slot;
            }
            Self::pass_serve(&mut state);
            return self.complete_set(state, winner, Some(tiebreak));
        }

        // Serve changes every two points played.
        if tiebreak.points_played() % 2 == 0 {
            Self::pass_serve(&mut state);
            tiebreak.serving = state.serving;
        }

        state.current_set.play = SetPlay::Tiebreak(tiebreak);
        Transition::quiet(state)
    }

    fn complete_game(&self, mut state: TennisScoreState, winner: Side) -> Transition<TennisScoreState> {
        state.current_set.games[winner] += 1;
        let games = state.current_set.games;
        info!(%winner, games = ?games.pair(), "game won");

        Self::pass_serve(&mut state);

        if games.max() >= GAMES_FOR_SET && games.lead(winner) >= 2 {
            return self.complete_set(state, winner, None);
        }

        if self.settings.tiebreak && games.pair() == (GAMES_FOR_SET, GAMES_FOR_SET) {
            let opener_slot = state.doubles.map(|serve| serve.current);
            state.current_set.play = SetPlay::Tiebreak(Tiebreak::new(state.serving, opener_slot));
            info!(opener = %state.serving, "tiebreak started");
            return Transition::with_flags(
                state,
                PointFlags {
                    tiebreak_started: true,
                    ..PointFlags::game()
                },
            );
        }

        state.current_set.play = SetPlay::Game(TennisGameState::new(state.serving));
        Transition::with_flags(state, PointFlags::game())
    }

    /// Record the set in progress; serve must already be set for the next set.
    fn complete_set(&self, mut state: TennisScoreState, winner: Side, tiebreak: Option<Tiebreak>) -> Transition<TennisScoreState> {
        let set = SetScore {
            games: state.current_set.games,
            tiebreak: tiebreak.map(|t| t.points),
        };
        state.sets.push_back(set);
        state.current_set = SetInProgress::new(state.serving);
        info!(%winner, set = %set, "set won");

        let sets_won = state.sets_won();
        let mut flags = PointFlags {
            set_won: true,
            ..PointFlags::game()
        };

        if sets_won[winner] >= self.sets_needed() {
            state.winner = Some(winner);
            flags.match_won = true;
            info!(%winner, result = %state.result_string(), "match won");
        }

        Transition::with_flags(state, flags)
    }
}

impl ScoringEngine for TennisEngine {
    type State = TennisScoreState;

    fn apply_point(&self, state: &TennisScoreState, winner: Side) -> Transition<TennisScoreState> {
        if state.winner.is_some() {
            return Transition::quiet(state.clone());
        }

        let mut next = state.clone();
        match state.current_set.play {
            SetPlay::Tiebreak(tiebreak) => self.score_tiebreak_point(next, tiebreak, winner),
            SetPlay::Game(game) => {
                let game = game.score_point(winner, self.settings.scoring);
                if game.winner().is_some() {
                    self.complete_game(next, winner)
                } else {
                    next.current_set.play = SetPlay::Game(game);
                    Transition::quiet(next)
                }
            }
        }
    }

    fn decided(&self, state: &TennisScoreState) -> Option<Side> {
        state.winner
    }
}
