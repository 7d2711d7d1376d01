//! Sport-specific live score, as one tagged value.
//!
//! `MatchState` holds one of the five score shapes; `SportEngine` is the
//! matching scorer. The session builds both from the same `Sport`, so a
//! tennis state is only ever scored by the tennis engine.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{PickleballMode, Settings, Side, SideMap};
use crate::pickleball::{PickleballEngine, PickleballMatch, PickleballMatchEngine, PickleballState};
use crate::rally::{RallyMatch, RallyMatchEngine, RallyScoreState};
use crate::rules::{ScoringEngine, Transition};
use crate::serve::{DoublesServe, PlayerSlot};
use crate::tennis::{SetPlay, TennisEngine, TennisGameState, TennisScoreState, Tiebreak};

use super::sport::Sport;

/// Badminton score at which players are reminded to change ends.
pub const BADMINTON_SIDE_SWITCH: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Tennis and padel.
    Tennis(TennisScoreState),
    Badminton(RallyMatch),
    TableTennis(RallyMatch),
    Squash(RallyMatch),
    Pickleball(PickleballMatch),
}

impl MatchState {
    /// A 0-0 state for `sport`. Doubles matches pass their serve rotation.
    #[must_use]
    pub fn initial(sport: Sport, doubles: Option<DoublesServe>) -> Self {
        let rally = || {
            RallyMatch::new(match doubles {
                Some(serve) => RallyScoreState::doubles(serve),
                None => RallyScoreState::new(Side::One),
            })
        };
        let opening_side = doubles.map_or(Side::One, |serve| serve.serving_side());

        match sport {
            Sport::Tennis | Sport::Padel => MatchState::Tennis(match doubles {
                Some(serve) => TennisScoreState::doubles(serve),
                None => TennisScoreState::new(Side::One),
            }),
            Sport::Badminton => MatchState::Badminton(rally()),
            Sport::TableTennis => MatchState::TableTennis(rally()),
            Sport::Squash => MatchState::Squash(rally()),
            Sport::Pickleball => MatchState::Pickleball(PickleballMatch::new(PickleballState::new(opening_side))),
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchState::Tennis(state) => state.winner,
            MatchState::Badminton(state) | MatchState::TableTennis(state) | MatchState::Squash(state) => state.winner,
            MatchState::Pickleball(state) => state.winner,
        }
    }

    /// Side serving the next point.
    #[must_use]
    pub fn serving(&self) -> Side {
        match self {
            MatchState::Tennis(state) => state.serving,
            MatchState::Badminton(state) | MatchState::TableTennis(state) | MatchState::Squash(state) => state.game.serving,
            MatchState::Pickleball(state) => state.game.serving,
        }
    }

    /// Doubles player serving the next point, where the sport tracks one.
    #[must_use]
    pub fn current_server(&self) -> Option<PlayerSlot> {
        match self {
            MatchState::Tennis(state) => state.doubles.map(|serve| serve.current),
            MatchState::Badminton(state) | MatchState::TableTennis(state) | MatchState::Squash(state) => {
                state.game.doubles.map(|serve| serve.current)
            }
            MatchState::Pickleball(_) => None,
        }
    }

    /// Rally sports in doubles without a custom rotation: the side that must
    /// pick the next game's server.
    #[must_use]
    pub fn awaiting_server(&self) -> Option<Side> {
        match self {
            MatchState::Badminton(state) | MatchState::TableTennis(state) | MatchState::Squash(state) => state.awaiting_server,
            MatchState::Tennis(_) | MatchState::Pickleball(_) => None,
        }
    }

    /// Completed sets or games, e.g. `"6-4, 7-5"` or `"21-18, 19-21"`.
    #[must_use]
    pub fn result_string(&self) -> String {
        match self {
            MatchState::Tennis(state) => state.result_string(),
            MatchState::Badminton(state) | MatchState::TableTennis(state) | MatchState::Squash(state) => state.result_string(),
            MatchState::Pickleball(state) => state.result_string(),
        }
    }

    /// Point score of the game in progress, for numerically scored games.
    #[must_use]
    pub fn game_scores(&self) -> Option<SideMap<u32>> {
        match self {
            MatchState::Tennis(state) => state.current_set.tiebreak().map(|t| t.points),
            MatchState::Badminton(state) | MatchState::TableTennis(state) | MatchState::Squash(state) => Some(state.game.scores),
            MatchState::Pickleball(state) => Some(state.game.scores),
        }
    }

    /// Zero the game in progress, keeping the server.
    #[must_use]
    pub fn reset_game(&self) -> Self {
        match self {
            MatchState::Tennis(state) => {
                let mut next = state.clone();
                next.current_set.play = match state.current_set.play {
                    SetPlay::Game(game) => SetPlay::Game(TennisGameState::new(game.serving)),
                    SetPlay::Tiebreak(tiebreak) => {
                        next.serving = tiebreak.opener;
                        if let (Some(serve), Some(slot)) = (next.doubles.as_mut(), tiebreak.opener_slot) {
                            serve.current = slot;
                        }
                        SetPlay::Tiebreak(Tiebreak::new(tiebreak.opener, tiebreak.opener_slot))
                    }
                };
                MatchState::Tennis(next)
            }
            MatchState::Badminton(state) => MatchState::Badminton(reset_rally(state)),
            MatchState::TableTennis(state) => MatchState::TableTennis(reset_rally(state)),
            MatchState::Squash(state) => MatchState::Squash(reset_rally(state)),
            MatchState::Pickleball(state) => {
                let mut next = state.clone();
                next.game = PickleballState::new(state.game.serving);
                MatchState::Pickleball(next)
            }
        }
    }
}

fn reset_rally(state: &RallyMatch) -> RallyMatch {
    RallyMatch {
        game: state.game.reset(),
        serves_in_turn: 0,
        ..state.clone()
    }
}

/// Scorer for the active sport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SportEngine {
    Tennis(TennisEngine),
    Rally(RallyMatchEngine),
    Pickleball(PickleballMatchEngine),
}

impl SportEngine {
    /// Build the scorer for `sport` from settings.
    #[must_use]
    pub fn for_sport(sport: Sport, settings: &Settings, doubles: bool) -> Self {
        match sport {
            Sport::Tennis | Sport::Padel => SportEngine::Tennis(TennisEngine::from_settings(settings)),
            Sport::Badminton => SportEngine::Rally(RallyMatchEngine::badminton(doubles)),
            Sport::TableTennis => SportEngine::Rally(RallyMatchEngine::table_tennis(settings, doubles)),
            Sport::Squash => SportEngine::Rally(RallyMatchEngine::squash(settings, doubles)),
            Sport::Pickleball => {
                let mut engine = PickleballMatchEngine::from_settings(settings);
                if doubles {
                    engine.game = PickleballEngine::new(engine.game.target_score, PickleballMode::Doubles);
                }
                SportEngine::Pickleball(engine)
            }
        }
    }

    /// Resolve a pending next-game server choice for rally sports.
    ///
    /// `None` when no choice is pending or `slot` is on the wrong side.
    #[must_use]
    pub fn select_server(&self, state: &MatchState, slot: PlayerSlot) -> Option<MatchState> {
        let SportEngine::Rally(engine) = self else {
            return None;
        };
        match state {
            MatchState::Badminton(s) => engine.select_server(s, slot).map(MatchState::Badminton),
            MatchState::TableTennis(s) => engine.select_server(s, slot).map(MatchState::TableTennis),
            MatchState::Squash(s) => engine.select_server(s, slot).map(MatchState::Squash),
            MatchState::Tennis(_) | MatchState::Pickleball(_) => None,
        }
    }
}

impl ScoringEngine for SportEngine {
    type State = MatchState;

    fn apply_point(&self, state: &MatchState, winner: Side) -> Transition<MatchState> {
        match (self, state) {
            (SportEngine::Tennis(engine), MatchState::Tennis(s)) => engine.apply_point(s, winner).map(MatchState::Tennis),
            (SportEngine::Rally(engine), MatchState::Badminton(s)) => engine.apply_point(s, winner).map(MatchState::Badminton),
            (SportEngine::Rally(engine), MatchState::TableTennis(s)) => engine.apply_point(s, winner).map(MatchState::TableTennis),
            (SportEngine::Rally(engine), MatchState::Squash(s)) => engine.apply_point(s, winner).map(MatchState::Squash),
            (SportEngine::Pickleball(engine), MatchState::Pickleball(s)) => engine.apply_point(s, winner).map(MatchState::Pickleball),
            _ => {
                warn!(engine = ?self, "score state does not match engine; point ignored");
                Transition::quiet(state.clone())
            }
        }
    }

    fn decided(&self, state: &MatchState) -> Option<Side> {
        state.winner()
    }
}
