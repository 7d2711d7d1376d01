//! Pickleball games and match.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{MatchFormat, Settings, Side, SideMap};
use crate::rally::GameScore;
use crate::rules::{PointFlags, ScoringEngine, Transition};

use super::engine::PickleballEngine;
use super::state::PickleballState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickleballMatch {
    pub game: PickleballState,
    pub games_won: SideMap<u32>,
    pub completed: Vector<GameScore>,
    pub winner: Option<Side>,
}

impl PickleballMatch {
    #[must_use]
    pub fn new(game: PickleballState) -> Self {
        Self {
            game,
            games_won: SideMap::with_value(0),
            completed: Vector::new(),
            winner: None,
        }
    }

    #[must_use]
    pub fn game_number(&self) -> usize {
        self.completed.len() + usize::from(self.winner.is_none())
    }

    #[must_use]
    pub fn total_points(&self) -> SideMap<u32> {
        let mut totals = if self.winner.is_none() {
            self.game.scores
        } else {
            SideMap::with_value(0)
        };
        for game in &self.completed {
            for side in Side::ALL {
                totals[side] += game.scores[side];
            }
        }
        totals
    }

    #[must_use]
    pub fn result_string(&self) -> String {
        self.completed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Best-of-three pickleball match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickleballMatchEngine {
    pub game: PickleballEngine,
    pub games_needed: u32,
}

impl PickleballMatchEngine {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            game: PickleballEngine::from_settings(settings),
            games_needed: MatchFormat::BestOf3.sets_needed(),
        }
    }
}

impl ScoringEngine for PickleballMatchEngine {
    type State = PickleballMatch;

    fn apply_point(&self, state: &PickleballMatch, winner: Side) -> Transition<PickleballMatch> {
        if state.winner.is_some() {
            return Transition::quiet(state.clone());
        }

        let point = self.game.apply_point(&state.game, winner);
        let mut next = state.clone();
        next.game = point.state;

        if point.flags.side_out {
            info!(serving = %next.game.serving, call = %next.game.call(), "side out");
        }
        if !point.flags.game_won {
            return Transition::with_flags(next, point.flags);
        }

        next.games_won[winner] += 1;
        next.completed.push_back(GameScore {
            scores: next.game.scores,
            winner,
        });
        info!(%winner, score = ?next.game.scores.pair(), "pickleball game won");

        if next.games_won[winner] >= self.games_needed {
            next.winner = Some(winner);
            info!(%winner, games = ?next.games_won.pair(), "pickleball match won");
            return Transition::with_flags(
                next,
                PointFlags {
                    match_won: true,
                    ..PointFlags::game()
                },
            );
        }

        // The side that lost the game serves first in the next one.
        next.game = PickleballState::new(winner.opponent());
        Transition::with_flags(next, PointFlags::game())
    }

    fn decided(&self, state: &PickleballMatch) -> Option<Side> {
        state.winner
    }
}
