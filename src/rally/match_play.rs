//! Game and match progression for rally sports.
//!
//! `RallyEngine` only knows about a single game. `RallyMatchEngine` wraps it
//! with the per-sport rules the scoreboard needs: games to win, the table
//! tennis serve-count layer, and who serves the next game.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{MatchFormat, Settings, Side, SideMap};
use crate::rules::{PointFlags, ScoringEngine, Transition};
use crate::serve::{DoublesServe, PlayerSlot};

use super::engine::RallyEngine;
use super::serve_count::ServeCountOverride;
use super::state::RallyScoreState;

/// Final score of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameScore {
    pub scores: SideMap<u32>,
    pub winner: Side,
}

impl std::fmt::Display for GameScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (one, two) = self.scores.pair();
        write!(f, "{one}-{two}")
    }
}

/// Live state of a rally-scored match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RallyMatch {
    /// The game in progress (the final game once the match is decided).
    pub game: RallyScoreState,
    pub games_won: SideMap<u32>,
    /// Completed games, oldest first.
    pub completed: Vector<GameScore>,
    /// Serves made in the current turn (serve-count sports only).
    pub serves_in_turn: u32,
    /// Doubles without a custom rotation: the side that must pick who
    /// serves the next game before play resumes.
    pub awaiting_server: Option<Side>,
    pub winner: Option<Side>,
}

impl RallyMatch {
    #[must_use]
    pub fn new(game: RallyScoreState) -> Self {
        Self {
            game,
            games_won: SideMap::with_value(0),
            completed: Vector::new(),
            serves_in_turn: 0,
            awaiting_server: None,
            winner: None,
        }
    }

    /// 1-based number of the game in progress.
    #[must_use]
    pub fn game_number(&self) -> usize {
        self.completed.len() + usize::from(self.winner.is_none())
    }

    /// Points won across completed games and the game in progress.
    #[must_use]
    pub fn total_points(&self) -> SideMap<u32> {
        let mut totals = SideMap::with_value(0);
        for game in &self.completed {
            for side in Side::ALL {
                totals[side] += game.scores[side];
            }
        }
        if self.winner.is_none() {
            for side in Side::ALL {
                totals[side] += self.game.scores[side];
            }
        }
        totals
    }

    /// Completed game scores, e.g. `"21-18, 19-21, 21-16"`.
    #[must_use]
    pub fn result_string(&self) -> String {
        self.completed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Match-level rally scorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RallyMatchEngine {
    pub game: RallyEngine,
    pub serve_override: Option<ServeCountOverride>,
    pub games_needed: u32,
    /// Standard doubles rotation only: the side that lost a game picks who
    /// serves the next one. Otherwise the game winner serves.
    pub choose_next_server: bool,
}

impl RallyMatchEngine {
    #[must_use]
    pub fn new(game: RallyEngine, games_needed: u32) -> Self {
        Self {
            game,
            serve_override: None,
            games_needed,
            choose_next_server: false,
        }
    }

    /// Badminton: best of three games, losers pick the next doubles server.
    #[must_use]
    pub fn badminton(doubles: bool) -> Self {
        Self {
            choose_next_server: true,
            ..Self::new(RallyEngine::badminton().with_doubles(doubles), MatchFormat::BestOf3.sets_needed())
        }
    }

    /// Table tennis with the configured match format and serve turns.
    #[must_use]
    pub fn table_tennis(settings: &Settings, doubles: bool) -> Self {
        Self {
            serve_override: Some(ServeCountOverride::default()),
            ..Self::new(
                RallyEngine::table_tennis().with_doubles(doubles),
                settings.table_tennis.match_format.sets_needed(),
            )
        }
    }

    /// Squash with the configured match format.
    #[must_use]
    pub fn squash(settings: &Settings, doubles: bool) -> Self {
        Self::new(
            RallyEngine::squash().with_doubles(doubles),
            settings.squash.games_needed(),
        )
    }

    /// Resolve a pending next-game server choice.
    ///
    /// Returns `None` if no choice is pending or `slot` is not on the side
    /// that has to serve.
    #[must_use]
    pub fn select_server(&self, state: &RallyMatch, slot: PlayerSlot) -> Option<RallyMatch> {
        let side = state.awaiting_server?;
        if slot.side() != side {
            return None;
        }

        let mut next = state.clone();
        let doubles = state.game.doubles.map(|serve| DoublesServe::starting_at(serve.rotation, slot));
        next.game = state.game.next_game(side, doubles);
        next.awaiting_server = None;
        Some(next)
    }

    /// Set up the game after `winner` took the one served from `served_from`.
    fn start_next_game(&self, next: &mut RallyMatch, served_from: &RallyScoreState, winner: Side) {
        next.serves_in_turn = 0;

        match served_from.doubles {
            Some(serve) if serve.rotation.is_custom() => {
                let serve = serve.advanced();
                next.game = served_from.next_game(serve.serving_side(), Some(serve));
            }
            Some(serve) if self.choose_next_server => {
                // The side that lost the game chooses its server.
                let chooser = winner.opponent();
                next.game = served_from.next_game(chooser, Some(serve));
                next.awaiting_server = Some(chooser);
            }
            Some(serve) => {
                next.game = served_from.next_game(winner, Some(serve.advanced_to(winner)));
            }
            None => {
                next.game = served_from.next_game(winner, None);
            }
        }
    }
}

impl ScoringEngine for RallyMatchEngine {
    type State = RallyMatch;

    fn apply_point(&self, state: &RallyMatch, winner: Side) -> Transition<RallyMatch> {
        if state.winner.is_some() || state.awaiting_server.is_some() {
            return Transition::quiet(state.clone());
        }

        let rally = self.game.apply_point(&state.game, winner);
        let mut next = state.clone();

        let (game, serves) = match &self.serve_override {
            Some(layer) => layer.apply(&state.game, rally.state, state.serves_in_turn),
            None => (rally.state, 0),
        };
        next.game = game;
        next.serves_in_turn = serves;

        if !rally.flags.game_won {
            return Transition::quiet(next);
        }

        next.games_won[winner] += 1;
        next.completed.push_back(GameScore {
            scores: next.game.scores,
            winner,
        });
        info!(%winner, score = ?next.game.scores.pair(), "rally game won");

        if next.games_won[winner] >= self.games_needed {
            next.winner = Some(winner);
            info!(%winner, games = ?next.games_won.pair(), "rally match won");
            return Transition::with_flags(
                next,
                PointFlags {
                    match_won: true,
                    ..PointFlags::game()
                },
            );
        }

        self.start_next_game(&mut next, &state.game, winner);
        Transition::with_flags(next, PointFlags::game())
    }

    fn decided(&self, state: &RallyMatch) -> Option<Side> {
        state.winner
    }
}
