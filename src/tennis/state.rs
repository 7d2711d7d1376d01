//! Tennis match score state: completed sets, the set in progress, serve.
//!
//! A set is always playing exactly one of a regular game or a tiebreak;
//! `SetPlay` makes "both at once" unrepresentable.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::serve::{DoublesServe, PlayerSlot};

use super::game::TennisGameState;

/// A completed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetScore {
    /// Games won, including the tiebreak game (a tiebreak set reads 7-6).
    pub games: SideMap<u32>,
    /// Tiebreak points, when the set was decided by one.
    pub tiebreak: Option<SideMap<u32>>,
}

impl SetScore {
    /// Winner of the set, by games and then by tiebreak points.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.games
            .leader()
            .or_else(|| self.tiebreak.and_then(|points| points.leader()))
    }
}

impl std::fmt::Display for SetScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (one, two) = self.games.pair();
        write!(f, "{one}-{two}")?;
        if let Some(points) = self.tiebreak {
            let (a, b) = points.pair();
            write!(f, " ({a}-{b})")?;
        }
        Ok(())
    }
}

/// Tiebreak in progress at 6-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tiebreak {
    pub points: SideMap<u32>,
    /// Side serving the next tiebreak point.
    pub serving: Side,
    /// Side that served the first tiebreak point.
    pub opener: Side,
    /// Doubles player who served the first tiebreak point.
    pub opener_slot: Option<PlayerSlot>,
}

impl Tiebreak {
    #[must_use]
    pub fn new(opener: Side, opener_slot: Option<PlayerSlot>) -> Self {
        Self {
            points: SideMap::with_value(0),
            serving: opener,
            opener,
            opener_slot,
        }
    }

    /// Points played so far.
    #[must_use]
    pub fn points_played(&self) -> u32 {
        self.points.total()
    }

    /// A side has 7 or more points and leads by 2.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.points.max() >= 7 && self.points.lead(Side::One).abs() >= 2
    }
}

/// What the set in progress is currently playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetPlay {
    Game(TennisGameState),
    Tiebreak(Tiebreak),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetInProgress {
    pub games: SideMap<u32>,
    pub play: SetPlay,
}

impl SetInProgress {
    /// A 0-0 set with `serving` serving the first game.
    #[must_use]
    pub fn new(serving: Side) -> Self {
        Self {
            games: SideMap::with_value(0),
            play: SetPlay::Game(TennisGameState::new(serving)),
        }
    }

    /// The regular game in progress, if not in a tiebreak.
    #[must_use]
    pub fn current_game(&self) -> Option<&TennisGameState> {
        match &self.play {
            SetPlay::Game(game) => Some(game),
            SetPlay::Tiebreak(_) => None,
        }
    }

    #[must_use]
    pub fn tiebreak(&self) -> Option<&Tiebreak> {
        match &self.play {
            SetPlay::Tiebreak(tiebreak) => Some(tiebreak),
            SetPlay::Game(_) => None,
        }
    }
}

/// Full tennis or padel match score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TennisScoreState {
    /// Completed sets, oldest first.
    pub sets: Vector<SetScore>,
    pub current_set: SetInProgress,
    /// Side serving the next point.
    pub serving: Side,
    /// Present in doubles; `current` is the player serving the next point.
    pub doubles: Option<DoublesServe>,
    pub winner: Option<Side>,
}

impl TennisScoreState {
    /// A new singles match.
    #[must_use]
    pub fn new(serving: Side) -> Self {
        Self {
            sets: Vector::new(),
            current_set: SetInProgress::new(serving),
            serving,
            doubles: None,
            winner: None,
        }
    }

    /// A new doubles match; the first server's side serves first.
    #[must_use]
    pub fn doubles(serve: DoublesServe) -> Self {
        Self {
            doubles: Some(serve),
            ..Self::new(serve.serving_side())
        }
    }

    /// Sets won by each side.
    #[must_use]
    pub fn sets_won(&self) -> SideMap<u32> {
        let mut won = SideMap::with_value(0);
        for winner in self.sets.iter().filter_map(SetScore::winner) {
            won[winner] += 1;
        }
        won
    }

    #[must_use]
    pub fn in_tiebreak(&self) -> bool {
        self.current_set.tiebreak().is_some()
    }

    /// Completed sets, e.g. `"6-4, 7-6 (7-5)"`.
    #[must_use]
    pub fn result_string(&self) -> String {
        self.sets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Games won across completed sets and the set in progress.
    #[must_use]
    pub fn total_games(&self) -> SideMap<u32> {
        let mut totals = if self.winner.is_none() {
            self.current_set.games
        } else {
            SideMap::with_value(0)
        };
        for set in &self.sets {
            for side in Side::ALL {
                totals[side] += set.games[side];
            }
        }
        totals
    }
}
