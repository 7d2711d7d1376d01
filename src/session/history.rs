//! Finished matches and the statistics derived from them.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

use super::sport::Sport;

/// Records kept; older ones drop off.
pub const MAX_HISTORY: usize = 50;

/// Matches whose players count towards `HistoryStats::recent_players`.
pub const RECENT_MATCHES: usize = 10;

/// Immutable summary of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistoryRecord {
    pub id: String,
    pub sport: Sport,
    /// When the match finished.
    pub date: DateTime<Utc>,
    pub duration_secs: u64,
    /// Scoreboard name of each side.
    pub names: SideMap<String>,
    /// e.g. `"6-4, 7-5"` or `"21-18, 19-21, 21-16"`.
    pub result: String,
    pub winner: Side,
    /// Rallies won by each side.
    #[serde(default)]
    pub total_points: Option<SideMap<u32>>,
}

impl MatchHistoryRecord {
    #[must_use]
    pub fn winner_name(&self) -> &str {
        &self.names[self.winner]
    }
}

/// Saved matches, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    records: Vec<MatchHistoryRecord>,
}

impl MatchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the front, dropping the oldest past `MAX_HISTORY`.
    pub fn add(&mut self, record: MatchHistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&MatchHistoryRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchHistoryRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MatchHistoryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_records(&self.records)
    }
}

/// Run of consecutive most-recent wins by one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub side: Side,
    pub length: u32,
}

impl Streak {
    /// Current win streak for `side` (0 if the other side is on a run).
    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        if self.side == side {
            self.length
        } else {
            0
        }
    }

    #[must_use]
    pub fn losses(&self, side: Side) -> u32 {
        self.wins(side.opponent())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_matches: usize,
    pub wins: SideMap<u32>,
    pub sports_played: usize,
    /// Whole minutes, rounded down.
    pub average_duration_mins: u64,
    pub streak: Option<Streak>,
    /// Distinct names from the most recent matches, newest first.
    pub recent_players: Vec<String>,
}

impl HistoryStats {
    #[must_use]
    pub fn from_records(records: &[MatchHistoryRecord]) -> Self {
        let total_matches = records.len();

        let mut wins = SideMap::with_value(0);
        for record in records {
            wins[record.winner] += 1;
        }

        let sports_played = records
            .iter()
            .map(|record| record.sport)
            .collect::<FxHashSet<_>>()
            .len();

        let total_secs: u64 = records.iter().map(|record| record.duration_secs).sum();
        let average_duration_mins = if total_matches == 0 {
            0
        } else {
            total_secs / total_matches as u64 / 60
        };

        let mut by_date: Vec<&MatchHistoryRecord> = records.iter().collect();
        by_date.sort_by(|a, b| b.date.cmp(&a.date));
        let streak = by_date.first().map(|newest| Streak {
            side: newest.winner,
            length: by_date
                .iter()
                .take_while(|record| record.winner == newest.winner)
                .count() as u32,
        });

        let mut seen = FxHashSet::default();
        let recent_players = records
            .iter()
            .take(RECENT_MATCHES)
            .flat_map(|record| Side::ALL.into_iter().map(move |side| record.names[side].clone()))
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self {
            total_matches,
            wins,
            sports_played,
            average_duration_mins,
            streak,
            recent_players,
        }
    }
}
