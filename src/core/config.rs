//! Match settings.
//!
//! Settings are the only configuration the scoring engines read:
//! - `TennisSettings`: match format, standard or no-ad scoring, tiebreak toggle
//! - `TableTennisSettings` / `SquashSettings`: match format
//! - `PickleballSettings`: singles or doubles, target score
//!
//! The remaining fields are device preferences that travel with the durable
//! store slice. The engines never look at them.

use serde::{Deserialize, Serialize};

/// Number of sets (tennis) or games (rally sports) in a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    #[default]
    BestOf3,
    BestOf5,
    BestOf7,
}

impl MatchFormat {
    /// Sets (or games) one side must win to take the match.
    #[must_use]
    pub const fn sets_needed(self) -> u32 {
        match self {
            MatchFormat::BestOf3 => 2,
            MatchFormat::BestOf5 => 3,
            MatchFormat::BestOf7 => 4,
        }
    }

    /// The most sets (or games) the match can last.
    #[must_use]
    pub const fn max_sets(self) -> u32 {
        self.sets_needed() * 2 - 1
    }
}

/// Game scoring at 40-40.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TennisScoring {
    /// Deuce and advantage.
    #[default]
    Standard,
    /// Sudden death at deuce.
    NoAd,
}

/// Color shown for a team on the scoreboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Navy,
    Blue,
    Green,
    Red,
    Purple,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Pickleball singles or doubles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickleballMode {
    #[default]
    Singles,
    Doubles,
}

/// Tennis and padel settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TennisSettings {
    /// Best of 3 or best of 5 sets. `BestOf7` is treated as best of 5.
    pub match_format: MatchFormat,
    pub scoring: TennisScoring,
    /// Play a 7-point tiebreak at 6-6 instead of an advantage set.
    pub tiebreak: bool,
}

impl Default for TennisSettings {
    fn default() -> Self {
        Self {
            match_format: MatchFormat::BestOf3,
            scoring: TennisScoring::Standard,
            tiebreak: true,
        }
    }
}

impl TennisSettings {
    /// Sets needed to win the match.
    #[must_use]
    pub fn sets_needed(&self) -> u32 {
        match self.match_format {
            MatchFormat::BestOf3 => 2,
            MatchFormat::BestOf5 | MatchFormat::BestOf7 => 3,
        }
    }
}

/// Badminton has no configurable rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadmintonSettings {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTennisSettings {
    pub match_format: MatchFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquashSettings {
    /// Best of 3 or best of 5 games. `BestOf7` is treated as best of 5.
    pub match_format: MatchFormat,
}

impl SquashSettings {
    /// Games needed to win the match.
    #[must_use]
    pub fn games_needed(&self) -> u32 {
        match self.match_format {
            MatchFormat::BestOf3 => 2,
            MatchFormat::BestOf5 | MatchFormat::BestOf7 => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickleballSettings {
    pub mode: PickleballMode,
    /// Points to win a game: 11, 15 or 21.
    pub target_score: u32,
}

impl Default for PickleballSettings {
    fn default() -> Self {
        Self {
            mode: PickleballMode::Singles,
            target_score: 11,
        }
    }
}

/// All settings, scoring rules and device preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
    /// Output volume, 0.0 to 1.0.
    pub volume: f32,
    /// Write a history record automatically when a match completes.
    pub auto_save_matches: bool,
    /// Ask before resetting a game.
    pub confirm_resets: bool,

    pub tennis: TennisSettings,
    pub badminton: BadmintonSettings,
    pub table_tennis: TableTennisSettings,
    pub squash: SquashSettings,
    pub pickleball: PickleballSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sound_enabled: true,
            vibration_enabled: true,
            volume: 0.7,
            auto_save_matches: true,
            confirm_resets: true,
            tennis: TennisSettings::default(),
            badminton: BadmintonSettings::default(),
            table_tennis: TableTennisSettings::default(),
            squash: SquashSettings::default(),
            pickleball: PickleballSettings::default(),
        }
    }
}

impl Settings {
    /// Set the tennis match format.
    #[must_use]
    pub fn with_tennis_format(mut self, format: MatchFormat) -> Self {
        self.tennis.match_format = format;
        self
    }

    /// Set standard or no-ad tennis scoring.
    #[must_use]
    pub fn with_tennis_scoring(mut self, scoring: TennisScoring) -> Self {
        self.tennis.scoring = scoring;
        self
    }

    /// Enable or disable the 6-6 tiebreak.
    #[must_use]
    pub fn with_tiebreak(mut self, enabled: bool) -> Self {
        self.tennis.tiebreak = enabled;
        self
    }

    #[must_use]
    pub fn with_table_tennis_format(mut self, format: MatchFormat) -> Self {
        self.table_tennis.match_format = format;
        self
    }

    #[must_use]
    pub fn with_squash_format(mut self, format: MatchFormat) -> Self {
        self.squash.match_format = format;
        self
    }

    #[must_use]
    pub fn with_pickleball_mode(mut self, mode: PickleballMode) -> Self {
        self.pickleball.mode = mode;
        self
    }

    /// Set the pickleball target score.
    ///
    /// Only 11, 15 and 21 are offered; anything else falls back to 11.
    #[must_use]
    pub fn with_pickleball_target(mut self, target: u32) -> Self {
        self.pickleball.target_score = match target {
            11 | 15 | 21 => target,
            _ => 11,
        };
        self
    }
}
