//! Core types shared by every scoring engine: sides, settings, RNG.
//!
//! Nothing in here knows about a particular sport.

pub mod config;
pub mod rng;
pub mod side;

pub use config::{
    BadmintonSettings, MatchFormat, PickleballMode, PickleballSettings, Settings, SquashSettings,
    TableTennisSettings, TeamColor, TennisScoring, TennisSettings, Theme,
};
pub use rng::ScoreRng;
pub use side::{Side, SideMap};
