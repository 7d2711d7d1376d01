//! Tennis and padel: points, games, sets with tiebreaks, match.

pub mod engine;
pub mod game;
pub mod state;

pub use engine::{TennisEngine, GAMES_FOR_SET};
pub use game::{PointScore, TennisGameState};
pub use state::{SetInProgress, SetPlay, SetScore, Tiebreak, TennisScoreState};
