//! Rally scoring: badminton, table tennis and squash.
//!
//! - `RallyEngine`: one game, win by two, optional hard cap
//! - `ServeCountOverride`: table tennis serve turns layered on top
//! - `RallyMatchEngine`: games, match completion, next-game server

pub mod engine;
pub mod match_play;
pub mod serve_count;
pub mod state;

pub use engine::RallyEngine;
pub use match_play::{GameScore, RallyMatch, RallyMatchEngine};
pub use serve_count::ServeCountOverride;
pub use state::RallyScoreState;
