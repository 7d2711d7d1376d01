//! Pickleball: side-out scoring with first and second servers.

pub mod engine;
pub mod match_play;
pub mod state;

pub use engine::PickleballEngine;
pub use match_play::{PickleballMatch, PickleballMatchEngine};
pub use state::{PickleballState, ServerNumber};
