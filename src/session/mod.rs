//! Match session and history.
//!
//! ## Key Types
//!
//! - `MatchSession`: the one live match; routes points to the sport's engine
//! - `MatchState`: tagged union of the five score shapes
//! - `MatchHistory`: finished matches, newest first, with `HistoryStats`

pub mod error;
pub mod history;
pub mod match_session;
pub mod participants;
pub mod sport;
pub mod state;

pub use error::SessionError;
pub use history::{HistoryStats, MatchHistory, MatchHistoryRecord, Streak, MAX_HISTORY};
pub use match_session::{MatchSession, MatchSetup};
pub use participants::Participants;
pub use sport::Sport;
pub use state::{MatchState, SportEngine};
