//! # racket-score
//!
//! Live scoring engine for racket sports: tennis and padel, badminton,
//! table tennis, squash and pickleball.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every engine takes a score state by reference and
//!    returns a new one plus `PointFlags`. Nothing is mutated in place, so
//!    undo is keeping the old value.
//!
//! 2. **Unrepresentable Mistakes**: Sides, doubles players and sport score
//!    shapes are enums. A tennis score cannot be handed to the squash engine
//!    and a set cannot be in a game and a tiebreak at once.
//!
//! 3. **Settings Over Special Cases**: Match format, no-ad, tiebreak and the
//!    pickleball target come from `Settings`; engines hold no other knobs.
//!
//! ## Modules
//!
//! - `core`: Sides, per-side maps, settings, RNG
//! - `rules`: `ScoringEngine` trait and point flags
//! - `serve`: Doubles serve rotation
//! - `rally`: Win-by-two rally scoring and rally-sport matches
//! - `pickleball`: Side-out scoring with first and second servers
//! - `tennis`: Points, games, sets, tiebreaks
//! - `session`: The live match, history and statistics
//! - `store`: Durable settings and history
//! - `sim`: Seeded match simulation

pub mod core;
pub mod pickleball;
pub mod rally;
pub mod rules;
pub mod serve;
pub mod session;
pub mod sim;
pub mod store;
pub mod tennis;

// Re-export commonly used types
pub use crate::core::{
    MatchFormat, PickleballMode, ScoreRng, Settings, Side, SideMap, TeamColor, TennisScoring,
};

pub use crate::rules::{PointFlags, ScoringEngine, Transition};

pub use crate::serve::{next_server, DoublesServe, PlayerSlot, ServeRotation};

pub use crate::rally::{RallyEngine, RallyMatch, RallyMatchEngine, RallyScoreState, ServeCountOverride};

pub use crate::pickleball::{PickleballEngine, PickleballMatch, PickleballMatchEngine, PickleballState, ServerNumber};

pub use crate::tennis::{PointScore, SetScore, TennisEngine, TennisGameState, TennisScoreState, Tiebreak};

pub use crate::session::{
    HistoryStats, MatchHistory, MatchHistoryRecord, MatchSession, MatchSetup, MatchState, Participants,
    SessionError, Sport, SportEngine,
};

pub use crate::store::{AppStore, StoreError};

pub use crate::sim::{MatchSimulator, SimConfig, SimOutcome};
