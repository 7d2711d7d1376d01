//! Scoring engine trait for sport implementations.
//!
//! Each sport module implements `ScoringEngine`. The session calls into
//! engines but never interprets sport-specific score shapes itself.

pub mod engine;

pub use engine::{PointFlags, ScoringEngine, Transition};
