//! Durable app data: selected sport, settings and match history.
//!
//! The live match is never part of the store. Saves are versioned and can
//! be written as JSON or bincode; the file extension picks the format.

pub mod app_store;
pub mod error;

pub use app_store::{AppStore, StoreFormat};
pub use error::StoreError;

pub const STORE_VERSION: u32 = 1;
