//! Serve rotation for doubles play.

pub mod rotation;

pub use rotation::{next_server, rotation_cycle, DoublesServe, PlayerSlot, ServeRotation};
