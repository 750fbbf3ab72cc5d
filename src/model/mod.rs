//! # Data Model
//!
//! Room entity and its validated change-set types.

pub mod room;

pub use room::{Room, RoomDraft, RoomPatch};
