//! # fitsync core
//!
//! Shared types for the fitsync workspace: the remote activity record, the
//! sport taxonomy's category enum, and the activity identifier newtype.
//! Everything here is plain data; behavior lives in the crates that consume
//! these types (`taxonomy`, `vault`, `connect`, `engine`).

pub mod types;

pub use types::{Activity, ActivityId, ExerciseSet, Sport};
