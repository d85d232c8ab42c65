//! The incremental sync engine.
//!
//! One run walks a fixed sequence: load the watermark, fetch everything the
//! remote feed has past it, rebuild the vault's dedup indexes, materialize
//! whatever is genuinely new, then persist the advanced watermark. Re-running
//! at any point is safe; duplicates are impossible by construction.

pub mod engine;
pub mod error;
pub mod report;
pub mod state;

pub use engine::{SyncEngine, SyncEngineConfig};
pub use error::{EngineError, EngineResult};
pub use report::SyncReport;
pub use state::{StateStore, SyncState};
