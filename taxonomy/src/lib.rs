//! # Activity taxonomy
//!
//! Maps raw Garmin Connect type keys (`"trail_running"`, `"gravel_cycling"`,
//! …) onto the eight broad [`Sport`](fit_core::Sport) categories plus a
//! human-readable exercise name, and derives the sport-specific numeric
//! fields that end up in a note's frontmatter (distance, pace, lifted
//! volume, …).
//!
//! The catalog is an immutable value injected into the sync engine rather
//! than ambient module state, so alternative tables can be swapped in for
//! tests or future providers.

pub mod catalog;
pub mod stats;

pub use catalog::SportCatalog;
pub use stats::{FieldValue, seconds_to_hms, stat_fields, title_case_key};
