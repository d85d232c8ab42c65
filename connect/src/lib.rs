//! Remote-side collaborators for the sync: OAuth session persistence and the
//! paged Garmin Connect activity feed.
//!
//! The engine's precondition is only that an authenticated [`Session`] exists
//! before fetching begins; the interactive credential prompt lives in the CLI.

pub mod auth;
pub mod client;
pub mod error;

pub use auth::{Session, SessionStore, login};
pub use client::{ActivityFeed, ConnectClient};
pub use error::{ConnectError, ConnectResult};
