//! The local side of the sync: scanning the existing workout-note corpus
//! into dedup indexes, rendering new notes, and writing them to
//! collision-free filenames without ever overwriting.

pub mod error;
pub mod index;
pub mod note;
pub mod writer;

pub use error::VaultError;
pub use index::VaultIndex;
pub use note::WorkoutNote;
pub use writer::NoteWriter;
