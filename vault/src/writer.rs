use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::VaultError;

/// Writes rendered notes into the workouts directory.
///
/// Filename allocation has to consult both the disk and the names handed out
/// earlier in the same run: several notes for one date can be created before
/// a fresh directory listing would see any of them.
pub struct NoteWriter {
    workouts_dir: PathBuf,
    created_this_run: HashSet<String>,
}

impl NoteWriter {
    pub fn new(workouts_dir: impl Into<PathBuf>) -> Self {
        Self {
            workouts_dir: workouts_dir.into(),
            created_this_run: HashSet::new(),
        }
    }

    /// Create the workouts directory tree if it is missing.
    pub fn ensure_dir(&self) -> Result<(), VaultError> {
        std::fs::create_dir_all(&self.workouts_dir)?;
        Ok(())
    }

    /// First candidate name free both on disk and in this run's allocations.
    /// The historical scheme is `<date>-.md`, then `<date>-1.md`, `<date>-2.md`
    /// and so on; existing vault files already follow it.
    fn free_filename(&self, date: &str) -> String {
        let mut count = 0u32;
        loop {
            let name = if count == 0 {
                format!("{date}-.md")
            } else {
                format!("{date}-{count}.md")
            };
            if !self.workouts_dir.join(&name).exists() && !self.created_this_run.contains(&name) {
                return name;
            }
            count += 1;
        }
    }

    /// Write one rendered note under a freshly allocated filename, which is
    /// returned. Never overwrites: a file racing into place between
    /// allocation and write is an error, not a clobber.
    pub fn write(&mut self, date: &str, payload: &str) -> Result<String, VaultError> {
        let name = self.free_filename(date);
        self.created_this_run.insert(name.clone());

        let path = self.workouts_dir.join(&name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::AlreadyExists => VaultError::NoteExists(name.clone()),
                _ => VaultError::Io(err),
            })?;
        file.write_all(payload.as_bytes())?;

        debug!(file = %name, "note written");
        Ok(name)
    }
}
