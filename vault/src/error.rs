use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid scan pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Note already exists: {0}")]
    NoteExists(String),
}
