use std::path::PathBuf;

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] connect::ConnectError),

    #[error("Vault error: {0}")]
    Vault(#[from] vault::VaultError),

    #[error("State file error at {}: {source}", path.display())]
    State {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
