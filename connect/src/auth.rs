use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConnectError, ConnectResult};

const SESSION_FILE: &str = "session.json";

/// Sessions this close to expiry are treated as already expired, so a run
/// never starts with a token that dies mid-fetch.
const EXPIRY_MARGIN_MINUTES: i64 = 5;

/// An authenticated Connect session, persisted between runs so credentials
/// are only needed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub oauth_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now() + Duration::minutes(EXPIRY_MARGIN_MINUTES)
    }

    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.oauth_token)
    }
}

/// Whole-file persistence of the session under the session directory.
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// Load the saved session, refusing one that is missing, unreadable, or
    /// inside the expiry margin. All three cases surface as
    /// [`ConnectError::InvalidSession`] so the caller can fall back to a
    /// fresh login.
    pub fn resume(&self) -> ConnectResult<Session> {
        let path = self.session_path();
        let raw = std::fs::read_to_string(&path).map_err(|_| {
            ConnectError::InvalidSession(format!("no saved session at {}", path.display()))
        })?;
        let session: Session = serde_json::from_str(&raw).map_err(|err| {
            ConnectError::InvalidSession(format!("unreadable session file: {err}"))
        })?;
        if session.is_expired() {
            return Err(ConnectError::InvalidSession("session expired".to_string()));
        }

        debug!(path = %path.display(), "resumed saved session");
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> ConnectResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.session_path();
        std::fs::write(&path, serde_json::to_string_pretty(session)?)?;

        info!(path = %path.display(), "session saved");
        Ok(())
    }
}

/// Exchange credentials for an OAuth session at the Connect token endpoint.
///
/// Only the exchange lives here. Prompting is the caller's concern and the
/// password is never persisted; the returned [`Session`] is what gets saved.
pub async fn login(email: &str, password: &str, base_url: &str) -> ConnectResult<Session> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(ConnectError::Http)?;

    let response = client
        .post(format!("{base_url}/oauth-service/token"))
        .form(&[
            ("grant_type", "password"),
            ("username", email),
            ("password", password),
        ])
        .send()
        .await?;

    match response.status() {
        StatusCode::OK => {
            let token = response.json::<TokenResponse>().await?;
            Ok(Session {
                oauth_token: token.access_token,
                token_type: token.token_type,
                expires_at: Utc::now() + Duration::seconds(token.expires_in),
            })
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
            ConnectError::AuthenticationError("Connect rejected the credentials".to_string()),
        ),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(ConnectError::ApiError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> i64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session_expiring_in(minutes: i64) -> Session {
        Session {
            oauth_token: "tok".to_string(),
            token_type: "Bearer".to_string(),
            expires_at: Utc::now() + Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_save_and_resume_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let session = session_expiring_in(60);
        store.save(&session).unwrap();

        let resumed = store.resume().unwrap();
        assert_eq!(resumed.oauth_token, "tok");
        assert_eq!(resumed.authorization_header(), "Bearer tok");
    }

    #[test]
    fn test_save_creates_session_dir() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("sessions"));

        store.save(&session_expiring_in(60)).unwrap();
        assert!(store.session_path().is_file());
    }

    #[test]
    fn test_resume_missing_file() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let err = store.resume().unwrap_err();
        assert!(matches!(err, ConnectError::InvalidSession(_)));
    }

    #[test]
    fn test_resume_garbage_file() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        std::fs::write(store.session_path(), "not json").unwrap();

        let err = store.resume().unwrap_err();
        assert!(matches!(err, ConnectError::InvalidSession(_)));
    }

    #[test]
    fn test_resume_refuses_expired_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.save(&session_expiring_in(-10)).unwrap();

        let err = store.resume().unwrap_err();
        assert!(matches!(err, ConnectError::InvalidSession(_)));
    }

    #[test]
    fn test_session_inside_expiry_margin_counts_as_expired() {
        assert!(session_expiring_in(2).is_expired());
        assert!(!session_expiring_in(30).is_expired());
    }
}
