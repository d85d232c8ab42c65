use thiserror::Error;

pub type ConnectResult<T> = Result<T, ConnectError>;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connect API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("No usable session: {0}")]
    InvalidSession(String),

    #[error("Rate limited: retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConnectError {
    /// Whether a fresh run can reasonably be expected to succeed without
    /// operator action (network hiccups and rate limits, as opposed to bad
    /// credentials or a broken response).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::RateLimited { .. })
    }

    pub fn retry_after(&self) -> Option<u64> {
        if let Self::RateLimited {
            retry_after_seconds,
        } = self
        {
            Some(*retry_after_seconds)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let rate_limited = ConnectError::RateLimited {
            retry_after_seconds: 30,
        };
        assert!(rate_limited.is_retryable());
        assert_eq!(rate_limited.retry_after(), Some(30));

        let auth = ConnectError::AuthenticationError("bad token".to_string());
        assert!(!auth.is_retryable());
        assert_eq!(auth.retry_after(), None);

        let api = ConnectError::ApiError {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!api.is_retryable());
    }
}
