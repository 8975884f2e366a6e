//! Classified errors for API operations.
//!
//! Every failure the client surfaces is one of five kinds: [`Network`],
//! [`Api`], [`Auth`], [`Validation`], or [`Unknown`]. The kind drives two
//! policies: whether the generic backoff retry is allowed to re-attempt the
//! operation ([`ApiError::is_retryable`]) and which message the UI layer
//! shows the user ([`ApiError::user_message`]).
//!
//! [`Network`]: ApiError::Network
//! [`Api`]: ApiError::Api
//! [`Auth`]: ApiError::Auth
//! [`Validation`]: ApiError::Validation
//! [`Unknown`]: ApiError::Unknown

use thiserror::Error;

/// Result alias used throughout the client.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Discriminant for [`ApiError`], useful when callers only care about the
/// class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Api,
    Auth,
    Validation,
    Unknown,
}

/// A classified client error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connectivity failure, request abort, or timeout. Always retryable.
    #[error("network error: {message}")]
    Network { message: String },

    /// Non-2xx HTTP response, carrying the status code and a best-effort
    /// message extracted from the response body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Missing, invalid, or expired credentials.
    #[error("authentication error: {message}")]
    Auth { message: String },

    /// Input rejected before any request was made.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Anything that could not be classified.
    #[error("unexpected error: {message}")]
    Unknown { message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network { message: message.into() }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ApiError::Api { status, message: message.into() }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        ApiError::Auth { message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation { message: message.into() }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        ApiError::Unknown { message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Api { .. } => ErrorKind::Api,
            ApiError::Auth { .. } => ErrorKind::Auth,
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status code, for [`ApiError::Api`] only.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backoff retry policy may re-attempt the operation.
    ///
    /// Network failures are always transient candidates. HTTP errors are
    /// retryable only for request timeout (408), rate limiting (429), and
    /// server errors (5xx). Auth and validation failures never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network { .. } => true,
            ApiError::Api { status, .. } => {
                matches!(*status, 408 | 429) || (500..=599).contains(status)
            }
            _ => false,
        }
    }

    /// Message suitable for direct display to the user, distinct from the
    /// technical `Display` output.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => {
                "Connection problem. Please check your internet and try again.".to_string()
            }
            ApiError::Api { status, .. } if *status >= 500 => {
                "Something went wrong on our end. Please try again.".to_string()
            }
            ApiError::Api { status: 429, .. } => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Auth { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Validation { message } => message.clone(),
            ApiError::Unknown { .. } => {
                "Sorry, something unexpected happened. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::network(format!("request timed out: {err}"))
        } else if err.is_connect() || err.is_request() {
            ApiError::network(err.to_string())
        } else {
            ApiError::unknown(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_and_throttling_are_retryable() {
        assert!(ApiError::api(500, "boom").is_retryable());
        assert!(ApiError::api(503, "unavailable").is_retryable());
        assert!(ApiError::api(408, "slow").is_retryable());
        assert!(ApiError::api(429, "throttled").is_retryable());
        assert!(ApiError::network("reset").is_retryable());
    }

    #[test]
    fn client_errors_fail_fast() {
        assert!(!ApiError::api(400, "bad request").is_retryable());
        assert!(!ApiError::api(404, "not found").is_retryable());
        assert!(!ApiError::auth("no token").is_retryable());
        assert!(!ApiError::validation("name is required").is_retryable());
        assert!(!ApiError::unknown("???").is_retryable());
    }

    #[test]
    fn kind_and_status_accessors() {
        let err = ApiError::api(502, "bad gateway");
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(502));
        assert_eq!(ApiError::network("x").status(), None);
    }

    #[test]
    fn user_message_differs_from_technical_message() {
        let err = ApiError::api(500, "ECONNRESET upstream");
        assert_ne!(err.user_message(), err.to_string());
        assert!(err.user_message().contains("try again"));
    }
}
