//! Error types for the network layer.
//!
//! DESIGN
//! ======
//! The backend contract collapses network failure, abort-by-timeout, non-2xx
//! status, and missing-token preconditions into message-carrying errors;
//! callers that need behavioral differences branch on message text. That
//! observed shape is preserved here rather than redesigned: both types are
//! single-message wrappers whose text is the contract.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// User-visible text for a terminated session (any 401 response).
pub const SESSION_EXPIRED_MESSAGE: &str = "Sessão expirada. Faça login novamente.";

/// Authentication failure from the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AuthError(pub String);

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure from the catalog API gateway or the WhatsApp service.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ApiError(pub String);

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The terminal session-expiry error raised after 401 interception.
    pub fn session_expired() -> Self {
        Self(SESSION_EXPIRED_MESSAGE.to_owned())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.0)
    }
}

/// Generic fallback message for a non-2xx response without a usable body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn http_status_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Message for a failed binary download.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn download_failed_message(status_text: &str) -> String {
    format!("Download failed: {status_text}")
}
