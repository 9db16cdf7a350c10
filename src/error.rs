//! Error types for the API gateway client and client-side storage.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures are passed through to the caller untouched: transport
//! errors keep the original `reqwest::Error`, non-2xx responses keep the raw
//! status and body. Nothing here retries or reclassifies.

use serde::Deserialize;

// =============================================================================
// API
// =============================================================================

/// Errors produced by [`crate::net::api::ApiClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Connect, timeout, or body transfer failure.
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// A success response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Decode(String),

    /// The response envelope carried no `data` payload.
    #[error("API response missing payload")]
    MissingPayload,

    /// Login reported success but returned an empty token.
    #[error("login response carried an empty token")]
    EmptyToken,
}

#[derive(Deserialize)]
struct RemoteMessage {
    message: String,
}

impl ApiError {
    /// `true` when the request was aborted by the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status of a rejected response, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Backend `message` field from a rejected response body, when present.
    #[must_use]
    pub fn remote_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<RemoteMessage>(body).ok().map(|m| m.message)
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Errors produced by [`crate::session::storage::Storage`] backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A host-provided backend could not be read or written.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A lock guarding in-process storage was poisoned.
    #[error("storage lock poisoned")]
    Poisoned,
}

// =============================================================================
// AUTH FLOW
// =============================================================================

/// Errors from [`crate::auth::AdminSession`], which both calls the API and
/// writes the session flag.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
