//! Response envelope mapping.
//!
//! The backend wraps every body as `{code, message, data?, error?}`.
//! [`map_response`] is the single boundary where a raw HTTP result becomes
//! either an [`Envelope`] or an [`ApiError`]; callers then strip the
//! envelope with [`Envelope::into_payload`] or [`Envelope::ack`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::Ack;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default = "none")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

// `#[serde(default)]` on `Option<T>` would add a `T: Default` bound.
fn none<T>() -> Option<T> {
    None
}

impl<T> Envelope<T> {
    /// Strip the envelope, yielding `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingPayload`] if the envelope has no `data`.
    pub fn into_payload(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingPayload)
    }

    /// Strip the envelope down to its status code and message.
    pub fn ack(self) -> Ack {
        Ack { code: self.code, message: self.message }
    }
}

/// Map an HTTP status and body to an envelope.
///
/// Non-2xx statuses are rejected with the body kept verbatim; no attempt is
/// made to interpret the backend's error envelope.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses and [`ApiError::Decode`]
/// when a success body is not a valid envelope.
pub fn map_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, body: body.to_owned() });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;
