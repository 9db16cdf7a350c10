//! Session flag for the current client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is the presence of a non-empty `token` entry in client storage.
//! Login writes it, logout removes it, and the route guard only ever sees
//! the derived [`SessionState`].

pub mod storage;

use crate::error::StorageError;
use storage::Storage;

/// Storage key holding the opaque login token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    Present,
    #[default]
    Absent,
}

impl SessionState {
    /// An empty token counts as absent.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => Self::Present,
            _ => Self::Absent,
        }
    }

    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    storage: S,
}

impl<S: Storage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// Current flag state. Unreadable storage counts as signed out.
    pub fn state(&self) -> SessionState {
        match self.token() {
            Ok(token) => SessionState::from_token(token.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, "session storage unreadable; treating as signed out");
                SessionState::Absent
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn persist_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set_item(TOKEN_KEY, token)
    }

    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(TOKEN_KEY)
    }
}
