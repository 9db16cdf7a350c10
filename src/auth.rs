//! Sign-in/sign-out flow tying the API client to the session flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client never touches storage and the guard never writes it. This
//! is the one place that does: a successful login stores the token and
//! attaches it to later requests, and logout removes it again.

use crate::error::{ApiError, AuthError};
use crate::net::api::ApiClient;
use crate::net::types::{Ack, LoginRequest, LoginResponse, RegisterRequest, User};
use crate::routes::{Router, Transition};
use crate::session::storage::Storage;
use crate::session::{Session, SessionState};

#[derive(Debug)]
pub struct AdminSession<S> {
    api: ApiClient,
    session: Session<S>,
    router: Router,
}

impl<S: Storage> AdminSession<S> {
    /// Join the pieces, attaching any token already in storage.
    pub fn new(mut api: ApiClient, session: Session<S>, router: Router) -> Self {
        match session.token() {
            Ok(token) => api.set_bearer_token(token.filter(|t| !t.is_empty())),
            Err(e) => tracing::warn!(error = %e, "stored token unreadable; starting signed out"),
        }
        Self { api, session, router }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Log in and persist the returned token.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged, or a storage error if the token
    /// could not be saved. Nothing is stored when the call fails.
    pub async fn login(&mut self, req: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let resp = self.api.login(req).await?;
        self.session.persist_token(&resp.token)?;
        self.api.set_bearer_token(Some(resp.token.clone()));
        tracing::info!(username = %resp.user.username, role = %resp.user.role.name, "signed in");
        Ok(resp)
    }

    /// Log out remotely, then clear the local flag regardless of the outcome.
    ///
    /// The bearer token is dropped only once the flag is gone, so the client
    /// keeps its credentials for as long as the guard still sees a session.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged if the remote call failed, otherwise
    /// a storage error if the flag could not be cleared.
    pub async fn logout(&mut self) -> Result<Ack, AuthError> {
        let remote = self.api.logout().await;
        let cleared = self.session.clear();
        if cleared.is_ok() {
            self.api.set_bearer_token(None);
        }
        tracing::info!(remote_ok = remote.is_ok(), cleared = cleared.is_ok(), "signed out");
        let ack = remote?;
        cleared?;
        Ok(ack)
    }

    /// # Errors
    ///
    /// Returns the API error unchanged.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.api.get_profile().await
    }

    /// # Errors
    ///
    /// Returns the API error unchanged.
    pub async fn register(&self, req: &RegisterRequest) -> Result<Ack, ApiError> {
        self.api.register(req).await
    }

    /// Route to `location` using the current session state.
    pub fn navigate(&mut self, location: &str) -> &Transition {
        let state = self.session.state();
        self.router.navigate(location, state)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
