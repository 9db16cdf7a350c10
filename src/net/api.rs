//! REST API client for the admin backend's `/auth` endpoints.
//!
//! Thin `reqwest` wrapper: one fixed base URL, one fixed timeout, one attempt
//! per call. Every response goes through [`map_response`] so success bodies
//! are unwrapped to their payload and failures surface unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`. Transport failures keep the original
//! `reqwest::Error` (including timeouts); non-2xx responses keep the raw
//! status and body.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope::{Envelope, map_response};
use super::types::{Ack, LoginRequest, LoginResponse, RegisterRequest, User};
use crate::config::ApiConfig;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const PROFILE_PATH: &str = "/auth/profile";
pub const REGISTER_PATH: &str = "/auth/register";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("bearer", &self.bearer.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), bearer: None })
    }

    /// Prefix the endpoint paths are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token sent as `Authorization: Bearer <token>` on every request.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    pub fn set_bearer_token(&mut self, token: Option<String>) {
        self.bearer = token;
    }

    /// `POST /auth/login`.
    ///
    /// Persisting the returned token is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error unchanged, or
    /// [`ApiError::EmptyToken`] if the server reports success without a token.
    pub async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp: LoginResponse = Self::dispatch(self.request(Method::POST, LOGIN_PATH).json(req))
            .await?
            .into_payload()?;
        if resp.token.is_empty() {
            return Err(ApiError::EmptyToken);
        }
        Ok(resp)
    }

    /// `POST /auth/logout`.
    ///
    /// Clearing the stored token is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error unchanged.
    pub async fn logout(&self) -> Result<Ack, ApiError> {
        let env: Envelope<Value> = Self::dispatch(self.request(Method::POST, LOGOUT_PATH)).await?;
        Ok(env.ack())
    }

    /// `GET /auth/profile`. Requires a bearer token to be set.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error unchanged, or
    /// [`ApiError::MissingPayload`] if the envelope carries no user.
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        Self::dispatch(self.request(Method::GET, PROFILE_PATH))
            .await?
            .into_payload()
    }

    /// `POST /auth/register`. Input is forwarded without local validation.
    ///
    /// # Errors
    ///
    /// Returns the transport or status error unchanged.
    pub async fn register(&self, req: &RegisterRequest) -> Result<Ack, ApiError> {
        let env: Envelope<Value> = Self::dispatch(self.request(Method::POST, REGISTER_PATH).json(req)).await?;
        Ok(env.ack())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = endpoint(&self.base_url, path);
        tracing::debug!(method = method.as_str(), %url, "api request");
        let builder = self.http.request(method, url);
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn dispatch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<Envelope<T>, ApiError> {
        let response = builder.send().await.inspect_err(|e| {
            tracing::warn!(error = %e, timeout = e.is_timeout(), "api request failed");
        })?;

        let status = response.status().as_u16();
        let url = response.url().path().to_owned();
        let text = response.text().await?;

        map_response(status, &text).inspect_err(|e| {
            tracing::warn!(%url, status, error = %e, "api call rejected");
        })
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
