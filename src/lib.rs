//! # xx-admin
//!
//! Client-side core of the admin panel: a typed client for the backend's
//! `/auth` API and a page router gated by a login check.
//!
//! The crate contains the API client and its wire types (`net`), the route
//! table, guard and router (`routes`), the stored session flag (`session`),
//! and the sign-in flow joining them (`auth`).

pub mod auth;
pub mod config;
pub mod error;
pub mod net;
pub mod routes;
pub mod session;

pub use auth::AdminSession;
pub use config::ApiConfig;
pub use error::{ApiError, AuthError, StorageError};
pub use net::api::ApiClient;
pub use routes::{Navigation, Router};
pub use session::{Session, SessionState};
