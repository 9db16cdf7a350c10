//! Networking modules for the admin backend's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `envelope` strips the backend's response
//! wrapper, and `types` defines the wire schema.

pub mod api;
pub mod envelope;
pub mod types;

#[cfg(test)]
#[path = "mock_backend_test.rs"]
pub(crate) mod test_helpers;
