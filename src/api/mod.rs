//! HTTP exchange with the server-side session endpoint.
//!
//! This module provides the `LoginClient` for submitting credentials to the
//! login endpoint and `AuthError`, the failure taxonomy for an attempt.
//!
//! The endpoint is consumed as a black box: credentials go out as an
//! URL-encoded form POST, a session token comes back in a JSON body.

pub mod client;
pub mod error;

pub use client::LoginClient;
pub use error::AuthError;
