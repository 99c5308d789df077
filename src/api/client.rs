//! HTTP client for the server-side session endpoint.
//!
//! This module provides the `LoginClient` struct for submitting serialized
//! credentials to the login endpoint and classifying the response.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::models::{AuthResponse, Credentials};

use super::AuthError;

/// HTTP request timeout in seconds.
/// Bounds how long an attempt can sit in flight before it fails instead of
/// leaving the caller waiting on a hung endpoint.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the login endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct LoginClient {
    client: Client,
    login_url: String,
}

impl LoginClient {
    /// Create a client for the given login endpoint with the default timeout.
    pub fn new(login_url: impl Into<String>) -> Result<Self, AuthError> {
        Self::with_timeout(login_url, Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        login_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            login_url: login_url.into(),
        })
    }

    /// POST the serialized credentials and parse the session response.
    ///
    /// The endpoint replies text/html carrying a JSON document, so the body
    /// is read as text and parsed separately. A success status with an
    /// unparsable body, or one missing a usable `csrf_token`, fails the
    /// attempt rather than proceeding with an undefined token.
    pub async fn submit(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let response = self
            .client
            .post(&self.login_url)
            .form(credentials)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "login rejected");
            return Err(AuthError::Rejected(status.as_u16()));
        }

        let body = response.text().await?;
        let auth: AuthResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        if auth.csrf_token.is_empty() {
            return Err(AuthError::MalformedResponse("empty csrf_token".to_string()));
        }

        Ok(auth)
    }
}
