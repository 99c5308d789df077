//! Data types exchanged during the login handshake.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credential pair read from the login prompt at submission time.
///
/// Ephemeral: serialized once as the URL-encoded body of the login request
/// and never written to disk.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs and error chains.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parsed body of a successful login response.
///
/// The server guarantees `csrf_token`; any other fields are carried through
/// to the completion callback unexamined.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub csrf_token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
