use thiserror::Error;

use crate::auth::store::StoreError;

/// Notice shown when the server turns the attempt down or the request never
/// completes. Identical for both kinds so the surface does not reveal which
/// factor failed.
const INVALID_CREDENTIALS_NOTICE: &str = "Invalid username or password.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication rejected (status {0})")]
    Rejected(u16),

    #[error("Invalid login response: {0}")]
    MalformedResponse(String),

    #[error("Failed to persist session token: {0}")]
    Storage(#[from] StoreError),

    #[error("A login attempt is already in progress")]
    AttemptInFlight,
}

impl AuthError {
    /// User-facing text for this failure.
    ///
    /// `Network` and `Rejected` share one generic notice; callers that need
    /// the cause match on the variant instead.
    pub fn user_notice(&self) -> &'static str {
        match self {
            AuthError::Network(_) | AuthError::Rejected(_) => INVALID_CREDENTIALS_NOTICE,
            AuthError::MalformedResponse(_) => "Login failed: unexpected server response.",
            AuthError::Storage(_) => "Login failed: could not save your session.",
            AuthError::AttemptInFlight => "A login attempt is already in progress.",
        }
    }
}
