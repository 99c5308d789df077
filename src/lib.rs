//! splashgate - a client-side login handshake.
//!
//! Converts user-supplied credentials (or a hand-off to an external
//! single-sign-on system) into a stored session token: POST the credentials
//! to the server-side session endpoint, parse the token out of the
//! response, persist it for the rest of the application, and report
//! failures without revealing which factor failed.
//!
//! The server side of the exchange (authentication, session storage, token
//! issuance) is consumed as a black-box HTTP endpoint.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{AuthError, LoginClient};
pub use auth::{
    AuthGateway, BrowserSso, FileTokenStore, SsoProvider, StoreError, TokenStore, CSRF_TOKEN_KEY,
};
pub use config::Config;
pub use models::{AuthResponse, Credentials};
