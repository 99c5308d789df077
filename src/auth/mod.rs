//! Authentication handshake: the gateway and the session token store.
//!
//! This module provides:
//! - `AuthGateway`: one login attempt per user action, credential or SSO
//! - `TokenStore` / `FileTokenStore`: durable persistence for the session token
//!
//! The token lives under a single well-known key; a new successful login
//! overwrites any prior token.

pub mod gateway;
pub mod store;

pub use gateway::{AuthGateway, BrowserSso, LoginCallback, SsoProvider};
pub use store::{FileTokenStore, StoreError, TokenStore, CSRF_TOKEN_KEY};
