//! The authentication gateway: one handshake attempt per user action.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, info, warn};

use crate::api::{AuthError, LoginClient};
use crate::models::{AuthResponse, Credentials};

use super::store::{TokenStore, CSRF_TOKEN_KEY};

/// Completion callback, invoked with the full parsed response after the
/// token has been persisted. The hosting application decides what "logged
/// in" means from here; the default just records it.
pub type LoginCallback = Box<dyn Fn(&AuthResponse) + Send + Sync>;

/// External single-sign-on system: a single zero-argument entry point.
/// Everything past it (challenge, redirect, token issuance) happens
/// out-of-band and is not observable from this component.
pub trait SsoProvider: Send + Sync {
    fn login(&self);
}

/// SSO provider that hands the user off to the portal in the system
/// browser. One-way: a failure to open the browser is logged, never
/// surfaced, since no part of the handshake waits on this path.
pub struct BrowserSso {
    portal_url: String,
}

impl BrowserSso {
    pub fn new(portal_url: impl Into<String>) -> Self {
        Self {
            portal_url: portal_url.into(),
        }
    }
}

impl SsoProvider for BrowserSso {
    fn login(&self) {
        if let Err(e) = webbrowser::open(&self.portal_url) {
            warn!(error = %e, url = %self.portal_url, "failed to open SSO portal");
        }
    }
}

/// Mediates exactly one authentication attempt per user action and resolves
/// it into either a persisted session or a reported failure.
pub struct AuthGateway {
    client: LoginClient,
    store: Box<dyn TokenStore>,
    sso: Option<Box<dyn SsoProvider>>,
    on_login: LoginCallback,
    in_flight: AtomicBool,
}

impl AuthGateway {
    pub fn new(client: LoginClient, store: impl TokenStore + 'static) -> Self {
        Self {
            client,
            store: Box::new(store),
            sso: None,
            on_login: Box::new(|_| info!("login complete")),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Wire the external SSO system's entry point.
    pub fn with_sso(mut self, sso: impl SsoProvider + 'static) -> Self {
        self.sso = Some(Box::new(sso));
        self
    }

    /// Replace the default completion callback.
    pub fn with_on_login(mut self, on_login: impl Fn(&AuthResponse) + Send + Sync + 'static) -> Self {
        self.on_login = Box::new(on_login);
        self
    }

    /// Submit a credential pair to the login endpoint.
    ///
    /// Exactly one attempt may be in flight; an overlapping call fails with
    /// `AttemptInFlight` without touching the network. On success the token
    /// is persisted under `CSRF_TOKEN_KEY` and only then does the completion
    /// callback run. Every failure leaves stored state untouched and the
    /// gateway ready for another attempt.
    pub async fn submit_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, AuthError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AuthError::AttemptInFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let auth = match self.client.submit(credentials).await {
            Ok(auth) => auth,
            Err(e) => {
                warn!(error = %e, "login attempt failed");
                return Err(e);
            }
        };

        if let Err(e) = self.store.set(CSRF_TOKEN_KEY, &auth.csrf_token) {
            error!(error = %e, "failed to persist session token");
            return Err(AuthError::Storage(e));
        }

        info!(username = %credentials.username, "login successful");
        (self.on_login)(&auth);

        Ok(auth)
    }

    /// Hand the user off to the external SSO system and return immediately.
    ///
    /// Fire-and-forget: no storage write and no completion callback happen
    /// here; whatever session the SSO flow produces is its own to deliver.
    pub fn delegate_to_sso(&self) {
        match &self.sso {
            Some(sso) => {
                info!("delegating login to SSO provider");
                sso.login();
            }
            None => warn!("SSO delegation requested but no provider is wired"),
        }
    }
}

/// Releases the in-flight flag on every exit path of an attempt.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
