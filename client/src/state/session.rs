//! Session flag and navigation guard for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided through Leptos context and read by the protected layout on every
//! navigation. The flag has no expiry and is never validated against a
//! server: any previously set flag is trusted.
//!
//! DESIGN
//! ======
//! Storage and credential checking are injected (`KeyValueStore`,
//! `IdentityVerifier`) so the guard runs against an in-memory store in tests
//! and a real verifier can replace `AcceptAnyCredentials` without touching
//! the guard.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
pub const EMAIL_KEY: &str = "userEmail";
pub const REDIRECT_KEY: &str = "redirectAfterLogin";

pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/";

/// Reasons a login attempt is refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Enter both email and password.")]
    MissingCredentials,
    #[error("{0}")]
    Rejected(String),
}

/// Checks a credential pair before the session flag is set.
pub trait IdentityVerifier: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`LoginError`] when the pair is refused.
    fn verify(&self, email: &str, password: &str) -> Result<(), LoginError>;
}

/// Demo verifier: any non-empty email/password pair is accepted.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAnyCredentials;

impl IdentityVerifier for AcceptAnyCredentials {
    fn verify(&self, email: &str, password: &str) -> Result<(), LoginError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }
        Ok(())
    }
}

/// Outcome of checking a navigation against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Unauthenticated; the requested path has been remembered.
    RedirectToLogin,
}

/// Session handle shared through context. Clones share the same store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn IdentityVerifier>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>, verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { store, verifier }
    }

    /// `localStorage`-backed session with the demo verifier.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage), Arc::new(AcceptAnyCredentials))
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get(AUTH_FLAG_KEY).as_deref() == Some("true")
    }

    pub fn email(&self) -> Option<String> {
        self.store.get(EMAIL_KEY).filter(|email| !email.is_empty())
    }

    /// Verify the pair, then set the flag and stored email.
    ///
    /// # Errors
    ///
    /// Returns the verifier's [`LoginError`]; the session is left untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        self.verifier.verify(email, password)?;
        self.store.set(AUTH_FLAG_KEY, "true");
        self.store.set(EMAIL_KEY, email.trim());
        Ok(())
    }

    /// Clear the flag and stored email.
    pub fn logout(&self) {
        self.store.remove(AUTH_FLAG_KEY);
        self.store.remove(EMAIL_KEY);
    }

    /// Remember `path` for after login. The login route itself is never stored.
    pub fn remember_redirect(&self, path: &str) {
        if path.is_empty() || is_login_path(path) {
            return;
        }
        self.store.set(REDIRECT_KEY, path);
    }

    /// Consume the remembered path, defaulting to the landing route.
    pub fn take_redirect_target(&self) -> String {
        let target = self.store.get(REDIRECT_KEY).filter(|path| path.starts_with('/'));
        self.store.remove(REDIRECT_KEY);
        target.unwrap_or_else(|| LANDING_PATH.to_owned())
    }

    /// Check a navigation to `path` (path plus query string).
    pub fn guard(&self, path: &str) -> GuardDecision {
        if self.is_authenticated() {
            return GuardDecision::Allow;
        }
        self.remember_redirect(path);
        GuardDecision::RedirectToLogin
    }
}

fn is_login_path(path: &str) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or_default();
    bare.trim_end_matches('/') == LOGIN_PATH
}

/// Join a pathname and its `?query` suffix into a redirect target.
pub fn redirect_target(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}
