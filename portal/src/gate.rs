//! Route gate deciding whether a protected page may be entered.
//!
//! SYSTEM CONTEXT
//! ==============
//! The routing layer calls the gate before activating a protected page and
//! performs the redirect itself on deny. Whether a user is signed in is owned
//! by a [`SessionSignal`]; the gate only consumes its answer and never caches
//! it across navigation attempts.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::fmt::Display;

use crate::error::{PortalError, SessionError};

/// Outcome of one gate check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    DenyRedirect(String),
}

impl AuthDecision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect target on deny, `None` on allow.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::DenyRedirect(target) => Some(target),
        }
    }

    /// Convert into a `Result` for callers that prefer `?`.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Unauthenticated`] on deny.
    pub fn into_result(self) -> Result<(), PortalError> {
        match self {
            Self::Allow => Ok(()),
            Self::DenyRedirect(redirect) => Err(PortalError::Unauthenticated { redirect }),
        }
    }
}

/// Source of the "is the user signed in" answer.
pub trait SessionSignal {
    /// # Errors
    ///
    /// Returns [`SessionError`] when the state cannot be determined.
    fn is_authenticated(&self) -> Result<bool, SessionError>;
}

impl<F> SessionSignal for F
where
    F: Fn() -> Result<bool, SessionError>,
{
    fn is_authenticated(&self) -> Result<bool, SessionError> {
        self()
    }
}

/// Allow iff authenticated; otherwise redirect to `fallback_path`.
///
/// `target_path` is only used for diagnostics; the redirect target never
/// depends on it.
#[must_use]
pub fn can_activate(is_authenticated: bool, target_path: &str, fallback_path: &str) -> AuthDecision {
    if is_authenticated {
        tracing::debug!(target_path, "gate allow");
        AuthDecision::Allow
    } else {
        tracing::debug!(target_path, fallback_path, "gate deny");
        AuthDecision::DenyRedirect(fallback_path.to_owned())
    }
}

/// Like [`can_activate`], but for a signal that may have failed.
///
/// Fails closed: an error is treated as unauthenticated.
#[must_use]
pub fn can_activate_with<E: Display>(
    signal: Result<bool, E>,
    target_path: &str,
    fallback_path: &str,
) -> AuthDecision {
    match signal {
        Ok(is_authenticated) => can_activate(is_authenticated, target_path, fallback_path),
        Err(e) => {
            tracing::warn!(error = %e, target_path, "session state unknown, denying");
            AuthDecision::DenyRedirect(fallback_path.to_owned())
        }
    }
}

/// Gate bound to a fixed fallback path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthGate {
    fallback_path: String,
}

impl AuthGate {
    #[must_use]
    pub fn new(fallback_path: impl Into<String>) -> Self {
        Self { fallback_path: fallback_path.into() }
    }

    #[must_use]
    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    /// Query `signal` and decide. Evaluated fresh on every call.
    #[must_use]
    pub fn check<S: SessionSignal + ?Sized>(&self, signal: &S, target_path: &str) -> AuthDecision {
        can_activate_with(signal.is_authenticated(), target_path, &self.fallback_path)
    }
}
