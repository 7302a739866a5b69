//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route outlet tracks this signal so a login or logout re-runs the
//! gate. The gate itself reads the session signal directly; this state only
//! carries what the pages display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session;

/// Display-level view of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user_name: Option<String>,
}

impl AuthState {
    /// Rebuild from `sessionStorage`. Empty outside the browser.
    pub fn restore() -> Self {
        Self { user_name: session::user_name() }
    }
}
