//! Route table and navigation resolution.
//!
//! Known pages are login, signup, and the protected page. Any other path is
//! a catch-all that points at the protected page; resolution collapses that
//! redirect and the gate's redirect into a single hop, so an unauthenticated
//! visitor on an unknown URL lands directly on the login page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::config::{RoutePaths, normalize_path};
use crate::gate::{AuthDecision, AuthGate, SessionSignal};

/// A known page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    User,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Login, Self::Signup, Self::User];

    /// Whether entering the page requires a signed-in user.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::User)
    }
}

/// What the router should do for a requested path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(String),
}

/// Maps paths to pages and gates the protected one.
#[derive(Clone, Debug)]
pub struct RouteTable {
    paths: RoutePaths,
    gate: AuthGate,
}

impl RouteTable {
    #[must_use]
    pub fn new(paths: RoutePaths) -> Self {
        let gate = AuthGate::new(paths.login.clone());
        Self { paths, gate }
    }

    #[must_use]
    pub fn path(&self, route: Route) -> &str {
        match route {
            Route::Login => &self.paths.login,
            Route::Signup => &self.paths.signup,
            Route::User => &self.paths.protected,
        }
    }

    /// Find the page for `path`, ignoring query, fragment, and extra slashes.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<Route> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = normalize_path(bare)?;
        Route::ALL.into_iter().find(|r| self.path(*r) == normalized)
    }

    /// Decide what to show for `path`. The session is queried on every call
    /// that reaches the gate.
    #[must_use]
    pub fn resolve<S: SessionSignal + ?Sized>(&self, path: &str, session: &S) -> Navigation {
        let protected = self.path(Route::User);
        let nav = match self.match_path(path) {
            Some(route) if !route.is_protected() => Navigation::Render(route),
            Some(route) => match self.gate.check(session, protected) {
                AuthDecision::Allow => Navigation::Render(route),
                AuthDecision::DenyRedirect(target) => Navigation::Redirect(target),
            },
            None => match self.gate.check(session, protected) {
                AuthDecision::Allow => Navigation::Redirect(protected.to_owned()),
                AuthDecision::DenyRedirect(target) => Navigation::Redirect(target),
            },
        };
        tracing::debug!(path, ?nav, "route resolved");
        nav
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(RoutePaths::default())
    }
}
