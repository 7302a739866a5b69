//! Route paths and user-facing messages.
//!
//! Values come from a key lookup so the same parser serves process
//! environment variables and compile-time values baked into a browser build.
//!
//! Keys (all optional):
//! - `PORTAL_LOGIN_PATH`: default `/login`
//! - `PORTAL_SIGNUP_PATH`: default `/signup`
//! - `PORTAL_PROTECTED_PATH`: default `/user`
//! - `PORTAL_API_BASE`: default empty (same origin)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_SIGNUP_PATH: &str = "/signup";
pub const DEFAULT_PROTECTED_PATH: &str = "/user";

/// Paths of the three known pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePaths {
    pub login: String,
    pub signup: String,
    pub protected: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PATH.to_owned(),
            signup: DEFAULT_SIGNUP_PATH.to_owned(),
            protected: DEFAULT_PROTECTED_PATH.to_owned(),
        }
    }
}

/// Generic toast copy. Failures are never itemized per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub invalid_form: String,
    pub signup_success: String,
    pub login_success: String,
    pub submission_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_form: "Preencha todos os campos corretamente!".to_owned(),
            signup_success: "Cadastro realizado com sucesso!".to_owned(),
            login_success: "Login feito com sucesso!".to_owned(),
            submission_failed: "Erro inesperado! Tente novamente mais tarde".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortalConfig {
    pub routes: RoutePaths,
    pub messages: Messages,
    /// Prefix for credential endpoints, without trailing slash.
    pub api_base: String,
}

impl PortalConfig {
    /// Build config from an arbitrary key lookup. Blank values use defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str, default: &str| {
            lookup(key)
                .as_deref()
                .and_then(normalize_path)
                .unwrap_or_else(|| default.to_owned())
        };
        let routes = RoutePaths {
            login: path("PORTAL_LOGIN_PATH", DEFAULT_LOGIN_PATH),
            signup: path("PORTAL_SIGNUP_PATH", DEFAULT_SIGNUP_PATH),
            protected: path("PORTAL_PROTECTED_PATH", DEFAULT_PROTECTED_PATH),
        };
        let api_base = lookup("PORTAL_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .unwrap_or_default();

        Self { routes, messages: Messages::default(), api_base }
    }

    /// Build config from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Collapse to a single leading slash and no trailing slash.
///
/// Returns `None` for blank input. The root path normalizes to `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let inner = trimmed.trim_matches('/');
    Some(format!("/{inner}"))
}
