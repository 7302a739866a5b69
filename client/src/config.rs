//! Build-time configuration for the browser bundle.
//!
//! The browser has no process environment, so the `PORTAL_*` keys are read
//! with `option_env!` when the bundle is compiled and fed through
//! [`PortalConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use portal::PortalConfig;

fn compile_time_value(key: &str) -> Option<String> {
    let value = match key {
        "PORTAL_LOGIN_PATH" => option_env!("PORTAL_LOGIN_PATH"),
        "PORTAL_SIGNUP_PATH" => option_env!("PORTAL_SIGNUP_PATH"),
        "PORTAL_PROTECTED_PATH" => option_env!("PORTAL_PROTECTED_PATH"),
        "PORTAL_API_BASE" => option_env!("PORTAL_API_BASE"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Configuration baked into this build.
pub fn load() -> PortalConfig {
    PortalConfig::from_lookup(compile_time_value)
}
