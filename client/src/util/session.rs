//! `sessionStorage`-backed session marker.
//!
//! A successful login stores the token and display name here; logout clears
//! them. [`BrowserSession`] is the signal the route gate consults. Outside
//! the browser storage is unavailable, so the gate fails closed.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use portal::{SessionError, SessionSignal};

pub const TOKEN_KEY: &str = "auth-token";
pub const USER_NAME_KEY: &str = "username";

/// Session signal reading the token marker on every query.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionSignal for BrowserSession {
    fn is_authenticated(&self) -> Result<bool, SessionError> {
        read(TOKEN_KEY).map(|token| token.is_some_and(|t| !t.trim().is_empty()))
    }
}

#[cfg(feature = "csr")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    let window =
        web_sys::window().ok_or_else(|| SessionError::Unavailable("no window".to_owned()))?;
    window
        .session_storage()
        .map_err(|_| SessionError::Unavailable("sessionStorage access denied".to_owned()))?
        .ok_or_else(|| SessionError::Unavailable("sessionStorage missing".to_owned()))
}

fn read(key: &str) -> Result<Option<String>, SessionError> {
    #[cfg(feature = "csr")]
    {
        storage()?
            .get_item(key)
            .map_err(|_| SessionError::Unavailable(format!("failed to read {key}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        Err(SessionError::Unavailable("no browser storage".to_owned()))
    }
}

/// Display name saved at login, if any.
pub fn user_name() -> Option<String> {
    read(USER_NAME_KEY).ok().flatten()
}

/// Persist the session marker after a successful login.
///
/// Both keys are written or neither is: a failed write removes whatever was
/// already stored so the gate and the displayed name never disagree.
pub fn store(token: &str, user_name: &str) -> Result<(), SessionError> {
    #[cfg(feature = "csr")]
    {
        let storage = storage()?;
        let written = storage
            .set_item(TOKEN_KEY, token)
            .and_then(|()| storage.set_item(USER_NAME_KEY, user_name));
        if written.is_err() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_NAME_KEY);
            return Err(SessionError::Unavailable("failed to write session".to_owned()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, user_name);
        Err(SessionError::Unavailable("no browser storage".to_owned()))
    }
}

/// Drop the session marker.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Ok(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_NAME_KEY);
        }
    }
}
