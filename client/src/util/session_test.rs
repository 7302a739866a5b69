#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn signal_errors_outside_browser() {
    assert!(BrowserSession.is_authenticated().is_err());
}

#[test]
fn gate_fails_closed_without_storage() {
    let gate = portal::AuthGate::new("/login");
    assert_eq!(
        gate.check(&BrowserSession, "/user"),
        portal::AuthDecision::DenyRedirect("/login".to_owned())
    );
}

#[test]
fn user_name_is_absent_outside_browser() {
    assert_eq!(user_name(), None);
}

#[test]
fn store_fails_outside_browser() {
    let err = store("token", "Alice").unwrap_err();
    assert!(matches!(err, SessionError::Unavailable(_)));
}

#[test]
fn failed_store_leaves_signal_unset() {
    assert!(store("token", "Alice").is_err());
    clear();
    assert!(BrowserSession.is_authenticated().is_err());
    assert_eq!(user_name(), None);
}

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(TOKEN_KEY, USER_NAME_KEY);
}
