use std::cell::Cell;

use super::*;

fn signed_in() -> Result<bool, SessionError> {
    Ok(true)
}

fn signed_out() -> Result<bool, SessionError> {
    Ok(false)
}

// =============================================================
// can_activate
// =============================================================

#[test]
fn authenticated_user_is_allowed() {
    assert_eq!(can_activate(true, "/user", "/login"), AuthDecision::Allow);
}

#[test]
fn unauthenticated_user_is_redirected_to_fallback() {
    assert_eq!(
        can_activate(false, "/user", "/login"),
        AuthDecision::DenyRedirect("/login".to_owned())
    );
}

#[test]
fn redirect_target_ignores_requested_path() {
    let a = can_activate(false, "/user", "/login");
    let b = can_activate(false, "/user/settings?tab=1", "/login");
    assert_eq!(a, b);
}

// =============================================================
// can_activate_with (fail closed)
// =============================================================

#[test]
fn errored_signal_denies() {
    let signal: Result<bool, SessionError> = Err(SessionError::Unavailable("boom".to_owned()));
    assert_eq!(
        can_activate_with(signal, "/user", "/login"),
        AuthDecision::DenyRedirect("/login".to_owned())
    );
}

#[test]
fn ok_signal_matches_plain_check() {
    for flag in [true, false] {
        let signal: Result<bool, &str> = Ok(flag);
        assert_eq!(
            can_activate_with(signal, "/user", "/login"),
            can_activate(flag, "/user", "/login")
        );
    }
}

// =============================================================
// AuthDecision helpers
// =============================================================

#[test]
fn decision_accessors() {
    assert!(AuthDecision::Allow.is_allowed());
    assert_eq!(AuthDecision::Allow.redirect_target(), None);

    let deny = AuthDecision::DenyRedirect("/login".to_owned());
    assert!(!deny.is_allowed());
    assert_eq!(deny.redirect_target(), Some("/login"));
}

#[test]
fn decision_into_result() {
    assert_eq!(AuthDecision::Allow.into_result(), Ok(()));
    assert_eq!(
        AuthDecision::DenyRedirect("/login".to_owned()).into_result(),
        Err(PortalError::Unauthenticated { redirect: "/login".to_owned() })
    );
}

// =============================================================
// AuthGate
// =============================================================

#[test]
fn gate_uses_configured_fallback() {
    let gate = AuthGate::new("/entrar");
    assert_eq!(gate.fallback_path(), "/entrar");
    assert_eq!(gate.check(&signed_out, "/user"), AuthDecision::DenyRedirect("/entrar".to_owned()));
    assert_eq!(gate.check(&signed_in, "/user"), AuthDecision::Allow);
}

#[test]
fn gate_fails_closed_on_signal_error() {
    let gate = AuthGate::new("/login");
    let broken = || Err::<bool, _>(SessionError::Unavailable("no storage".to_owned()));
    assert!(!gate.check(&broken, "/user").is_allowed());
}

#[test]
fn gate_queries_signal_on_every_check() {
    let calls = Cell::new(0);
    let authed = Cell::new(false);
    let signal = || {
        calls.set(calls.get() + 1);
        Ok::<_, SessionError>(authed.get())
    };
    let gate = AuthGate::new("/login");

    assert!(!gate.check(&signal, "/user").is_allowed());
    authed.set(true);
    assert!(gate.check(&signal, "/user").is_allowed());
    assert_eq!(calls.get(), 2);
}
