use super::*;

#[test]
fn login_response_deserializes() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"token":"abc","name":"Alice"}"#).unwrap();
    assert_eq!(body.token, "abc");
    assert_eq!(body.name, "Alice");
}

#[test]
fn login_response_ignores_extra_fields() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"token":"abc","name":"Alice","expires_in":3600}"#).unwrap();
    assert_eq!(body.name, "Alice");
}

#[test]
fn login_response_requires_token() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"name":"Alice"}"#).is_err());
}

#[test]
fn login_response_debug_hides_token() {
    let body = LoginResponse { token: "secret".to_owned(), name: "Alice".to_owned() };
    assert!(!format!("{body:?}").contains("secret"));
}
