use super::*;

#[test]
fn invalid_form_message_counts_problems() {
    let err = PortalError::InvalidForm(vec![FieldError::NameRequired, FieldError::Mismatch]);
    assert_eq!(err.to_string(), "form is invalid (2 problem(s))");
}

#[test]
fn submit_error_converts_to_submission_failed() {
    let err: PortalError = SubmitError::Rejected { status: 409 }.into();
    assert_eq!(
        err,
        PortalError::SubmissionFailed("request rejected with status 409".to_owned())
    );
}

#[test]
fn unauthenticated_message_names_redirect() {
    let err = PortalError::Unauthenticated { redirect: "/login".to_owned() };
    assert_eq!(err.to_string(), "not authenticated, redirect to /login");
}

#[test]
fn session_error_formats_reason() {
    let err = SessionError::Unavailable("storage blocked".to_owned());
    assert_eq!(err.to_string(), "session state unavailable: storage blocked");
}
