//! Error types shared by the form, gate, and submit modules.
//!
//! ERROR HANDLING
//! ==============
//! None of these escape the boundary where they occur: form handlers fold
//! them into a [`crate::submit::SubmitOutcome`] and the gate folds them into
//! an [`crate::gate::AuthDecision`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::form::FieldError;

/// Failure categories surfaced by the portal core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    /// One or more field rules, or the password-match rule, failed.
    #[error("form is invalid ({} problem(s))", .0.len())]
    InvalidForm(Vec<FieldError>),
    /// The credential service reported a failure.
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
    /// The gate denied access; the caller should redirect silently.
    #[error("not authenticated, redirect to {redirect}")]
    Unauthenticated { redirect: String },
}

impl From<SubmitError> for PortalError {
    fn from(err: SubmitError) -> Self {
        Self::SubmissionFailed(err.to_string())
    }
}

/// Error returned by a [`crate::submit::CredentialService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16 },
}

/// Error returned by a [`crate::gate::SessionSignal`] that cannot tell
/// whether the user is signed in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session state unavailable: {0}")]
    Unavailable(String),
}
