//! Submit handlers for the signup and login forms.
//!
//! ARCHITECTURE
//! ============
//! Handlers validate, call the external [`CredentialService`] at most once,
//! and return a tagged [`SubmitOutcome`]. Turning an outcome into a toast is
//! a separate step ([`announce`]) so the handlers never touch presentation.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::future::Future;

use crate::config::Messages;
use crate::error::SubmitError;
use crate::form::{LoginForm, SignupForm};

/// Credential endpoint owned by the caller (HTTP client, test fake, ...).
pub trait CredentialService {
    /// Register a new account.
    fn signup(&self, name: &str, email: &str, password: &str)
    -> impl Future<Output = Result<(), SubmitError>>;

    /// Start a session for an existing account.
    fn login(&self, email: &str, password: &str) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Which form produced an outcome; selects the success copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Signup,
    Login,
}

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The credential service accepted the request.
    Submitted,
    /// Validation failed; the credential service was not called.
    InvalidForm,
    /// The credential service reported a failure.
    SubmissionFailed,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// User-visible message for this outcome.
    #[must_use]
    pub fn message(self, kind: FormKind, messages: &Messages) -> &str {
        match (self, kind) {
            (Self::Submitted, FormKind::Signup) => &messages.signup_success,
            (Self::Submitted, FormKind::Login) => &messages.login_success,
            (Self::InvalidForm, _) => &messages.invalid_form,
            (Self::SubmissionFailed, _) => &messages.submission_failed,
        }
    }
}

/// Validate `form` and, if valid, register it with `service`.
pub async fn submit_signup<C>(form: &SignupForm, service: &C) -> SubmitOutcome
where
    C: CredentialService + ?Sized,
{
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(e) => {
            tracing::debug!(error = %e, "signup form rejected");
            return SubmitOutcome::InvalidForm;
        }
    };

    match service
        .signup(&submission.name, &submission.email, &submission.password)
        .await
    {
        Ok(()) => {
            tracing::info!(email = %submission.email, "signup accepted");
            SubmitOutcome::Submitted
        }
        Err(e) => {
            tracing::warn!(error = %e, email = %submission.email, "signup failed");
            SubmitOutcome::SubmissionFailed
        }
    }
}

/// Validate `form` and, if valid, log in through `service`.
pub async fn submit_login<C>(form: &LoginForm, service: &C) -> SubmitOutcome
where
    C: CredentialService + ?Sized,
{
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(e) => {
            tracing::debug!(error = %e, "login form rejected");
            return SubmitOutcome::InvalidForm;
        }
    };

    match service.login(&submission.email, &submission.password).await {
        Ok(()) => {
            tracing::info!(email = %submission.email, "login accepted");
            SubmitOutcome::Submitted
        }
        Err(e) => {
            tracing::warn!(error = %e, email = %submission.email, "login failed");
            SubmitOutcome::SubmissionFailed
        }
    }
}

/// Show the message for `outcome` through `notifier`.
pub fn announce<N>(outcome: SubmitOutcome, kind: FormKind, messages: &Messages, notifier: &N)
where
    N: Notifier + ?Sized,
{
    let message = outcome.message(kind, messages);
    if outcome.is_success() {
        notifier.notify_success(message);
    } else {
        notifier.notify_error(message);
    }
}
