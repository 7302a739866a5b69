//! HTTP implementation of the portal credential service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning a transport error, since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a `SubmitError`; the submit handlers fold it into a
//! generic outcome, so nothing here panics or surfaces raw HTTP details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal::{CredentialService, SubmitError};
#[cfg(feature = "csr")]
use portal::{LoginSubmission, SignupSubmission};

#[cfg(not(feature = "csr"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/signup")
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/login")
}

#[cfg(any(test, feature = "csr"))]
fn transport_error(err: impl std::fmt::Display) -> SubmitError {
    SubmitError::Transport(err.to_string())
}

/// Credential endpoints under `api_base` (empty for same origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpCredentials {
    api_base: String,
}

impl HttpCredentials {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

impl CredentialService for HttpCredentials {
    /// `POST {api_base}/auth/signup` with the three signup fields.
    async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), SubmitError> {
        #[cfg(feature = "csr")]
        {
            let payload = SignupSubmission {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            };
            let resp = gloo_net::http::Request::post(&signup_endpoint(&self.api_base))
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(SubmitError::Rejected { status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.api_base, name, email, password);
            Err(SubmitError::Transport(NOT_IN_BROWSER.to_owned()))
        }
    }

    /// `POST {api_base}/auth/login`; stores the returned session marker.
    async fn login(&self, email: &str, password: &str) -> Result<(), SubmitError> {
        #[cfg(feature = "csr")]
        {
            let payload = LoginSubmission { email: email.to_owned(), password: password.to_owned() };
            let resp = gloo_net::http::Request::post(&login_endpoint(&self.api_base))
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(SubmitError::Rejected { status: resp.status() });
            }
            let body: super::types::LoginResponse = resp.json().await.map_err(transport_error)?;
            crate::util::session::store(&body.token, &body.name)
                .map_err(transport_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.api_base, email, password);
            Err(SubmitError::Transport(NOT_IN_BROWSER.to_owned()))
        }
    }
}

/// End the session. Purely client-side: the token marker is dropped.
pub fn logout() {
    crate::util::session::clear();
}
