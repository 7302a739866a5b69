//! # portal
//!
//! Framework-agnostic core of the account portal: password strength rules,
//! signup/login form validation, the protected-route gate, route resolution,
//! and submit handlers that return tagged outcomes.
//!
//! Nothing here touches the browser. The `client` crate wires these pieces
//! into Leptos pages and supplies the HTTP, session, and toast collaborators.

pub mod config;
pub mod error;
pub mod form;
pub mod gate;
pub mod password;
pub mod routes;
pub mod submit;

pub use config::{Messages, PortalConfig, RoutePaths};
pub use error::{PortalError, SessionError, SubmitError};
pub use form::{Field, FieldError, LoginForm, LoginSubmission, SignupForm, SignupSubmission};
pub use gate::{AuthDecision, AuthGate, SessionSignal, can_activate, can_activate_with};
pub use password::{
    PasswordMeter, PasswordRequirements, Requirement, STRONG_PASSWORD_PATTERN, evaluate_optional,
    evaluate_strength, is_strong, matches_strong_pattern, passwords_match,
};
pub use routes::{Navigation, Route, RouteTable};
pub use submit::{CredentialService, FormKind, Notifier, SubmitOutcome, announce, submit_login, submit_signup};
