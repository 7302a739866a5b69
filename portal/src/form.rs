//! Signup and login form state with pure validation.
//!
//! DESIGN
//! ======
//! Forms are plain values. Validity is derived on demand from the current
//! field contents, so there is nothing to keep in sync: the UI shell calls
//! [`SignupForm::revalidate_match`] (or [`SignupForm::errors`]) after either
//! password field changes and renders whatever comes back.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::password::{self, PasswordRequirements, Requirement};

/// Minimum display-name length, in UTF-16 code units.
pub const MIN_NAME_LEN: usize = 3;

const MAX_EMAIL_LEN: usize = 254;
const MAX_EMAIL_LOCAL_LEN: usize = 64;

// Browser `type=email` grammar; the length limits are checked separately.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"#,
    )
    .expect("email regex is valid")
});

/// Input fields across the signup and login forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirm,
}

/// A single failed rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    NameTooShort { min: usize },
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordWeak { unmet: Vec<Requirement> },
    ConfirmRequired,
    /// Cross-field rule: `password` and `password_confirm` differ.
    Mismatch,
}

impl FieldError {
    /// Field the error should be displayed next to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::NameRequired | Self::NameTooShort { .. } => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::PasswordRequired | Self::PasswordWeak { .. } => Field::Password,
            Self::ConfirmRequired | Self::Mismatch => Field::PasswordConfirm,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => f.write_str("name is required"),
            Self::NameTooShort { min } => write!(f, "name must have at least {min} characters"),
            Self::EmailRequired => f.write_str("email is required"),
            Self::EmailInvalid => f.write_str("email is not a valid address"),
            Self::PasswordRequired => f.write_str("password is required"),
            Self::PasswordWeak { unmet } => write!(f, "password misses {} rule(s)", unmet.len()),
            Self::ConfirmRequired => f.write_str("password confirmation is required"),
            Self::Mismatch => f.write_str("passwords do not match"),
        }
    }
}

/// True when `email` is non-empty and shaped like an address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let local_len = email.find('@').unwrap_or(email.len());
    local_len <= MAX_EMAIL_LOCAL_LEN && EMAIL.is_match(email)
}

fn name_errors(name: &str) -> Option<FieldError> {
    if name.is_empty() {
        return Some(FieldError::NameRequired);
    }
    if name.encode_utf16().count() < MIN_NAME_LEN {
        return Some(FieldError::NameTooShort { min: MIN_NAME_LEN });
    }
    None
}

fn email_errors(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

/// Raw values of the four signup inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignupForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirm: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            password_confirm: password_confirm.into(),
        }
    }

    /// Per-rule breakdown of the current password, for live feedback.
    #[must_use]
    pub fn password_requirements(&self) -> PasswordRequirements {
        password::evaluate_strength(&self.password)
    }

    /// Re-check the cross-field rule. Call after either password changes.
    #[must_use]
    pub fn revalidate_match(&self) -> bool {
        password::passwords_match(&self.password, &self.password_confirm)
    }

    /// Every failing rule, field rules first, then the cross-field rule.
    ///
    /// An empty password yields only [`FieldError::PasswordRequired`], never
    /// an accompanying [`FieldError::PasswordWeak`].
    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(name_errors(&self.name));
        errors.extend(email_errors(&self.email));

        if self.password.is_empty() {
            errors.push(FieldError::PasswordRequired);
        } else {
            let unmet = self.password_requirements().unmet();
            if !unmet.is_empty() {
                errors.push(FieldError::PasswordWeak { unmet });
            }
        }

        if self.password_confirm.is_empty() {
            errors.push(FieldError::ConfirmRequired);
        }
        if !self.revalidate_match() {
            errors.push(FieldError::Mismatch);
        }
        errors
    }

    /// Failing rules attached to one field.
    #[must_use]
    pub fn errors_for(&self, field: Field) -> Vec<FieldError> {
        self.errors().into_iter().filter(|e| e.field() == field).collect()
    }

    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.errors().is_empty()
    }

    /// Extract the payload for the credential service.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidForm`] listing every failing rule.
    pub fn validate(&self) -> Result<SignupSubmission, PortalError> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(PortalError::InvalidForm(errors));
        }
        Ok(SignupSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Signup payload: the form minus the confirmation field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupSubmission")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw values of the two login inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(email_errors(&self.email));
        if self.password.is_empty() {
            errors.push(FieldError::PasswordRequired);
        }
        errors
    }

    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.errors().is_empty()
    }

    /// Extract the payload for the credential service.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::InvalidForm`] listing every failing rule.
    pub fn validate(&self) -> Result<LoginSubmission, PortalError> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(PortalError::InvalidForm(errors));
        }
        Ok(LoginSubmission { email: self.email.clone(), password: self.password.clone() })
    }
}

/// Login payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSubmission {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
