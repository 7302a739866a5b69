//! Wire DTOs read from the credential endpoints.
//!
//! Request bodies are the `portal` submission types serialized as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body returned by a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token; only its presence is checked client-side.
    pub token: String,
    /// Display name of the signed-in user.
    pub name: String,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}
