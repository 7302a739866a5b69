//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Validation and submit decisions come from `portal`.

pub(crate) mod hints;
pub mod login;
pub mod signup;
pub mod user;
