//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so pages and components can
//! depend on small focused models provided through Leptos context.

pub mod auth;
pub mod toast;
