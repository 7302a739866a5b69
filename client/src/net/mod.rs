//! Networking modules for the credential endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the portal's `CredentialService` over HTTP and `types`
//! defines the response bodies it reads.

pub mod api;
pub mod types;
