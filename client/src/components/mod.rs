//! Reusable UI building blocks shared by the pages.

pub mod login_layout;
pub mod password_checklist;
pub mod primary_input;
pub mod toast_stack;
