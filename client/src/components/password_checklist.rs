//! Live per-rule password feedback.

#[cfg(test)]
#[path = "password_checklist_test.rs"]
mod password_checklist_test;

use leptos::prelude::*;
use portal::PasswordRequirements;

/// One row of the checklist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: &'static str,
    pub met: bool,
}

impl ChecklistItem {
    pub fn class(self) -> &'static str {
        if self.met {
            "password-checklist__item password-checklist__item--met"
        } else {
            "password-checklist__item password-checklist__item--unmet"
        }
    }
}

/// Checklist rows for `requirements`, in rule order.
pub fn checklist_items(requirements: &PasswordRequirements) -> Vec<ChecklistItem> {
    requirements
        .iter()
        .map(|(rule, met)| ChecklistItem { label: rule.label(), met })
        .collect()
}

/// Renders one row per password rule, marked met or unmet.
#[component]
pub fn PasswordChecklist(requirements: Signal<PasswordRequirements>) -> impl IntoView {
    view! {
        <ul class="password-checklist">
            {move || {
                checklist_items(&requirements.get())
                    .into_iter()
                    .map(|item| view! { <li class=item.class()>{item.label}</li> })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
