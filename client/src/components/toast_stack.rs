//! Toast stack and the `Notifier` that feeds it.

use leptos::prelude::*;
use portal::Notifier;

use crate::state::toast::{ToastKind, ToastState};

/// Pushes portal notifications onto the shared toast signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();

        #[cfg(feature = "csr")]
        {
            let toasts = self.toasts;
            gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_TTL_MS, move || {
                toasts.update(|t| {
                    t.dismiss(id);
                });
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Fixed-position stack of the current toasts; click to dismiss.
#[component]
pub fn ToastStack(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=toast.kind.class()
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
