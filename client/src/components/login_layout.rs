//! Card layout shared by the login and signup pages.

use leptos::prelude::*;

/// Titled form card with a submit button and a secondary navigation button.
#[component]
pub fn LoginLayout(
    title: &'static str,
    primary_label: &'static str,
    secondary_label: &'static str,
    busy: RwSignal<bool>,
    on_submit: Callback<leptos::ev::SubmitEvent>,
    on_secondary: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <form class="login-form" on:submit=move |ev| on_submit.run(ev)>
                    {children()}
                    <div class="login-form__actions">
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {primary_label}
                        </button>
                        <button
                            class="login-button login-button--secondary"
                            type="button"
                            on:click=move |_| on_secondary.run(())
                        >
                            {secondary_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
