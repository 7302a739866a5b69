//! Protected landing page for signed-in users.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::PortalConfig;

use crate::state::auth::AuthState;

/// Heading text for the user page.
pub fn greeting(user_name: Option<&str>) -> String {
    match user_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Olá, {name}!"),
        None => "Olá!".to_owned(),
    }
}

/// User page. Only reachable through the gate; logout clears the session
/// and returns to login.
#[component]
pub fn UserPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let login_path = expect_context::<PortalConfig>().routes.login;
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::net::api::logout();
        auth.set(AuthState::default());
        navigate(&login_path, NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{move || greeting(auth.get().user_name.as_deref())}</h1>
                <p class="login-card__subtitle">"Você está conectado."</p>
                <button class="login-button" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </div>
    }
}
