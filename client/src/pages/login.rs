//! Login page with email + password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::{Field, FormKind, LoginForm, PortalConfig, SubmitOutcome, announce};

use super::hints::field_hint;
use crate::components::login_layout::LoginLayout;
use crate::components::primary_input::PrimaryInput;
use crate::components::toast_stack::ToastNotifier;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Login page. On success the session marker is stored and the user is sent
/// to the protected page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<PortalConfig>());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let email_hint = Signal::derive(move || {
        let form = LoginForm::new(email.get(), password.get());
        field_hint(&form.errors(), Field::Email, &form.email)
    });

    #[cfg(feature = "csr")]
    let navigate_after_login = navigate.clone();
    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm::new(email.get_untracked(), password.get_untracked());
        let notifier = ToastNotifier::new(toasts);
        if !form.is_submittable() {
            config.with_value(|c| {
                announce(SubmitOutcome::InvalidForm, FormKind::Login, &c.messages, &notifier);
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate_after_login.clone();
            leptos::task::spawn_local(async move {
                let config = config.get_value();
                let service = crate::net::api::HttpCredentials::new(config.api_base.clone());
                let outcome = portal::submit_login(&form, &service).await;
                announce(outcome, FormKind::Login, &config.messages, &notifier);
                busy.set(false);
                if outcome.is_success() {
                    auth.set(AuthState::restore());
                    navigate(&config.routes.protected, NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (form, auth);
            busy.set(false);
        }
    });

    let signup_path = config.with_value(|c| c.routes.signup.clone());
    let on_signup = Callback::new(move |()| navigate(&signup_path, NavigateOptions::default()));

    view! {
        <LoginLayout
            title="Login"
            primary_label="Entrar"
            secondary_label="Criar conta"
            busy=busy
            on_submit=on_submit
            on_secondary=on_signup
        >
            <PrimaryInput
                label="E-mail"
                input_type="email"
                placeholder="voce@exemplo.com"
                value=email
                hint=email_hint
            />
            <PrimaryInput label="Senha" input_type="password" value=password/>
        </LoginLayout>
    }
}
