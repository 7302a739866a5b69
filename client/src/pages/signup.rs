//! Signup page with live password feedback.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portal::{
    Field, FormKind, PasswordMeter, PortalConfig, SignupForm, SubmitOutcome, announce,
};

use super::hints::field_hint;
use crate::components::login_layout::LoginLayout;
use crate::components::password_checklist::PasswordChecklist;
use crate::components::primary_input::PrimaryInput;
use crate::components::toast_stack::ToastNotifier;
use crate::state::toast::ToastState;

/// Signup page: four inputs, per-rule password checklist, and a link back
/// to login. Submission goes through `portal::submit_signup`.
#[component]
pub fn SignupPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<PortalConfig>());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let meter = RwSignal::new(PasswordMeter::new());

    let current_form =
        move || SignupForm::new(name.get(), email.get(), password.get(), password_confirm.get());

    // Re-score on every password change.
    Effect::new(move || {
        let value = password.get();
        meter.update(|m| {
            m.evaluate(&value);
        });
    });

    let requirements = Signal::derive(move || meter.with(|m| m.last().unwrap_or_default()));
    let hint_for = move |field: Field, value: RwSignal<String>| {
        Signal::derive(move || field_hint(&current_form().errors(), field, &value.get()))
    };

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm::new(
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            password_confirm.get_untracked(),
        );
        let notifier = ToastNotifier::new(toasts);
        if !form.is_submittable() {
            config.with_value(|c| {
                announce(SubmitOutcome::InvalidForm, FormKind::Signup, &c.messages, &notifier);
            });
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let config = config.get_value();
            let service = crate::net::api::HttpCredentials::new(config.api_base.clone());
            let outcome = portal::submit_signup(&form, &service).await;
            announce(outcome, FormKind::Signup, &config.messages, &notifier);
            busy.set(false);
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
            busy.set(false);
        }
    });

    let login_path = config.with_value(|c| c.routes.login.clone());
    let on_login = Callback::new(move |()| navigate(&login_path, NavigateOptions::default()));

    view! {
        <LoginLayout
            title="Cadastro"
            primary_label="Cadastrar"
            secondary_label="Já tenho conta"
            busy=busy
            on_submit=on_submit
            on_secondary=on_login
        >
            <PrimaryInput
                label="Nome"
                input_type="text"
                placeholder="Seu nome"
                value=name
                hint=hint_for(Field::Name, name)
            />
            <PrimaryInput
                label="E-mail"
                input_type="email"
                placeholder="voce@exemplo.com"
                value=email
                hint=hint_for(Field::Email, email)
            />
            <PrimaryInput label="Senha" input_type="password" value=password/>
            <PasswordChecklist requirements=requirements/>
            <PrimaryInput
                label="Confirmar senha"
                input_type="password"
                value=password_confirm
                hint=hint_for(Field::PasswordConfirm, password_confirm)
            />
        </LoginLayout>
    }
}
