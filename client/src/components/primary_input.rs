//! Labeled text input bound to a string signal.

use leptos::prelude::*;

/// Input that writes every keystroke into `value` and shows an optional hint.
#[component]
pub fn PrimaryInput(
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] hint: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let hint_text = move || hint.and_then(|h| h.get());

    view! {
        <label class="primary-input">
            <span class="primary-input__label">{label}</span>
            <input
                class="primary-input__field"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || hint_text().is_some()>
                <span class="primary-input__hint">{move || hint_text().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
