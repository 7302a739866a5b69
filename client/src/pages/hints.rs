//! Inline field hints shown under the form inputs.

#[cfg(test)]
#[path = "hints_test.rs"]
mod hints_test;

use portal::{Field, FieldError};

/// Short inline text for `error`.
pub fn hint_text(error: &FieldError) -> &'static str {
    match error {
        FieldError::NameRequired => "Informe seu nome",
        FieldError::NameTooShort { .. } => "O nome precisa ter ao menos 3 caracteres",
        FieldError::EmailRequired => "Informe seu e-mail",
        FieldError::EmailInvalid => "E-mail inválido",
        FieldError::PasswordRequired => "Informe sua senha",
        FieldError::PasswordWeak { .. } => "A senha não atende aos requisitos",
        FieldError::ConfirmRequired => "Confirme sua senha",
        FieldError::Mismatch => "As senhas não coincidem",
    }
}

/// First hint for `field`, or `None` while the field is still empty.
///
/// Empty fields stay quiet; submitting reports them through the generic
/// invalid-form toast instead.
pub fn field_hint(errors: &[FieldError], field: Field, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(|e| hint_text(e).to_owned())
}
