use portal::SignupForm;

use super::*;

#[test]
fn empty_field_has_no_hint() {
    let form = SignupForm::default();
    assert_eq!(field_hint(&form.errors(), Field::Name, &form.name), None);
    assert_eq!(field_hint(&form.errors(), Field::Email, &form.email), None);
}

#[test]
fn short_name_gets_hint() {
    let form = SignupForm { name: "Al".to_owned(), ..SignupForm::default() };
    assert_eq!(
        field_hint(&form.errors(), Field::Name, &form.name).as_deref(),
        Some("O nome precisa ter ao menos 3 caracteres")
    );
}

#[test]
fn mismatch_shows_under_confirmation() {
    let form = SignupForm::new("Alice", "alice@example.com", "Password1@", "Password1");
    assert_eq!(
        field_hint(&form.errors(), Field::PasswordConfirm, &form.password_confirm).as_deref(),
        Some("As senhas não coincidem")
    );
}

#[test]
fn matching_confirmation_has_no_hint() {
    let form = SignupForm::new("Alice", "alice@example.com", "Password1@", "Password1@");
    assert_eq!(field_hint(&form.errors(), Field::PasswordConfirm, &form.password_confirm), None);
}

#[test]
fn every_error_has_text() {
    let errors = [
        FieldError::NameRequired,
        FieldError::NameTooShort { min: 3 },
        FieldError::EmailRequired,
        FieldError::EmailInvalid,
        FieldError::PasswordRequired,
        FieldError::PasswordWeak { unmet: Vec::new() },
        FieldError::ConfirmRequired,
        FieldError::Mismatch,
    ];
    for e in &errors {
        assert!(!hint_text(e).is_empty());
    }
}
