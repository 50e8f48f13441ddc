use crate::forms::registration_form::{
    CELULAR_INVALID, CONFIRMATION_MISMATCH, DNI_INVALID, EMAIL_INVALID, NAME_REQUIRED,
    PASSWORD_TOO_SHORT, PASSWORD_TOO_WEAK,
};
use crate::{RegistrationField, RegistrationForm, RegistrationRequest};

use std::str::FromStr;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Ana Quispe".into(),
        email: "ana@example.com".into(),
        dni: "12345678".into(),
        celular: "987654321".into(),
        password: "Secreto1!".into(),
        password_confirmation: "Secreto1!".into(),
    }
}

#[test]
fn given_valid_form_when_validated_then_no_errors() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn given_blank_name_when_checked_then_required() {
    let mut form = valid_form();
    form.name = "   ".into();
    assert_eq!(form.check(RegistrationField::Name), Some(NAME_REQUIRED));
}

#[test]
fn given_bad_emails_when_checked_then_invalid() {
    let mut form = valid_form();
    for email in ["ana", "ana@", "@example.com", "ana@example", "ana @example.com", "a@b@c.com", "ana@.com"] {
        form.email = email.into();
        assert_eq!(form.check(RegistrationField::Email), Some(EMAIL_INVALID), "{email}");
    }
}

#[test]
fn given_bad_dni_when_checked_then_invalid() {
    let mut form = valid_form();
    for dni in ["1234567", "123456789", "1234567a"] {
        form.dni = dni.into();
        assert_eq!(form.check(RegistrationField::Dni), Some(DNI_INVALID), "{dni}");
    }
}

#[test]
fn given_bad_phone_when_checked_then_invalid() {
    let mut form = valid_form();
    for celular in ["887654321", "98765432", "9876543210", "98765432x"] {
        form.celular = celular.into();
        assert_eq!(form.check(RegistrationField::Celular), Some(CELULAR_INVALID), "{celular}");
    }
}

#[test]
fn given_short_password_when_checked_then_too_short() {
    let mut form = valid_form();
    form.password = "Ab1!".into();
    assert_eq!(form.check(RegistrationField::Password), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn given_password_without_symbol_when_checked_then_too_weak() {
    let mut form = valid_form();
    form.password = "Secreto12".into();
    assert_eq!(form.check(RegistrationField::Password), Some(PASSWORD_TOO_WEAK));
}

#[test]
fn given_mismatched_confirmation_when_validated_then_only_confirmation_flagged() {
    let mut form = valid_form();
    form.password_confirmation = "Secreto2!".into();

    let errors = form.validate();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("password_confirmation"), Some(CONFIRMATION_MISMATCH));
}

#[test]
fn test_set_and_value_cover_every_field() {
    let mut form = RegistrationForm::default();
    for field in RegistrationField::ALL {
        form.set(field, field.as_str());
        assert_eq!(form.value(field), field.as_str());
        assert_eq!(RegistrationField::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn given_request_when_serialized_then_captcha_uses_backend_key() {
    let request = RegistrationRequest::new(valid_form(), "captcha-xyz");

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["g-recaptcha-response"], "captcha-xyz");
    assert_eq!(json["dni"], "12345678");
    assert_eq!(json["password_confirmation"], "Secreto1!");
}
