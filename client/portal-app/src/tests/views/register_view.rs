use crate::{FORM_HAS_ERRORS, RegisterOutcome, RegisterView};

use portal_api::{ApiClient, SessionHandle};
use portal_config::{ApiConfig, HostKind};
use portal_core::{BearerToken, RegistrationField, RegistrationForm};

use std::sync::Arc;

struct NoSession;

impl SessionHandle for NoSession {
    fn bearer_token(&self) -> Option<BearerToken> {
        None
    }

    fn authorization_failed(&self) {}
}

/// Client pointing at a closed port; any request would fail as Http.
fn offline_client() -> ApiClient {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };
    ApiClient::new(&config, HostKind::Browser, Arc::new(NoSession)).unwrap()
}

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        dni: "12345678".to_string(),
        celular: "987654321".to_string(),
        password: "Secreto1!".to_string(),
        password_confirmation: "Secreto1!".to_string(),
    }
}

#[test]
fn given_field_edit_when_invalid_then_error_set_live() {
    let mut view = RegisterView::new(None, "register");

    view.set(RegistrationField::Dni, "1234");
    assert!(view.errors().contains("dni"));

    view.set(RegistrationField::Dni, "12345678");
    assert!(!view.errors().contains("dni"));
}

#[test]
fn given_password_change_when_confirmation_filled_then_confirmation_rechecked() {
    let mut view = RegisterView::new(None, "register");
    view.set(RegistrationField::Password, "Secreto1!");
    view.set(RegistrationField::PasswordConfirmation, "Secreto1!");
    assert!(!view.errors().contains("password_confirmation"));

    view.set(RegistrationField::Password, "Secreto2!");

    assert!(view.errors().contains("password_confirmation"));
}

#[test]
fn given_password_when_scored_then_strength_reported() {
    let mut view = RegisterView::new(None, "register");
    view.set(RegistrationField::Password, "Secreto1!");

    assert_eq!(view.password_strength().value(), 4);
}

#[tokio::test]
async fn given_mismatched_confirmation_when_submitted_then_invalid_locally() {
    let mut view = RegisterView::new(None, "register");
    let mut form = valid_form();
    form.password_confirmation = "Secreto2!".to_string();
    view.fill(form);

    let outcome = view.submit(&offline_client()).await.unwrap();

    match outcome {
        RegisterOutcome::Invalid { message, errors } => {
            assert_eq!(message, FORM_HAS_ERRORS);
            assert_eq!(errors.len(), 1);
            assert!(errors.contains("password_confirmation"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn given_valid_form_without_captcha_when_submitted_then_failed_without_request() {
    let mut view = RegisterView::new(None, "register");
    view.fill(valid_form());

    let outcome = view.submit(&offline_client()).await.unwrap();

    assert!(matches!(outcome, RegisterOutcome::Failed { .. }));
}
