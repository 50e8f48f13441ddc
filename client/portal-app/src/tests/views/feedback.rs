use crate::{Feedback, GENERIC_FAILURE, SESSION_EXPIRED};

use portal_api::ClientError;
use portal_core::FieldErrors;

use googletest::prelude::*;

#[test]
fn given_missing_token_when_mapped_then_session_expired() {
    let feedback = Feedback::from_client_error(&ClientError::missing_token());

    assert_eq!(
        feedback,
        Feedback::SessionExpired {
            message: SESSION_EXPIRED.to_string()
        }
    );
}

#[test]
fn given_validation_error_when_mapped_then_inline_errors() {
    let mut errors = FieldErrors::new();
    errors.set("email", "The email has already been taken.");
    let err = ClientError::validation("invalid".to_string(), errors.clone());

    assert_eq!(
        Feedback::from_client_error(&err),
        Feedback::Inline {
            message: None,
            errors
        }
    );
}

#[test]
fn given_server_error_with_message_when_mapped_then_dismissible_message() {
    let err = ClientError::api_error(500, "Database unavailable".to_string());

    assert_eq!(
        Feedback::from_client_error(&err),
        Feedback::dismissible("Database unavailable")
    );
}

#[test]
fn given_server_error_without_message_when_mapped_then_generic_message() {
    let err = ClientError::api_error(502, "  ".to_string());

    assert_eq!(
        Feedback::from_client_error(&err),
        Feedback::dismissible(GENERIC_FAILURE)
    );
}

#[test]
fn given_feedback_when_serialized_then_tagged_by_kind() {
    let json = serde_json::to_value(Feedback::dismissible("Try later")).unwrap();

    assert_that!(json["kind"].as_str(), some(eq("dismissible")));
    assert_that!(json["message"].as_str(), some(eq("Try later")));
}
