use crate::{BearerToken, Session, SessionState, UserProfile};

#[test]
fn test_anonymous_session_has_neither_identity_nor_token() {
    let session = Session::anonymous();
    assert!(session.identity().is_none());
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn test_authenticated_session_has_both() {
    let session = Session::authenticated(UserProfile::new(1, "Ana"), BearerToken::new("tok"));
    assert_eq!(session.identity().map(|u| u.id), Some(1));
    assert_eq!(session.token().map(BearerToken::as_str), Some("tok"));
    assert!(session.is_authenticated());
}

#[test]
fn test_session_state_defaults_to_loading() {
    assert_eq!(SessionState::default(), SessionState::Loading);
    assert!(SessionState::default().is_loading());
}

#[test]
fn test_session_state_identity() {
    let state = SessionState::Authenticated(UserProfile::new(2, "Luis"));
    assert_eq!(state.identity().map(|u| u.name.as_str()), Some("Luis"));
    assert!(SessionState::Unauthenticated.identity().is_none());
}

#[test]
fn test_session_state_serializes_with_status_tag() {
    let json = serde_json::to_value(SessionState::Unauthenticated).unwrap();
    assert_eq!(json["status"], "unauthenticated");

    let json = serde_json::to_value(SessionState::Authenticated(UserProfile::new(1, "Ana"))).unwrap();
    assert_eq!(json["status"], "authenticated");
    assert_eq!(json["user"]["name"], "Ana");
}
