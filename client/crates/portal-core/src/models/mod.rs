pub mod bearer_token;
pub mod dashboard_summary;
pub mod route;
pub mod session;
pub mod session_state;
pub mod settings_field;
pub mod stored_session;
pub mod user_profile;
