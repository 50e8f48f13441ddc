pub mod error;
pub mod forms;
pub mod models;


pub use error::{CoreError, Result};
pub use forms::field_errors::FieldErrors;
pub use forms::password_strength::PasswordStrength;
pub use forms::registration_field::RegistrationField;
pub use forms::registration_form::RegistrationForm;
pub use forms::registration_request::RegistrationRequest;
pub use models::bearer_token::BearerToken;
pub use models::dashboard_summary::DashboardSummary;
pub use models::route::Route;
pub use models::session::Session;
pub use models::session_state::SessionState;
pub use models::settings_field::SettingsField;
pub use models::stored_session::StoredSession;
pub use models::user_profile::UserProfile;
