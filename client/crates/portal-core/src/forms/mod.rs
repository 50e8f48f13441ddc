pub mod field_errors;
pub mod password_strength;
pub mod registration_field;
pub mod registration_form;
pub mod registration_request;
