mod password_strength;
mod registration_form;
