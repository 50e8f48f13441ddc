pub(crate) mod captcha;
pub(crate) mod dashboard_view;
pub(crate) mod feedback;
pub(crate) mod login_view;
pub(crate) mod register_view;
pub(crate) mod settings_view;
