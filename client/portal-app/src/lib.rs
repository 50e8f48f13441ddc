//! portal-app library
//!
//! View controllers and the shell that wires them to the session store,
//! exported for the `portal` binary and for tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod settings_commands;
pub(crate) mod shell;
pub(crate) mod views;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{AppError, Result as AppResult};
pub use logger::initialize as initialize_logger;
pub use settings_commands::SettingsCommands;
pub use shell::{Shell, ShellNavigator, apply_overrides};
pub use views::captcha::{CaptchaProvider, StaticCaptcha};
pub use views::dashboard_view::{DashboardView, UNEXPECTED_STRUCTURE};
pub use views::feedback::{Feedback, GENERIC_FAILURE, SESSION_EXPIRED};
pub use views::login_view::LoginView;
pub use views::register_view::{FORM_HAS_ERRORS, RegisterOutcome, RegisterView};
pub use views::settings_view::SettingsView;
