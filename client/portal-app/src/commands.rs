use crate::settings_commands::SettingsCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and keep the session on this machine
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create a new account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// National ID, 8 digits
        #[arg(long)]
        dni: String,
        /// Mobile number, 9 digits starting with 9
        #[arg(long)]
        celular: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirmation: String,
        /// Captcha response token (defaults to PORTAL_RECAPTCHA_TOKEN)
        #[arg(long)]
        captcha_token: Option<String>,
    },

    /// Show the member dashboard
    Dashboard,

    /// Account settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },

    /// Close the session
    Logout,

    /// Show the current session state
    Status,

    /// Resolve a portal path (e.g. /dashboard) against the session
    Open {
        path: String,
    },
}
