use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Member portal client: sign in, register and manage your account")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend API base URL (overrides config and PORTAL_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Host runtime: auto, browser or desktop
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
