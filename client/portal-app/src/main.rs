//! portal - member portal client
//!
//! Keeps a signed-in session on this machine and drives the portal views
//! from the command line. Results are printed as JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! portal login --email ana@example.com --password 'Secreto1!'
//!
//! # Show the dashboard
//! portal dashboard --pretty
//!
//! # Change the phone number
//! portal settings set celular 987654321
//! ```

use portal_app::{Cli, Shell, apply_overrides, initialize_logger};
use portal_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = apply_overrides(&mut config, cli.api_url.clone(), cli.host.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let log_file = match log_file_path(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error preparing log directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = initialize_logger(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting portal v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let shell = match Shell::new(config) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    shell.start().await;

    match shell.run(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");

            if let Some(feedback) = e.feedback()
                && let Ok(json) = serde_json::to_string(&feedback)
            {
                eprintln!("{json}");
            }
            if let Some(route) = shell.navigator().take() {
                eprintln!("Redirect: {}", route.path());
            }

            ExitCode::FAILURE
        }
    }
}

/// `<config_dir>/<logging.dir>/<logging.file>`, when file logging is configured.
fn log_file_path(config: &Config) -> std::io::Result<Option<std::path::PathBuf>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let config_dir = Config::config_dir().map_err(std::io::Error::other)?;
    let log_dir = config_dir.join(&config.logging.dir);
    std::fs::create_dir_all(&log_dir)?;

    Ok(Some(log_dir.join(filename)))
}
