#![allow(dead_code)]

use portal_app::Shell;
use portal_config::{Config, HostSetting};
use portal_session::FileStorage;

use std::sync::Arc;

use tempfile::TempDir;

/// Browser-hosted shell against `base_url`, with its session file in `dir`.
pub fn shell(dir: &TempDir, base_url: &str) -> Shell {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.host.kind = HostSetting::Browser;

    Shell::with_storage(config, Arc::new(FileStorage::new(dir.path()))).unwrap()
}

pub fn valid_registration() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Ana"),
        ("email", "ana@example.com"),
        ("dni", "12345678"),
        ("celular", "987654321"),
        ("password", "Secreto1!"),
        ("password_confirmation", "Secreto1!"),
    ]
}
