use crate::ApiClient;
use crate::tests::NoSession;

use portal_config::{ApiConfig, HostKind};

use std::sync::Arc;

fn config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new(
        &config("http://localhost:8000/api/"),
        HostKind::Browser,
        Arc::new(NoSession),
    )
    .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = ApiClient::new(
        &config("http://localhost:8000/api"),
        HostKind::Browser,
        Arc::new(NoSession),
    )
    .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000/api");
}

#[test]
fn test_host_kind_stored() {
    let client = ApiClient::new(
        &config("http://localhost:8000/api"),
        HostKind::Desktop,
        Arc::new(NoSession),
    )
    .unwrap();
    assert_eq!(client.host(), HostKind::Desktop);
}
