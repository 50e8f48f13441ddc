use crate::{CaptchaProvider, StaticCaptcha};

use portal_config::CaptchaConfig;

#[tokio::test]
async fn given_static_token_when_requested_then_returned() {
    let captcha = StaticCaptcha::new("captcha-ok");

    assert_eq!(captcha.token("register").await.unwrap(), "captcha-ok");
}

#[tokio::test]
async fn given_blank_token_when_requested_then_error() {
    let captcha = StaticCaptcha::new("   ");

    assert!(captcha.token("register").await.is_err());
}

#[test]
fn given_config_without_token_when_built_then_no_provider() {
    assert!(StaticCaptcha::from_config(&CaptchaConfig::default()).is_none());

    let blank = CaptchaConfig {
        token: Some(" ".to_string()),
        ..Default::default()
    };
    assert!(StaticCaptcha::from_config(&blank).is_none());
}

#[tokio::test]
async fn given_config_with_token_when_built_then_provider_returns_it() {
    let config = CaptchaConfig {
        token: Some("from-env".to_string()),
        ..Default::default()
    };

    let provider = StaticCaptcha::from_config(&config).unwrap();

    assert_eq!(provider.token(&config.action).await.unwrap(), "from-env");
}
