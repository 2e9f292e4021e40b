/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{mock_api_token, mock_client, setup_mock_server};
use nobitex_adapter::{
    ClientConfig, Credentials, Currency, NobitexClient, NobitexError, REST_API_BASE_URL, Symbol,
    TradeType,
};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(NobitexClient::new());
    assert_eq!(client.base_url().as_str(), format!("{REST_API_BASE_URL}/"));
    assert!(client.credentials().is_none());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        bot_name: "ArbBot".to_string(),
        ..ClientConfig::default()
    };
    let _client = assert_ok!(NobitexClient::with_config(config));
}

#[test]
fn test_client_credentials_roundtrip() {
    let mut client = assert_ok!(NobitexClient::new());
    let credentials = Credentials::new(mock_api_token());

    client.set_credentials(credentials.clone());
    let stored = client.credentials().expect("credentials should be set");

    assert_eq!(stored, &credentials);
}

#[tokio::test]
async fn test_custom_bot_name_sent_as_user_agent() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/trades/BTCUSDT"))
        .and(header("user-agent", "TraderBot/ArbBot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        bot_name: "ArbBot".to_string(),
        ..ClientConfig::default()
    };
    let client = assert_ok!(NobitexClient::with_config_and_base_url(config, &server.uri()));
    let body = assert_ok!(client.get_trades(Symbol::BtcUsdt).await);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_user_endpoints_fail_without_token() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);

    let err = client.get_user_profile().await.unwrap_err();
    assert!(matches!(err, NobitexError::MissingToken));
    assert!(err.is_auth_error());

    let err = client
        .get_wallets(&[Currency::Btc], TradeType::Spot)
        .await
        .unwrap_err();
    assert!(matches!(err, NobitexError::MissingToken));
}

#[tokio::test]
async fn test_non_success_status_maps_to_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid token."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server).with_token(mock_api_token());
    let err = client.get_user_profile().await.unwrap_err();

    match &err {
        NobitexError::Api { code, message } => {
            assert_eq!(*code, 401);
            assert!(message.contains("Invalid token."));
        }
        other => panic!("Expected Api error variant, got {other:?}"),
    }
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_failed_status_in_body_is_passed_through() {
    let server = setup_mock_server().await;
    let failed = json!({
        "status": "failed",
        "code": "InvalidSymbol",
        "message": "Invalid symbol"
    });
    Mock::given(method("GET"))
        .and(path("/v2/depth/GMTUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&failed))
        .expect(1)
        .mount(&server)
        .await;

    let body = assert_ok!(mock_client(&server).get_market_depth(Symbol::GmtUsdt).await);
    assert_eq!(body, failed);
}

#[tokio::test]
async fn test_invalid_json_maps_to_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/market/global-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = mock_client(&server)
        .get_global_market_stats()
        .await
        .unwrap_err();
    assert!(matches!(err, NobitexError::Serialization(_)));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/mirror/v2/orderbook/BTCIRT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(2)
        .mount(&server)
        .await;

    for base in [format!("{}/mirror", server.uri()), format!("{}/mirror/", server.uri())] {
        let client = assert_ok!(NobitexClient::with_config_and_base_url(
            ClientConfig::default(),
            &base
        ));
        let body = assert_ok!(client.get_order_book(Symbol::BtcIrt).await);
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
async fn test_error_status_with_empty_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/market/stats"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = mock_client(&server)
        .get_market_stats(&[Currency::Usdt], Currency::Rls)
        .await
        .unwrap_err();
    match err {
        NobitexError::Api { code, message } => {
            assert_eq!(code, 503);
            assert!(message.is_empty());
        }
        other => panic!("Expected Api error variant, got {other:?}"),
    }
}
