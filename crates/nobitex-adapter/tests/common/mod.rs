/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for nobitex-adapter tests

use nobitex_adapter::{ClientConfig, NobitexClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn mock_client(server: &MockServer) -> NobitexClient {
    NobitexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Mock API token for testing
pub fn mock_api_token() -> String {
    "0123456789abcdef0123456789abcdef01234567".to_string()
}
