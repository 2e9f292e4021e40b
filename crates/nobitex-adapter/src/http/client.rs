/*
[INPUT]:  HTTP configuration (base URL, timeouts, bot identity, API token)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{NobitexError, Result};
use crate::types::Endpoint;

/// Base URL for the Nobitex REST API
pub const REST_API_BASE_URL: &str = "https://api.nobitex.ir";

const DEFAULT_BOT_NAME: &str = "WrapperBot";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Identify as an automated client (`User-Agent: TraderBot/<bot_name>`)
    pub bot_mode: bool,
    pub bot_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            bot_mode: true,
            bot_name: DEFAULT_BOT_NAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// User agent sent with every request, if bot mode is on
    pub fn user_agent(&self) -> Option<String> {
        self.bot_mode.then(|| format!("TraderBot/{}", self.bot_name))
    }
}

/// Credentials for authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
}

impl Credentials {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Nobitex API
#[derive(Debug)]
pub struct NobitexClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl NobitexClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, REST_API_BASE_URL)
    }

    /// Create a client against an alternative host (mirrors, mock servers)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        if config.bot_mode && config.bot_name.trim().is_empty() {
            return Err(NobitexError::Config(
                "bot_name must not be empty when bot_mode is enabled".to_string(),
            ));
        }

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }

        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(NobitexError::Config(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url,
            credentials: None,
        })
    }

    /// Attach an API token, consuming the client
    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.set_credentials(Credentials::new(api_token));
        self
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for a path, keeping any path prefix of the base URL
    /// (`https://host/mirror` + `/v2/wallets` → `https://host/mirror/v2/wallets`).
    pub(crate) fn endpoint_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let prefix = self.base_url.path().trim_end_matches('/');
        url.set_path(&format!("{prefix}{path}"));
        url
    }

    fn api_token(&self) -> Result<&str> {
        self.credentials
            .as_ref()
            .map(|c| c.api_token.trim())
            .filter(|t| !t.is_empty())
            .ok_or(NobitexError::MissingToken)
    }

    /// Build request builder for an endpoint without a trailing segment
    pub(crate) fn request(&self, method: Method, endpoint: Endpoint) -> Result<RequestBuilder> {
        self.request_with_segment(method, endpoint, "")
    }

    /// Build request builder for `endpoint.path()` followed by `segment`.
    ///
    /// Endpoints that require a token get the `Authorization: Token ...`
    /// header; without a non-empty token this fails before any I/O.
    pub(crate) fn request_with_segment(
        &self,
        method: Method,
        endpoint: Endpoint,
        segment: &str,
    ) -> Result<RequestBuilder> {
        let token = if endpoint.requires_token() {
            Some(self.api_token()?)
        } else {
            None
        };

        let path = endpoint.path_with(segment);
        let url = self.endpoint_url(&path);
        debug!(method = %method, path = %path, authenticated = token.is_some(), "nobitex request");

        let builder = self.http_client.request(method, url);
        Ok(match token {
            Some(token) => builder.header(AUTHORIZATION, format!("Token {token}")),
            None => builder,
        })
    }

    /// Send a request and decode the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "nobitex response");

        if !status.is_success() {
            let message = response.text().await?;
            return Err(NobitexError::api_error(status, message));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent().as_deref(), Some("TraderBot/WrapperBot"));
    }

    #[test]
    fn test_user_agent_disabled_outside_bot_mode() {
        let config = ClientConfig {
            bot_mode: false,
            ..ClientConfig::default()
        };
        assert_eq!(config.user_agent(), None);
    }

    #[test]
    fn test_empty_bot_name_rejected() {
        let config = ClientConfig {
            bot_name: "  ".to_string(),
            ..ClientConfig::default()
        };
        let err = NobitexClient::with_config(config).unwrap_err();
        assert!(matches!(err, NobitexError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = NobitexClient::with_config_and_base_url(ClientConfig::default(), "not a url")
            .unwrap_err();
        assert!(matches!(err, NobitexError::UrlParse(_)));
    }

    #[test]
    fn test_token_endpoints_require_token() {
        let client = NobitexClient::new().unwrap();
        for endpoint in Endpoint::VARIANTS.iter().copied() {
            let result = client.request(Method::GET, endpoint);
            if endpoint.requires_token() {
                assert!(
                    matches!(result, Err(NobitexError::MissingToken)),
                    "{endpoint:?} built without a token"
                );
            } else {
                assert!(result.is_ok(), "{endpoint:?} should be public");
            }
        }

        let client = client.with_token("   ");
        assert!(client.request(Method::GET, Endpoint::UserProfile).is_err());
    }

    #[test]
    fn test_token_endpoints_carry_authorization_header() {
        let client = NobitexClient::new().unwrap().with_token("abc");
        let request = client
            .request(Method::GET, Endpoint::Wallets)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Token abc");

        let request = client
            .request_with_segment(Method::GET, Endpoint::Trades, "BTCIRT")
            .unwrap()
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let root =
            NobitexClient::with_config_and_base_url(ClientConfig::default(), "https://api.nobitex.ir")
                .unwrap();
        assert_eq!(
            root.endpoint_url("/v2/depth/BTCIRT").as_str(),
            "https://api.nobitex.ir/v2/depth/BTCIRT"
        );

        for base in ["https://mirror.example/nobitex", "https://mirror.example/nobitex/"] {
            let client =
                NobitexClient::with_config_and_base_url(ClientConfig::default(), base).unwrap();
            assert_eq!(
                client.endpoint_url("/market/stats").as_str(),
                "https://mirror.example/nobitex/market/stats"
            );
        }
    }

    #[test]
    fn test_opaque_base_url_rejected() {
        let err =
            NobitexClient::with_config_and_base_url(ClientConfig::default(), "mailto:ops@nobitex.ir")
                .unwrap_err();
        assert!(matches!(err, NobitexError::Config(_)));
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let credentials = Credentials::new("secret-token");
        let printed = format!("{credentials:?}");
        assert!(!printed.contains("secret-token"));
    }
}
