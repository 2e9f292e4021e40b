/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed CLI configuration and adapter ClientConfig
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use nobitex_adapter::{ClientConfig, REST_API_BASE_URL};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API token for user endpoints
    #[serde(default)]
    pub api_token: Option<String>,
    /// REST base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Send `TraderBot/<bot_name>` as user agent
    #[serde(default = "default_bot_mode")]
    pub bot_mode: bool,
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_base_url(),
            bot_mode: default_bot_mode(),
            bot_name: default_bot_name(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl CliConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            bot_mode: self.bot_mode,
            bot_name: self.bot_name.clone(),
        }
    }
}

fn default_base_url() -> String {
    REST_API_BASE_URL.to_string()
}

fn default_bot_mode() -> bool {
    true
}

fn default_bot_name() -> String {
    "WrapperBot".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
