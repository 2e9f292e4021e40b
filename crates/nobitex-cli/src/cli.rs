/*
[INPUT]:  Parsed command line arguments and a configured client
[OUTPUT]: Raw JSON response for the selected endpoint
[POS]:    CLI layer - argument definitions and command dispatch
[UPDATE]: When adding subcommands or adapter endpoints
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nobitex_adapter::{Currency, NobitexClient, OhlcvQuery, Resolution, Symbol, TradeType};
use serde_json::Value;
use tracing::info;

use crate::config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "nobitex", version, about = "Query the Nobitex REST API")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Overrides `api_token` from the config file
    #[arg(long = "token", value_name = "TOKEN")]
    pub token: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Order book for a symbol (`all` for every market)
    OrderBook { symbol: Symbol },
    /// Market depth for a symbol
    Depth { symbol: Symbol },
    /// Latest trades for a symbol
    Trades { symbol: Symbol },
    /// Market stats, e.g. `stats --src btc,eth --dst rls`
    Stats {
        #[arg(long, value_delimiter = ',', required = true)]
        src: Vec<Currency>,
        #[arg(long)]
        dst: Currency,
    },
    /// OHLCV candles
    Ohlcv {
        symbol: Symbol,
        #[arg(long, default_value = "60")]
        resolution: Resolution,
        #[arg(long)]
        from: i64,
        #[arg(long)]
        to: i64,
        #[arg(long, default_value_t = 0)]
        countback: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Global market stats
    GlobalStats,
    /// User profile (token required)
    Profile,
    /// User limitations (token required)
    Limitations,
    /// Wallet balances (token required)
    Wallets {
        #[arg(long = "currency", value_delimiter = ',')]
        currencies: Vec<Currency>,
        #[arg(long = "type", default_value = "spot")]
        wallet_type: TradeType,
    },
    /// Full wallet list (token required)
    WalletList {
        #[arg(long = "type", default_value = "spot")]
        wallet_type: TradeType,
    },
    /// Generate a deposit address (token required)
    GenerateAddress { currency: Currency },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::OrderBook { .. } => "order-book",
            Command::Depth { .. } => "depth",
            Command::Trades { .. } => "trades",
            Command::Stats { .. } => "stats",
            Command::Ohlcv { .. } => "ohlcv",
            Command::GlobalStats => "global-stats",
            Command::Profile => "profile",
            Command::Limitations => "limitations",
            Command::Wallets { .. } => "wallets",
            Command::WalletList { .. } => "wallet-list",
            Command::GenerateAddress { .. } => "generate-address",
        }
    }
}

/// Build a client from the file config, letting `--token` win over the file
pub fn build_client(config: &CliConfig, token_override: Option<String>) -> Result<NobitexClient> {
    let client = NobitexClient::with_config_and_base_url(config.client_config(), &config.base_url)
        .context("build nobitex client")?;

    match token_override.or_else(|| config.api_token.clone()) {
        Some(token) => Ok(client.with_token(token)),
        None => Ok(client),
    }
}

pub async fn execute(client: &NobitexClient, command: Command) -> Result<Value> {
    let name = command.name();
    info!(command = name, "executing");

    let response = match command {
        Command::OrderBook { symbol } => client.get_order_book(symbol).await,
        Command::Depth { symbol } => client.get_market_depth(symbol).await,
        Command::Trades { symbol } => client.get_trades(symbol).await,
        Command::Stats { src, dst } => client.get_market_stats(&src, dst).await,
        Command::Ohlcv {
            symbol,
            resolution,
            from,
            to,
            countback,
            page,
        } => {
            let query = OhlcvQuery::new(symbol, resolution, from, to, countback).page(page);
            client.ohlcv(query).await
        }
        Command::GlobalStats => client.get_global_market_stats().await,
        Command::Profile => client.get_user_profile().await,
        Command::Limitations => client.get_user_limitations().await,
        Command::Wallets {
            currencies,
            wallet_type,
        } => client.get_wallets(&currencies, wallet_type).await,
        Command::WalletList { wallet_type } => client.get_wallet_list(wallet_type).await,
        Command::GenerateAddress { currency } => client.generate_wallet_address(currency).await,
    };

    response.with_context(|| format!("{name} request failed"))
}
