/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Pretty-printed JSON response on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nobitex_cli::{Cli, CliConfig, build_client, execute};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => {
            info!(config_path = %path.display(), "loading configuration");
            CliConfig::from_file(path).context("load config")?
        }
        None => CliConfig::default(),
    };

    let client = build_client(&config, args.token)?;
    info!(
        base_url = %client.base_url(),
        authenticated = client.credentials().is_some(),
        "client ready"
    );

    let response = execute(&client, args.command).await?;
    let rendered = serde_json::to_string_pretty(&response).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
