mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;

use sigfetch_core::config::PLACEHOLDER_WALLET;
use sigfetch_core::{FetcherConfig, TransactionFetcher};

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the status line and result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = build_config(&args);
    if config.uses_placeholder_api_key() {
        tracing::warn!("using the placeholder API key; set --api-key or HELIUS_API_KEY");
    }
    if args.wallet == PLACEHOLDER_WALLET {
        tracing::warn!("using the placeholder wallet; set --wallet or SIGFETCH_WALLET");
    }

    let fetcher = TransactionFetcher::from_config(&config).context("build RPC client")?;
    tracing::info!(network = %config.network, wallet = %args.wallet, "fetching recent signatures");

    let data = fetcher.fetch_recent_transactions(&args.wallet).await;
    let rendered = serde_json::to_string_pretty(&serde_json::Value::Object(data))
        .context("render response as JSON")?;
    println!("{rendered}");

    Ok(())
}

fn build_config(args: &cli::Cli) -> FetcherConfig {
    FetcherConfig {
        api_key: args.api_key.clone(),
        network: args.network,
        rpc_url: args.rpc_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        client_id: args.client_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigfetch_core::Network;

    #[test]
    fn build_config_carries_cli_values() {
        let args = cli::Cli::try_parse_from([
            "sigfetch",
            "--api-key",
            "k",
            "--network",
            "devnet",
            "--rpc-url",
            "http://127.0.0.1:8899",
            "--timeout-secs",
            "7",
        ])
        .expect("flags must parse");

        let config = build_config(&args);

        assert_eq!(config.api_key, "k");
        assert_eq!(config.network, Network::Devnet);
        assert_eq!(config.base_url(), "http://127.0.0.1:8899");
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert!(config.client_id.is_none());
    }
}
