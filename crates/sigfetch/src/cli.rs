use clap::Parser;
use sigfetch_core::config::{PLACEHOLDER_API_KEY, PLACEHOLDER_WALLET};
use sigfetch_core::Network;

/// sigfetch — print the most recent transaction signatures for a Solana wallet.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Helius API key, appended to the RPC URL as `api-key`.
    #[arg(long, env = "HELIUS_API_KEY", default_value = PLACEHOLDER_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Wallet address to query. Passed through unvalidated.
    #[arg(long, env = "SIGFETCH_WALLET", default_value = PLACEHOLDER_WALLET)]
    pub wallet: String,

    /// Helius cluster (`mainnet` or `devnet`).
    #[arg(long, env = "SIGFETCH_NETWORK", default_value = "mainnet")]
    pub network: Network,

    /// Full RPC URL replacing the Helius host (the API key is still appended).
    #[arg(long, env = "SIGFETCH_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Seconds to wait for the RPC response before giving up.
    #[arg(long, env = "SIGFETCH_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    /// Caller identifier sent as `X-Helius-Client`.
    #[arg(long, env = "SIGFETCH_CLIENT_ID")]
    pub client_id: Option<String>,
}
