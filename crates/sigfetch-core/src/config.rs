//! Fetcher configuration.
//!
//! The API key and wallet address used to be process-wide literals; they are
//! now carried explicitly so the binary can source them from flags or the
//! environment and tests can point the client at a local mock server.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::CoreError;

/// How long a single request may take before it counts as failed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder credential shipped with the example; must be replaced.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_HELIUS_API_KEY";

/// Placeholder wallet shipped with the example; must be replaced.
pub const PLACEHOLDER_WALLET: &str = "EnterWalletAddressHere";

/// Solana cluster served by Helius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Network {
    #[default]
    Mainnet,
    Devnet,
}

impl Network {
    /// Base RPC URL for this cluster, without the API key.
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Mainnet => "https://mainnet.helius-rpc.com/",
            Self::Devnet => "https://devnet.helius-rpc.com/",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
        })
    }
}

impl FromStr for Network {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Self::Mainnet),
            "devnet" => Ok(Self::Devnet),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown network `{other}`; expected mainnet or devnet"
            ))),
        }
    }
}

/// Everything needed to build an RPC client for a signature fetch.
#[derive(Clone)]
pub struct FetcherConfig {
    pub api_key: String,
    pub network: Network,
    /// Full RPC URL replacing the network's Helius host. The API key is
    /// still appended as the `api-key` query parameter.
    pub rpc_url: Option<String>,
    pub timeout: Duration,
    /// Caller identifier sent as `X-Helius-Client` after sanitization.
    pub client_id: Option<String>,
}

impl FetcherConfig {
    /// Mainnet config with the default 10 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            network: Network::default(),
            rpc_url: None,
            timeout: DEFAULT_TIMEOUT,
            client_id: None,
        }
    }

    pub fn uses_placeholder_api_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }

    /// The base URL the client will talk to, before the key is appended.
    pub fn base_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.base_url())
    }
}

// Hand-written so the API key never ends up in logs or panic messages.
impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("api_key", &"***")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("timeout", &self.timeout)
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_to_mainnet_with_ten_second_timeout() {
        let config = FetcherConfig::new("key");
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url(), "https://mainnet.helius-rpc.com/");
        assert!(config.rpc_url.is_none());
        assert!(config.client_id.is_none());
    }

    #[test]
    fn rpc_url_override_replaces_network_host() {
        let config = FetcherConfig {
            network: Network::Devnet,
            rpc_url: Some("http://127.0.0.1:8899".to_owned()),
            ..FetcherConfig::new("key")
        };
        assert_eq!(config.base_url(), "http://127.0.0.1:8899");
    }

    #[test]
    fn network_parses_known_names() {
        assert_eq!("mainnet".parse::<Network>().expect("parse"), Network::Mainnet);
        assert_eq!(
            "Mainnet-Beta".parse::<Network>().expect("parse"),
            Network::Mainnet
        );
        assert_eq!(" devnet ".parse::<Network>().expect("parse"), Network::Devnet);
    }

    #[test]
    fn network_rejects_unknown_name() {
        let err = "testnet".parse::<Network>().expect_err("must reject testnet");
        assert!(err.to_string().contains("unknown network `testnet`"));
    }

    #[test]
    fn network_display_round_trips_through_from_str() {
        for network in [Network::Mainnet, Network::Devnet] {
            assert_eq!(network.to_string().parse::<Network>().expect("parse"), network);
        }
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = FetcherConfig::new("super-secret-key");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn placeholder_api_key_is_detected() {
        assert!(FetcherConfig::new(PLACEHOLDER_API_KEY).uses_placeholder_api_key());
        assert!(!FetcherConfig::new("real-key").uses_placeholder_api_key());
    }
}
