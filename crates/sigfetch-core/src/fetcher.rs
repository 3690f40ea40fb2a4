//! Fail-soft fetching of recent wallet signatures.
//!
//! [`TransactionFetcher::fetch_recent_transactions`] never returns an error:
//! any failed request is logged, reported on stdout, and collapsed into an
//! empty mapping. That makes "no data" and "request failed" look the same
//! to the caller; use [`TransactionFetcher::fetch_outcome`] when the
//! difference matters.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::FetcherConfig;
use crate::error::{CoreError, RequestFailure};
use crate::rpc::{HttpRpcClient, RpcResponse, SolanaRpc};

/// Result of one signature request, before the fail-soft collapse.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(RpcResponse),
    Failed(RequestFailure),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    /// Human-readable status line printed for this outcome.
    pub fn status_line(&self) -> String {
        match self {
            Self::Fetched(_) => "✅ Recent Transactions:".to_owned(),
            Self::Failed(err) => format!("❌ Request failed: {err}"),
        }
    }

    /// The decoded body, or an empty mapping if the request failed.
    pub fn into_map(self) -> RpcResponse {
        match self {
            Self::Fetched(body) => body,
            Self::Failed(_) => RpcResponse::new(),
        }
    }
}

/// Fetches the most recent transaction signatures for a wallet.
pub struct TransactionFetcher {
    rpc: Arc<dyn SolanaRpc>,
}

impl TransactionFetcher {
    pub fn new(rpc: Arc<dyn SolanaRpc>) -> Self {
        Self { rpc }
    }

    /// Build a fetcher backed by [`HttpRpcClient`].
    pub fn from_config(config: &FetcherConfig) -> Result<Self, CoreError> {
        Ok(Self::new(Arc::new(HttpRpcClient::new(config)?)))
    }

    /// Issue a single request and report which branch it took.
    pub async fn fetch_outcome(&self, wallet: &str) -> FetchOutcome {
        match self.rpc.get_signatures_for_address(wallet).await {
            Ok(body) => {
                info!(wallet, fields = body.len(), "fetched recent signatures");
                FetchOutcome::Fetched(body)
            }
            Err(err) => {
                warn!(
                    wallet,
                    timeout = err.is_timeout(),
                    error = %err,
                    "signature request failed"
                );
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Fetch recent signatures for `wallet`, printing a status line.
    ///
    /// Returns the decoded response body on success and an empty mapping on
    /// any failure.
    pub async fn fetch_recent_transactions(&self, wallet: &str) -> RpcResponse {
        let outcome = self.fetch_outcome(wallet).await;
        println!("{}", outcome.status_line());
        outcome.into_map()
    }
}
