//! Solana RPC abstraction layer.
//!
//! Defines the [`SolanaRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::{HttpRpcClient, SIGNATURE_LIMIT};

use async_trait::async_trait;

use crate::error::RequestFailure;

/// Decoded JSON-RPC response body. Treated opaquely: no schema is enforced
/// beyond it being a JSON object.
pub type RpcResponse = serde_json::Map<String, serde_json::Value>;

/// The Solana RPC methods sigfetch needs.
#[async_trait]
pub trait SolanaRpc: Send + Sync {
    /// Request the most recent signatures for `wallet` in a single attempt.
    ///
    /// The wallet is passed through unvalidated.
    async fn get_signatures_for_address(&self, wallet: &str)
        -> Result<RpcResponse, RequestFailure>;
}
