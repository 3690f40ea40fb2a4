//! JSON-RPC client for Helius-hosted Solana endpoints.
//!
//! Implements [`SolanaRpc`](super::SolanaRpc) over `reqwest` with a single
//! attempt per call, a bounded total timeout, and no idle connection reuse.

mod client;
mod connection;
mod headers;
mod protocol;

pub use client::HttpRpcClient;
pub use protocol::SIGNATURE_LIMIT;
