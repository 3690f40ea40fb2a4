use async_trait::async_trait;
use reqwest::{header, Url};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::FetcherConfig;
use crate::error::{CoreError, RequestFailure};

use super::super::{RpcResponse, SolanaRpc};
use super::connection::{build_endpoint, redact_endpoint};
use super::headers::{default_headers, USER_AGENT};
use super::protocol::{
    signatures_for_address_params, JsonRpcRequest, GET_SIGNATURES_FOR_ADDRESS, JSONRPC_VERSION,
    REQUEST_ID,
};

/// Solana JSON-RPC client over HTTP(S).
///
/// Every call is a single POST with no retries. Idle connections are not
/// pooled, so the socket is released once the response has been read or
/// dropped on an error path.
pub struct HttpRpcClient {
    client: reqwest::Client,
    endpoint: Url,
    /// Endpoint with the API key masked; the only form that gets logged.
    redacted_endpoint: String,
}

impl HttpRpcClient {
    /// Create a client from `config`.
    ///
    /// The endpoint is `config.rpc_url` when set, otherwise the Helius host
    /// for `config.network`; the API key is appended as `api-key`.
    pub fn new(config: &FetcherConfig) -> Result<Self, CoreError> {
        if config.timeout.is_zero() {
            return Err(CoreError::InvalidConfig(
                "request timeout must be greater than zero".to_owned(),
            ));
        }
        let endpoint = build_endpoint(config.base_url(), &config.api_key)?;
        let redacted_endpoint = redact_endpoint(&endpoint);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(config.client_id.as_deref())?)
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("build HTTP client: {e}")))?;

        debug!(endpoint = %redacted_endpoint, timeout = ?config.timeout, "rpc client ready");

        Ok(Self {
            client,
            endpoint,
            redacted_endpoint,
        })
    }

    /// Endpoint URL with the API key masked.
    pub fn endpoint_redacted(&self) -> &str {
        &self.redacted_endpoint
    }

    async fn rpc_call<P>(&self, method: &str, params: P) -> Result<RpcResponse, RequestFailure>
    where
        P: Serialize + Send + Sync,
    {
        debug!(
            rpc.id = REQUEST_ID,
            rpc.method = method,
            endpoint = %self.redacted_endpoint,
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        };

        // `without_url` keeps the API key out of error messages.
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req)
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(e.without_url()))?;
        let status = response.status();
        if !status.is_success() {
            debug!(rpc.method = method, %status, "rpc call rejected");
            return Err(RequestFailure::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RequestFailure::Transport(e.without_url()))?;
        debug!(rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = method, body = %body, "rpc response body");

        serde_json::from_str(&body)
            .map_err(|e| RequestFailure::Decode(format!("decode JSON-RPC response: {e}")))
    }
}

#[async_trait]
impl SolanaRpc for HttpRpcClient {
    async fn get_signatures_for_address(
        &self,
        wallet: &str,
    ) -> Result<RpcResponse, RequestFailure> {
        self.rpc_call(
            GET_SIGNATURES_FOR_ADDRESS,
            signatures_for_address_params(wallet),
        )
        .await
    }
}
