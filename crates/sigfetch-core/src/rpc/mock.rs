use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::RequestFailure;

use super::{RpcResponse, SolanaRpc};

enum MockReply {
    Body(RpcResponse),
    Status(StatusCode),
    Undecodable(String),
}

/// A mock Solana RPC backend that returns one canned reply for every call
/// and records the wallets it was asked about.
pub struct MockRpc {
    reply: MockReply,
    requested: Mutex<Vec<String>>,
}

impl MockRpc {
    pub fn responding(body: serde_json::Value) -> Self {
        let body = match body {
            serde_json::Value::Object(map) => map,
            other => panic!("mock body must be a JSON object, got {other}"),
        };
        Self::with_reply(MockReply::Body(body))
    }

    pub fn failing_with_status(status: StatusCode) -> Self {
        Self::with_reply(MockReply::Status(status))
    }

    pub fn undecodable(message: &str) -> Self {
        Self::with_reply(MockReply::Undecodable(message.to_owned()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_wallets(&self) -> Vec<String> {
        self.requested.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl SolanaRpc for MockRpc {
    async fn get_signatures_for_address(
        &self,
        wallet: &str,
    ) -> Result<RpcResponse, RequestFailure> {
        self.requested
            .lock()
            .expect("mock lock poisoned")
            .push(wallet.to_owned());

        match &self.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::Status(status) => Err(RequestFailure::Status { status: *status }),
            MockReply::Undecodable(message) => Err(RequestFailure::Decode(message.clone())),
        }
    }
}
