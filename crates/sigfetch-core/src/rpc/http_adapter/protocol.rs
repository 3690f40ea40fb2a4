use serde::Serialize;

pub(super) const JSONRPC_VERSION: &str = "2.0";

/// Fixed request id; every call is independent so it never needs to vary.
pub(super) const REQUEST_ID: &str = "helius-python-demo";

pub(super) const GET_SIGNATURES_FOR_ADDRESS: &str = "getSignaturesForAddress";

/// Number of signatures requested per call. Not configurable.
pub const SIGNATURE_LIMIT: u32 = 5;

#[derive(Serialize)]
pub(super) struct JsonRpcRequest<'a, P> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: &'static str,
    pub(super) method: &'a str,
    pub(super) params: P,
}

/// Options object for `getSignaturesForAddress`.
#[derive(Serialize)]
pub(super) struct SignaturesConfig {
    pub(super) limit: u32,
}

/// Positional params: `[<wallet>, {"limit": 5}]`.
pub(super) fn signatures_for_address_params(wallet: &str) -> (&str, SignaturesConfig) {
    (
        wallet,
        SignaturesConfig {
            limit: SIGNATURE_LIMIT,
        },
    )
}
