use reqwest::StatusCode;

/// Errors raised while constructing the RPC client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A single outbound RPC call that did not produce a usable JSON object.
///
/// Every variant is the same failure from the caller's point of view; the
/// variants only exist so logs can say what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    #[error("HTTP transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: StatusCode },

    #[error("undecodable response body: {0}")]
    Decode(String),
}

impl RequestFailure {
    /// Whether the request ran past its configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
