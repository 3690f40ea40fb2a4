use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::CoreError;

pub(super) const USER_AGENT: &str = concat!("sigfetch/", env!("CARGO_PKG_VERSION"));

pub(super) const CLIENT_HEADER: &str = "x-helius-client";

/// Strip everything outside printable ASCII and trim. Returns `None` when
/// nothing usable is left.
pub(super) fn sanitize_client_id(raw: &str) -> Option<String> {
    let printable: String = raw.chars().filter(|c| (' '..='~').contains(c)).collect();
    let trimmed = printable.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Headers sent with every request besides `User-Agent`.
pub(super) fn default_headers(client_id: Option<&str>) -> Result<HeaderMap, CoreError> {
    let mut headers = HeaderMap::new();
    if let Some(client_id) = client_id.and_then(sanitize_client_id) {
        let value = HeaderValue::from_str(&client_id)
            .map_err(|e| CoreError::InvalidConfig(format!("invalid client id: {e}")))?;
        headers.insert(CLIENT_HEADER, value);
    }
    Ok(headers)
}
