use reqwest::Url;

use crate::error::CoreError;

const API_KEY_PARAM: &str = "api-key";
const REDACTED: &str = "***";

/// Parse `base` and attach the API key as the `api-key` query parameter.
///
/// Any `api-key` already present in `base` is replaced; other query
/// parameters are kept in order.
pub(super) fn build_endpoint(base: &str, api_key: &str) -> Result<Url, CoreError> {
    let mut url = Url::parse(base).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid rpc url `{base}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CoreError::InvalidConfig(format!(
                "unsupported rpc url scheme `{other}`; expected http or https"
            )));
        }
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != API_KEY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(API_KEY_PARAM, api_key);

    Ok(url)
}

/// Render `url` with the API key masked, for logs.
pub(super) fn redact_endpoint(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == API_KEY_PARAM {
                REDACTED.to_owned()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}
