use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use super::types::Item;

use crate::core::config::ResolvedConfig;

/// Per-request timeout. The dashboard loop itself never times out a fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while fetching content.
#[derive(Debug)]
pub enum FetchError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server returned a non-success status.
    Api { status: u16, message: String },
    /// Failed to parse the response body.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// A source of display items for a content panel.
///
/// Everything a fetch needs comes in through `config`; providers hold no
/// state between draws apart from their HTTP client.
pub trait ContentProvider {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Panel title, e.g. `BLOGS:`.
    fn title(&self) -> &str;

    /// Page the panel title links to.
    fn title_url(&self, config: &ResolvedConfig) -> String;

    /// Fetches the current items. Blocks until the request completes or fails.
    fn fetch(&self, config: &ResolvedConfig) -> Result<Vec<Item>, FetchError>;
}

/// Builds the blocking client shared by the HTTP providers.
pub(crate) fn http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("fterm/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!("Falling back to default HTTP client: {}", e);
            reqwest::blocking::Client::new()
        })
}

/// Sends `request` and returns the body text of a successful response.
pub(crate) fn get_text(
    provider: &str,
    request: reqwest::blocking::RequestBuilder,
) -> Result<String, FetchError> {
    let response = request
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    info!("{} response: {} from {}", provider, status, response.url());

    if !status.is_success() {
        let message = response
            .text()
            .unwrap_or_else(|_| "unknown error".to_string());
        warn!("{} API error: {} - {}", provider, status.as_u16(), message);
        return Err(FetchError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Network(e.to_string()))?;
    debug!("{} body: {} bytes", provider, body.len());
    Ok(body)
}
