//! Shared GET-and-parse helper used by both upstream clients.

use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{Error, Result};

/// Issue a single GET request and parse the response body as JSON.
///
/// The response status is checked before the body is read. A body that is
/// not valid JSON maps to [`Error::InvalidResponseBody`]; the parse error
/// itself is dropped. No retries are attempted; the timeout configured on
/// the client bounds a hung upstream call.
///
/// # Errors
///
/// Returns [`Error::Http`] on transport failure or a non-2xx status, and
/// [`Error::InvalidResponseBody`] when the body cannot be parsed.
pub(crate) async fn fetch_json(client: &Client, url: Url) -> Result<serde_json::Value> {
    debug!(url = %url, "issuing upstream GET");
    let response = client.get(url).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|_| Error::InvalidResponseBody)
}

/// Build a reqwest client with the shared timeout settings.
pub(crate) fn build_client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent("kitchenfinder/0.1")
        .build()?;
    Ok(client)
}

/// Parse a base URL, normalising it for later query-pair appends.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::InvalidEndpoint {
        url: raw.to_string(),
        message: format!("{e}"),
    })
}
