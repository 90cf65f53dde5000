//! Client for the remote character catalog.
//!
//! One HTTP GET against a fixed endpoint returning the paginated catalog
//! document. Only the first page's `results` is consumed; the pagination
//! links are never followed.

use async_trait::async_trait;

use roster_core::RemotePage;

/// Default catalog endpoint.
pub const CHARACTER_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// Errors from the remote catalog layer. Always non-fatal for the engine:
/// a failed fetch leaves the cached dataset untouched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (network, DNS, TLS) or the response
    /// body did not decode as a catalog page.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("remote catalog error ({status}): {body}")]
    Status {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Capability that retrieves the remote dataset.
#[async_trait]
pub trait RemoteSource {
    async fn fetch(&self) -> Result<RemotePage, FetchError>;
}

/// HTTP-backed catalog source.
pub struct HttpRemoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRemoteSource {
    pub fn new() -> Self {
        Self::with_endpoint(CHARACTER_ENDPOINT.to_string())
    }

    /// Point the source at a non-default endpoint (local mirrors, tests).
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl Default for HttpRemoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteSource for HttpRemoteSource {
    async fn fetch(&self) -> Result<RemotePage, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<RemotePage>().await?)
    }
}
