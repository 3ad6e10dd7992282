use anyhow::Result;
use async_trait::async_trait;

/// Capability to retrieve the response body for a URL.
///
/// The client depends on this instead of a concrete HTTP stack so tests can
/// inject canned bodies or failures. Implementations own their own timeout
/// and cancellation policy; the client imposes none.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Return the full response body for `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Production fetch implementation: a plain HTTP GET via `reqwest`.
///
/// No custom headers, no auth, no timeouts. Transport failures and non-2xx
/// statuses are reported as errors.
#[derive(Debug, Clone, Default)]
pub struct HttpFetch {
    client: reqwest::Client,
}

impl HttpFetch {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetch {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
