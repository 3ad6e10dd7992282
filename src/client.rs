use anyhow::Result;
use tracing::debug;

use crate::fetch::{Fetch, HttpFetch};
use crate::types::{Priority, Violation};
use crate::url::service_url;

/// Depth value meaning "aggregate violations over the whole resource tree",
/// per the remote API's convention.
pub const DEPTH_UNBOUNDED: i32 = -1;

/// Client for the Sonar web service API.
///
/// Holds the API base URL (something like `http://localhost/sonar/api`) and
/// the fetch capability used for the actual HTTP round trip. One request per
/// call, no shared state between calls.
pub struct Client<F = HttpFetch> {
    api_base_url: String,
    fetch: F,
}

impl Client<HttpFetch> {
    /// Create a client that talks to the service over plain HTTP GET.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self::with_fetch(api_base_url, HttpFetch::new())
    }
}

impl<F: Fetch> Client<F> {
    /// Create a client with a custom fetch implementation.
    pub fn with_fetch(api_base_url: impl Into<String>, fetch: F) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            fetch,
        }
    }

    /// Query the violations reported for `resource`.
    ///
    /// `priorities` filters by severity and is sent comma-joined; `depth`
    /// controls server-side recursion into the resource's children and is
    /// passed through verbatim ([`DEPTH_UNBOUNDED`] for the whole tree).
    ///
    /// Example URL:
    /// `http://my.sonar.host/sonar/api/violations?resource=my%3Aresource&priorities=BLOCKER%2CCRITICAL&depth=-1`
    ///
    /// Violations are returned in response order. Transport failures and
    /// malformed response bodies propagate to the caller unchanged; no retry
    /// is attempted here.
    pub async fn violations(
        &self,
        resource: &str,
        priorities: &[Priority],
        depth: i32,
    ) -> Result<Vec<Violation>> {
        let priorities = priorities
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let depth = depth.to_string();
        let url = service_url(
            &self.api_base_url,
            "violations",
            &[
                ("resource", resource),
                ("priorities", &priorities),
                ("depth", &depth),
            ],
        );

        debug!("Calling sonar service {}", url);

        let body = self.fetch.fetch(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stub returning a canned body and recording the requested URL.
    struct CannedFetch {
        body: &'static str,
        requested: Mutex<Option<String>>,
    }

    impl CannedFetch {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                requested: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Fetch for CannedFetch {
        async fn fetch(&self, url: &str) -> Result<String> {
            *self.requested.lock().unwrap() = Some(url.to_string());
            Ok(self.body.to_string())
        }
    }

    struct FailingFetch;

    #[async_trait]
    impl Fetch for FailingFetch {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    const ONE_VIOLATION: &str = r#"[{
        "id": 1,
        "rule": {"name": "R"},
        "message": "M",
        "resource": {"key": "K", "name": "N"},
        "line": 42
    }]"#;

    #[tokio::test]
    async fn test_violations_maps_response() {
        let client = Client::with_fetch("http://host/api", CannedFetch::new(ONE_VIOLATION));
        let violations = client
            .violations("res", &[Priority::Blocker], DEPTH_UNBOUNDED)
            .await
            .unwrap();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].id, 1);
        assert_eq!(violations[0].message, "M");
        assert_eq!(violations[0].line, 42);
        assert_eq!(violations[0].rule.name, "R");
        assert_eq!(violations[0].resource.key, "K");
    }

    #[tokio::test]
    async fn test_violations_builds_query_url() {
        let fetch = CannedFetch::new("[]");
        let client = Client::with_fetch("http://host/api", fetch);
        client
            .violations("my:resource", &[Priority::Blocker, Priority::Critical], 2)
            .await
            .unwrap();

        let url = client.fetch.requested.lock().unwrap().clone().unwrap();
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(path, "http://host/api/violations");
        let pairs: Vec<&str> = query.split('&').collect();
        assert!(pairs.contains(&"resource=my%3Aresource"));
        assert!(pairs.contains(&"priorities=BLOCKER%2CCRITICAL"));
        assert!(pairs.contains(&"depth=2"));
        assert_eq!(pairs.len(), 3);
    }

    #[tokio::test]
    async fn test_violations_empty_response() {
        let client = Client::with_fetch("http://host/api", CannedFetch::new("[]"));
        let violations = client
            .violations("res", &[Priority::Blocker], DEPTH_UNBOUNDED)
            .await
            .unwrap();
        assert!(violations.is_empty());
    }

    #[tokio::test]
    async fn test_violations_propagates_transport_error() {
        let client = Client::with_fetch("http://host/api", FailingFetch);
        let err = client
            .violations("res", &[Priority::Blocker], DEPTH_UNBOUNDED)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_violations_malformed_body_is_error() {
        let client = Client::with_fetch("http://host/api", CannedFetch::new("{\"not\": \"an array\"}"));
        assert!(
            client
                .violations("res", &[Priority::Blocker], DEPTH_UNBOUNDED)
                .await
                .is_err()
        );
    }
}
