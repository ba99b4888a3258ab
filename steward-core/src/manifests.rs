//! Manifest retrieval from the control API.
//!
//! The desired set of stacks lives behind a small HTTP API; one GET returns
//! every manifest this host should be running.

use crate::error::{Result, StewardError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// A named compose document fetched from the control API.
///
/// The API returns additional bookkeeping fields (`id`, timestamps) that are
/// irrelevant to reconciliation and ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Stack name; the sole correlation key against runtime state.
    pub name: String,
    /// Opaque compose document content.
    #[serde(rename = "manifest")]
    pub content: String,
}

/// Source of the desired manifest set.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the full desired set, in API response order.
    async fn fetch_manifests(&self) -> Result<Vec<Manifest>>;
}

/// HTTP-backed manifest source.
pub struct HttpManifestSource {
    api_root: String,
    client: reqwest::Client,
}

impl HttpManifestSource {
    /// Create a source rooted at the given API base URL.
    pub fn new(api_root: impl Into<String>) -> Self {
        Self { api_root: api_root.into(), client: reqwest::Client::new() }
    }

    fn manifests_url(&self) -> String {
        format!("{}/manifests", self.api_root.trim_end_matches('/'))
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    async fn fetch_manifests(&self) -> Result<Vec<Manifest>> {
        let url = self.manifests_url();

        let response = self.client.get(&url).send().await.map_err(|e| {
            StewardError::FetchFailed { url: url.clone(), reason: e.to_string() }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StewardError::FetchFailed {
                url,
                reason: format!("HTTP {}", status),
            });
        }

        let manifests: Vec<Manifest> = response.json().await.map_err(|e| {
            StewardError::FetchFailed { url: url.clone(), reason: format!("invalid body: {}", e) }
        })?;

        debug!("Fetched {} manifests from {}", manifests.len(), url);
        Ok(manifests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifests_url_joins_base() {
        let source = HttpManifestSource::new("http://localhost:3000");
        assert_eq!(source.manifests_url(), "http://localhost:3000/manifests");

        let source = HttpManifestSource::new("http://localhost:3000/");
        assert_eq!(source.manifests_url(), "http://localhost:3000/manifests");
    }

    #[test]
    fn test_manifest_decodes_api_shape() {
        let body = r#"[
            {
                "id": "65f0c0ffee",
                "name": "web",
                "manifest": "services:\n web:\n  image: nginx",
                "createdAt": "2024-03-01T00:00:00.000Z",
                "updatedAt": "2024-03-01T00:00:00.000Z"
            }
        ]"#;

        let manifests: Vec<Manifest> = serde_json::from_str(body).unwrap();
        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].name, "web");
        assert_eq!(manifests[0].content, "services:\n web:\n  image: nginx");
    }

    #[test]
    fn test_manifest_requires_name_and_content() {
        let body = r#"[{"name": "web"}]"#;
        assert!(serde_json::from_str::<Vec<Manifest>>(body).is_err());
    }
}
