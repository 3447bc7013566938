//! HTTP client for the Groupie Trackers API.
//!
//! # Responsibilities
//! - Resolve sub-resource URLs (from the index, or derived from the base URL)
//! - GET a resource, read the full body, decode it as JSON
//! - Report which stage failed and for which resource
//!
//! # Design Decisions
//! - One shared `reqwest::Client` (connection pool), no per-call state
//! - No retries; the first failure ends the request
//! - The body is read before decoding so read and decode failures stay distinct

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{ApiIndex, Artist, RelationIndex, RelationRecord, Resource};

/// Errors raised while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("upstream client could not be built: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or no response arrived.
    #[error("{resource} request failed: {source}")]
    Fetch {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read in full.
    #[error("{resource} body could not be read: {source}")]
    Read {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    /// The body is not JSON of the expected shape.
    #[error("{resource} response could not be decoded: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// The resource involved, if the failure happened during a call.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            UpstreamError::Client(_) => None,
            UpstreamError::Fetch { resource, .. }
            | UpstreamError::Read { resource, .. }
            | UpstreamError::Decode { resource, .. } => Some(*resource),
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Client for the artist API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    discover_endpoints: bool,
}

impl UpstreamClient {
    /// Create a client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(UpstreamError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            discover_endpoints: config.discover_endpoints,
        })
    }

    /// Resolve sub-resource URLs.
    pub async fn index(&self) -> UpstreamResult<ApiIndex> {
        if !self.discover_endpoints {
            return Ok(ApiIndex::derived(&self.base_url));
        }
        self.get_json(Resource::Index, &self.base_url).await
    }

    /// Fetch the full artist list.
    pub async fn artists(&self, index: &ApiIndex) -> UpstreamResult<Vec<Artist>> {
        self.get_json(Resource::Artists, &index.artists).await
    }

    /// Fetch every artist's relation record.
    pub async fn relations(&self, index: &ApiIndex) -> UpstreamResult<Vec<RelationRecord>> {
        let relations: RelationIndex = self.get_json(Resource::Relations, &index.relation).await?;
        Ok(relations.index)
    }

    /// Index then artists, for the list page.
    pub async fn artist_list(&self) -> UpstreamResult<Vec<Artist>> {
        let index = self.index().await?;
        self.artists(&index).await
    }

    /// Index, then artists and relations fetched concurrently.
    ///
    /// Fails as soon as either fetch fails.
    pub async fn artists_with_relations(
        &self,
    ) -> UpstreamResult<(Vec<Artist>, Vec<RelationRecord>)> {
        let index = self.index().await?;
        tokio::try_join!(self.artists(&index), self.relations(&index))
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource, url: &str) -> UpstreamResult<T> {
        let start = Instant::now();
        tracing::debug!(resource = %resource, url = %url, "Fetching upstream resource");

        let result = self.fetch_and_decode(resource, url).await;

        match &result {
            Ok(_) => {
                tracing::debug!(
                    resource = %resource,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream resource fetched"
                );
                metrics::record_upstream(resource, "ok", start);
            }
            Err(e) => {
                tracing::warn!(resource = %resource, url = %url, error = %e, "Upstream fetch failed");
                metrics::record_upstream(resource, "error", start);
            }
        }

        result
    }

    async fn fetch_and_decode<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
    ) -> UpstreamResult<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Fetch { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            // The body is still decoded; an error page will surface as a decode failure.
            tracing::warn!(resource = %resource, status = %status, "Upstream returned non-success status");
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Read { resource, source })?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { resource, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Write `response` verbatim to every connection, then close it.
    async fn serve_raw(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let response = response.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        format!("http://{}/api", addr)
    }

    async fn serve_fixed(body: &'static str) -> String {
        serve_raw(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ))
        .await
    }

    fn client_for(base_url: String, discover_endpoints: bool) -> UpstreamClient {
        UpstreamClient::new(&UpstreamConfig {
            base_url,
            discover_endpoints,
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_derived_index_makes_no_call() {
        let client = client_for("http://127.0.0.1:1/api".into(), false);
        let index = client.index().await.unwrap();
        assert_eq!(index.artists, "http://127.0.0.1:1/api/artists");
    }

    #[tokio::test]
    async fn test_decode_error_names_resource() {
        let base = serve_fixed(r#"{"unexpected": true}"#).await;
        let client = client_for(base, false);

        let err = client.artist_list().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode { resource: Resource::Artists, .. }));
        assert!(err.to_string().starts_with("artists response could not be decoded"));
    }

    #[tokio::test]
    async fn test_fetch_error_on_refused_connection() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/api", addr), true);
        let err = client.index().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Fetch { resource: Resource::Index, .. }));
        assert_eq!(err.resource(), Some(Resource::Index));
    }

    #[tokio::test]
    async fn test_relations_unwrap_envelope() {
        let base = serve_fixed(r#"{"index": [{"id": 2, "datesLocations": {"paris-france": ["01-01-2020"]}}]}"#).await;
        let client = client_for(base, false);
        let index = client.index().await.unwrap();

        let relations = client.relations(&index).await.unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].id, 2);
    }

    #[tokio::test]
    async fn test_truncated_body_is_read_error() {
        // Announces 500 bytes, closes after a dozen.
        let base = serve_raw(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\nConnection: close\r\n\r\n[{\"id\": 1,".to_string(),
        )
        .await;
        let client = client_for(base, false);

        let err = client.artist_list().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Read { resource: Resource::Artists, .. }));
        assert!(err.to_string().starts_with("artists body could not be read"));
    }
}
