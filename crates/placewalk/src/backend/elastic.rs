//! HTTP client for an Elasticsearch-compatible search backend.

use std::time::Duration;

use tracing::{debug, instrument};

use super::{BackendResult, SearchBackend, SearchResponse};
use crate::query::SearchRequest;

/// Elasticsearch-compatible backend reached over HTTP.
///
/// Holds one pooled [`reqwest::Client`]; cloning the backend shares the
/// pool, so independent concurrent resolutions can reuse a single instance.
///
/// # Examples
///
/// ```rust,no_run
/// use placewalk::ElasticBackend;
///
/// let backend = ElasticBackend::new("http://localhost:9200");
/// ```
#[derive(Debug, Clone)]
pub struct ElasticBackend {
    client: reqwest::Client,
    host: String,
    query_timeout: Option<Duration>,
}

impl ElasticBackend {
    /// Create a backend for the given host, e.g. `http://localhost:9200`.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            host: host.into().trim_end_matches('/').to_string(),
            query_timeout: None,
        }
    }

    /// Enforce a timeout on every individual query.
    #[must_use]
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Use a pre-configured [`reqwest::Client`] (custom pools, proxies, TLS).
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The `_search` endpoint for a request, typed when the request targets
    /// one layer.
    fn search_url(&self, request: &SearchRequest) -> String {
        match request.layer {
            Some(layer) => format!("{}/{}/{}/_search", self.host, request.index, layer),
            None => format!("{}/{}/_search", self.host, request.index),
        }
    }
}

impl SearchBackend for ElasticBackend {
    #[instrument(name = "Backend Search", level = "debug", skip_all, fields(index = %request.index, layer = ?request.layer))]
    async fn search(&self, request: SearchRequest) -> BackendResult<SearchResponse> {
        let url = self.search_url(&request);
        debug!(url, "issuing search request");

        let mut http_request = self.client.post(&url).json(&request.body);
        if let Some(timeout) = self.query_timeout {
            http_request = http_request.timeout(timeout);
        }

        let response = http_request.send().await?.error_for_status()?;

        // Deserialize from the raw body rather than response.json() so a
        // malformed payload surfaces as Decode, not as a transport error.
        let body = response.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResolverConfig, hierarchy::Layer, query::build_query};

    #[test]
    fn layer_queries_target_the_typed_endpoint() {
        let backend = ElasticBackend::new("http://localhost:9200/");
        let config = ResolverConfig::default();

        let request = build_query(Some(Layer::Locality), "springfield", None, &config);
        assert_eq!(
            backend.search_url(&request),
            "http://localhost:9200/pelias/locality/_search"
        );
    }

    #[test]
    fn unconstrained_queries_target_the_index_endpoint() {
        let backend = ElasticBackend::new("http://localhost:9200");
        let config = ResolverConfig::default();

        let request = build_query(None, "123 main st", None, &config);
        assert_eq!(
            backend.search_url(&request),
            "http://localhost:9200/pelias/_search"
        );
    }

    #[test]
    fn host_is_normalized() {
        assert_eq!(
            ElasticBackend::new("http://es.internal:9200///").host(),
            "http://es.internal:9200"
        );
    }
}
