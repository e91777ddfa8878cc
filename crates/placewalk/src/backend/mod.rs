//! The search backend seam.
//!
//! The resolver only needs one capability: execute a [`SearchRequest`] and
//! return the ranked response. [`SearchBackend`] expresses that capability
//! as a trait so resolutions can run against the real HTTP backend in
//! production and a scripted fake in tests, instead of a process-wide
//! client singleton.

mod elastic;

pub use elastic::ElasticBackend;
use serde::Deserialize;
use thiserror::Error;

use crate::query::SearchRequest;

/// Failure talking to the search backend. Distinct from "no hits", which is
/// a normal outcome carried in the response itself.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("search backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed search backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// A ranked-search document index.
///
/// Implementations must be safe for concurrent independent use: multiple
/// resolutions may share one backend, but each resolution issues its
/// queries strictly one at a time.
pub trait SearchBackend {
    /// Execute one query, suspending until the backend responds.
    fn search(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = BackendResult<SearchResponse>> + Send;
}

/// Raw ranked response from the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Backend-reported query latency in milliseconds
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub hits: HitList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitList {
    /// Hits in descending relevance order
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// One matching document, as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: f64,
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

/// Document fields the resolver reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    #[serde(default)]
    pub layer: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub name: LocalizedName,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedName {
    /// Default-language display name
    #[serde(default)]
    pub default: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_ranked_response() {
        let raw = r#"{
            "took": 17,
            "hits": {
                "total": 2,
                "hits": [
                    {
                        "_id": "85633793",
                        "_score": 12.5,
                        "_source": {
                            "layer": "country",
                            "source": "whosonfirst",
                            "name": { "default": "United States" },
                            "parent": {}
                        }
                    },
                    {
                        "_id": "85633805",
                        "_score": 3.1,
                        "_source": {
                            "layer": "country",
                            "source": "whosonfirst",
                            "name": { "default": "United Kingdom" }
                        }
                    }
                ]
            }
        }"#;

        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.took, 17);
        assert_eq!(response.hits.hits.len(), 2);

        let top = &response.hits.hits[0];
        assert_eq!(top.id, "85633793");
        assert_eq!(top.source.layer, "country");
        assert_eq!(top.source.name.default, "United States");
        assert!(top.score > response.hits.hits[1].score);
    }

    #[test]
    fn tolerates_missing_fields() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"hits": {"hits": [{"_id": "x"}]}}"#).unwrap();

        assert_eq!(response.took, 0);
        let hit = &response.hits.hits[0];
        assert_eq!(hit.source.layer, "");
        assert_eq!(hit.source.name.default, "");
    }

    #[test]
    fn empty_response_has_no_hits() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.hits.hits.is_empty());
    }
}
