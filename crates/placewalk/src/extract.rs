//! Extraction of the winning hit from a raw backend response.

use serde::Serialize;

use crate::backend::SearchResponse;

/// The top-ranked match for one resolution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceHit {
    /// Opaque document identifier
    pub id: String,
    /// The document's layer tag (may fall outside the walk set, e.g. `county`)
    pub layer: String,
    /// Default-language display name
    pub name: String,
    /// Backend-reported latency for the query that found it
    pub took_ms: u64,
}

/// Take the top-ranked hit, or `None` when the backend found nothing.
///
/// An empty hit list is a normal outcome, reported as such so the resolver
/// can continue to the next level; it is never an error.
#[must_use]
pub fn extract(response: &SearchResponse) -> Option<PlaceHit> {
    let hit = response.hits.hits.first()?;
    Some(PlaceHit {
        id: hit.id.clone(),
        layer: hit.source.layer.clone(),
        name: hit.source.name.default.clone(),
        took_ms: response.took,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{HitList, HitSource, LocalizedName, RawHit};

    fn hit(id: &str, layer: &str, name: &str, score: f64) -> RawHit {
        RawHit {
            id: id.to_string(),
            score,
            source: HitSource {
                layer: layer.to_string(),
                source: "whosonfirst".to_string(),
                name: LocalizedName {
                    default: name.to_string(),
                },
            },
        }
    }

    #[test]
    fn takes_only_the_top_hit() {
        let response = SearchResponse {
            took: 23,
            hits: HitList {
                hits: vec![
                    hit("101748367", "locality", "Springfield", 9.7),
                    hit("101748369", "locality", "Springfield", 4.2),
                ],
            },
        };

        let extracted = extract(&response).unwrap();
        assert_eq!(
            extracted,
            PlaceHit {
                id: "101748367".to_string(),
                layer: "locality".to_string(),
                name: "Springfield".to_string(),
                took_ms: 23,
            }
        );
    }

    #[test]
    fn empty_hit_list_is_absent_not_an_error() {
        let response = SearchResponse::default();
        assert_eq!(extract(&response), None);
    }
}
