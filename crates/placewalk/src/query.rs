//! Construction of search backend requests.
//!
//! Every request carries a full-text match on the document name; hierarchy
//! requests additionally pin the parent identifier resolved at the previous
//! level and the curated provenance source. The builder has no failure
//! modes: it always yields a well-formed request, even with an empty name
//! and no scope.

use serde::Serialize;
use serde_json::{Value, json};

use crate::{config::ResolverConfig, hierarchy::Layer};

/// The most specific ancestor resolved so far.
///
/// The layer is the *document's* layer tag as reported by the backend, not
/// the walk level the query targeted — gazetteer documents carry layers
/// outside the walk set (e.g. `county`), and the parent-id field is named
/// after whatever the document says it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentScope {
    pub parent_id: String,
    pub parent_layer: String,
}

impl ParentScope {
    /// The document field holding this ancestor's id on its descendants,
    /// e.g. `parent.locality_id`.
    #[must_use]
    pub fn id_field(&self) -> String {
        format!("parent.{}_id", self.parent_layer)
    }
}

/// A structured request addressed to the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Target index
    pub index: String,
    /// Document layer to search, or `None` to search every layer
    pub layer: Option<Layer>,
    /// Boolean query body in the backend's native shape
    pub body: Value,
}

/// Build the search request for one resolution step.
///
/// The clauses, in order:
/// - a `match` on `name.default` with the configured query-time analyzer —
///   always present, even for an empty name;
/// - a `term` on `parent.<layer>_id` when a parent scope exists;
/// - a `term` pinning `source` to the curated gazetteer when `layer` is a
///   true hierarchy layer. Terminal address/venue queries and the
///   unconstrained final query never get this clause.
#[must_use]
pub fn build_query(
    layer: Option<Layer>,
    name: &str,
    scope: Option<&ParentScope>,
    config: &ResolverConfig,
) -> SearchRequest {
    let mut must = vec![json!({
        "match": {
            "name.default": {
                "query": name,
                "analyzer": config.analyzer,
            }
        }
    })];

    if let Some(scope) = scope {
        let field = scope.id_field();
        must.push(json!({
            "term": { field: scope.parent_id }
        }));
    }

    if layer.is_some_and(Layer::is_hierarchy) {
        must.push(json!({
            "term": { "source": config.hierarchy_source }
        }));
    }

    SearchRequest {
        index: config.index.clone(),
        layer,
        body: json!({
            "query": {
                "bool": {
                    "must": must
                }
            }
        }),
    }
}
