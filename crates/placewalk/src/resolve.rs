//! The hierarchy resolution walk.
//!
//! Resolution folds over the fixed descending layer order, carrying the
//! accumulated trace and the current parent scope. Each layer present in
//! the decomposed query costs exactly one backend round trip, issued only
//! after the previous response is known — a later query's body depends on
//! the parent identifier the previous one resolved. Layers absent from the
//! query are skipped outright. After the walk, one terminal query resolves
//! the specific entity against the final scope.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    backend::SearchBackend,
    config::ResolverConfig,
    error::Result,
    extract::{PlaceHit, extract},
    hierarchy::{DecomposedQuery, Layer},
    query::{ParentScope, build_query},
};

/// One issued query and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionStep {
    /// The layer the query targeted; `None` for an unconstrained terminal query
    pub layer: Option<Layer>,
    /// The text searched for
    pub term: String,
    /// The winning hit, or `None` when the backend found nothing
    pub hit: Option<PlaceHit>,
}

impl ResolutionStep {
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.hit.is_some()
    }
}

/// The ordered chain of hierarchy steps walked so far.
///
/// No-match steps are recorded too: the trace is the full account of what
/// was asked, not only of what resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionTrace {
    steps: Vec<ResolutionStep>,
}

impl ResolutionTrace {
    #[must_use]
    pub fn steps(&self) -> &[ResolutionStep] {
        &self.steps
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Scope for the next query: the most recent step that produced a hit.
    ///
    /// A no-match layer does not advance the scope — the walk falls back to
    /// the last successful parent rather than dropping the constraint.
    #[must_use]
    pub fn current_scope(&self) -> Option<ParentScope> {
        self.steps
            .iter()
            .rev()
            .find_map(|step| step.hit.as_ref())
            .map(|hit| ParentScope {
                parent_id: hit.id.clone(),
                parent_layer: hit.layer.clone(),
            })
    }

    fn push(&mut self, step: ResolutionStep) {
        self.steps.push(step);
    }
}

/// The complete outcome of one resolution: the walked hierarchy chain plus
/// the terminal specific-entity step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub trace: ResolutionTrace,
    pub final_step: ResolutionStep,
}

impl Resolution {
    /// The resolved specific entity, if the terminal query matched.
    #[must_use]
    pub fn final_hit(&self) -> Option<&PlaceHit> {
        self.final_step.hit.as_ref()
    }

    /// Every step in issue order, the terminal one last.
    pub fn steps(&self) -> impl Iterator<Item = &ResolutionStep> {
        self.trace.steps().iter().chain(std::iter::once(&self.final_step))
    }
}

/// Walk the hierarchy for one normalized query.
///
/// The deadline, if any, is enforced by the caller ([`crate::PlaceResolver`]);
/// this function is the bare sequential walk.
pub(crate) async fn resolve_inner<B: SearchBackend>(
    backend: &B,
    config: &ResolverConfig,
    query: &DecomposedQuery,
) -> Result<Resolution> {
    let mut trace = ResolutionTrace::default();

    for layer in Layer::HIERARCHY {
        let Some(term) = query.layer(layer) else {
            continue;
        };

        let scope = trace.current_scope();
        debug!(%layer, term, scope = ?scope, "querying hierarchy layer");

        let request = build_query(Some(layer), term, scope.as_ref(), config);
        let response = backend.search(request).await?;
        let hit = extract(&response);

        match &hit {
            Some(hit) => info!(%layer, id = %hit.id, name = %hit.name, took_ms = hit.took_ms, "layer resolved"),
            None => info!(%layer, term, "no hits"),
        }

        trace.push(ResolutionStep {
            layer: Some(layer),
            term: term.to_string(),
            hit,
        });
    }

    debug!("done querying parent hierarchy");

    let scope = trace.current_scope();
    let name = query.name().unwrap_or_default();
    let request = build_query(config.final_layer, name, scope.as_ref(), config);
    let response = backend.search(request).await?;
    let final_step = ResolutionStep {
        layer: config.final_layer,
        term: name.to_string(),
        hit: extract(&response),
    };

    match &final_step.hit {
        Some(hit) => info!(id = %hit.id, name = %hit.name, took_ms = hit.took_ms, "entity resolved"),
        None => info!(name, "no hits for entity"),
    }

    Ok(Resolution { trace, final_step })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str, layer: &str) -> PlaceHit {
        PlaceHit {
            id: id.to_string(),
            layer: layer.to_string(),
            name: format!("name-{id}"),
            took_ms: 1,
        }
    }

    fn step(layer: Layer, hit: Option<PlaceHit>) -> ResolutionStep {
        ResolutionStep {
            layer: Some(layer),
            term: "term".to_string(),
            hit,
        }
    }

    #[test]
    fn empty_trace_has_no_scope() {
        assert_eq!(ResolutionTrace::default().current_scope(), None);
    }

    #[test]
    fn scope_comes_from_the_last_hit() {
        let mut trace = ResolutionTrace::default();
        trace.push(step(Layer::Country, Some(hit("1", "country"))));
        trace.push(step(Layer::Locality, Some(hit("2", "locality"))));

        assert_eq!(
            trace.current_scope(),
            Some(ParentScope {
                parent_id: "2".to_string(),
                parent_layer: "locality".to_string(),
            })
        );
    }

    #[test]
    fn no_match_step_does_not_advance_scope() {
        let mut trace = ResolutionTrace::default();
        trace.push(step(Layer::Country, Some(hit("1", "country"))));
        trace.push(step(Layer::Region, None));

        assert_eq!(
            trace.current_scope(),
            Some(ParentScope {
                parent_id: "1".to_string(),
                parent_layer: "country".to_string(),
            })
        );
    }

    #[test]
    fn scope_uses_the_document_layer_tag() {
        let mut trace = ResolutionTrace::default();
        // The backend may resolve a locality query to a county document.
        trace.push(step(Layer::Locality, Some(hit("7", "county"))));

        assert_eq!(trace.current_scope().unwrap().id_field(), "parent.county_id");
    }

    #[test]
    fn steps_iterates_terminal_last() {
        let mut trace = ResolutionTrace::default();
        trace.push(step(Layer::Country, Some(hit("1", "country"))));
        let resolution = Resolution {
            trace,
            final_step: ResolutionStep {
                layer: None,
                term: "123 main st".to_string(),
                hit: None,
            },
        };

        let layers: Vec<_> = resolution.steps().map(|s| s.layer).collect();
        assert_eq!(layers, vec![Some(Layer::Country), None]);
        assert!(resolution.final_hit().is_none());
    }
}
