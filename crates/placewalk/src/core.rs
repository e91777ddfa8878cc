//! The main resolution facade.
//!
//! [`PlaceResolver`] ties a search backend and a configuration together and
//! exposes the two entry points most callers want: resolve an
//! already-decomposed query, or go straight from free text through a
//! [`TextDecomposer`]. The backend is injected, never global, so the same
//! resolver code runs against production Elasticsearch and against a fake
//! in tests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use placewalk::{ElasticBackend, NaiveDecomposer, PlaceResolver};
//!
//! # async fn run() -> Result<(), placewalk::error::PlacewalkError> {
//! let backend = ElasticBackend::new("http://localhost:9200");
//! let resolver = PlaceResolver::new(backend);
//!
//! let resolution = resolver
//!     .resolve_text("123 Main St, Springfield, IL", &NaiveDecomposer)
//!     .await?;
//!
//! for step in resolution.steps() {
//!     println!("{step}");
//! }
//! # Ok(())
//! # }
//! ```

use tracing::{info, instrument};

use crate::{
    adapt,
    backend::SearchBackend,
    config::ResolverConfig,
    decompose::TextDecomposer,
    error::{PlacewalkError, Result},
    hierarchy::DecomposedQuery,
    resolve::{Resolution, resolve_inner},
};

/// Resolves place descriptions against an injected search backend.
///
/// One resolver may serve many concurrent resolutions; each runs its own
/// sequential chain and shares nothing beyond the backend's pooled
/// connection.
#[derive(Debug, Clone)]
pub struct PlaceResolver<B> {
    backend: B,
    config: ResolverConfig,
}

impl<B: SearchBackend> PlaceResolver<B> {
    /// Create a resolver with the default configuration.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use placewalk::{ElasticBackend, PlaceResolver, ResolverConfig};
    ///
    /// let config = ResolverConfig::builder().index("gazetteer").build();
    /// let resolver = PlaceResolver::with_config(ElasticBackend::new("http://localhost:9200"), config);
    /// ```
    pub fn with_config(backend: B, config: ResolverConfig) -> Self {
        Self { backend, config }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resolve a normalized, decomposed query.
    ///
    /// Walks the hierarchy layers in fixed descending order, then issues the
    /// terminal specific-entity query. Layers absent from `query` cost no
    /// backend round trip. A no-match layer is a normal outcome; only a
    /// backend failure (or the configured deadline expiring) fails the
    /// resolution.
    #[instrument(name = "Resolve Place", level = "info", skip_all, fields(fields = query.len()))]
    pub async fn resolve_query(&self, query: &DecomposedQuery) -> Result<Resolution> {
        match self.config.resolution_deadline {
            Some(deadline) => tokio::time::timeout(
                deadline,
                resolve_inner(&self.backend, &self.config, query),
            )
            .await
            .map_err(|_| PlacewalkError::DeadlineExceeded(deadline))?,
            None => resolve_inner(&self.backend, &self.config, query).await,
        }
    }

    /// Resolve raw free text: decompose, normalize, then walk the hierarchy.
    pub async fn resolve_text<D: TextDecomposer>(
        &self,
        text: &str,
        decomposer: &D,
    ) -> Result<Resolution> {
        info!(text, "searching");
        let decomposed = decomposer.decompose(text);
        let normalized = adapt::normalize(decomposed);
        self.resolve_query(&normalized).await
    }
}
