//! Resolver configuration.

use std::time::Duration;

use crate::hierarchy::Layer;

/// Configuration for hierarchy resolution and query construction.
///
/// The defaults target a standard gazetteer index: documents indexed under
/// `pelias`, names matched with the `peliasQueryFullToken` analyzer, and
/// hierarchy layers restricted to the `whosonfirst` source. Use
/// [`ResolverConfig::builder`] to customize.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use placewalk::ResolverConfig;
///
/// let config = ResolverConfig::builder()
///     .index("pelias")
///     .query_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.index, "pelias");
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Name of the gazetteer index to search
    pub index: String,
    /// Query-time analyzer for the name match clause. Must match all
    /// significant tokens of the term, order-insensitive, so that hierarchy
    /// disambiguation favours exact place-name identity over partial matches.
    pub analyzer: String,
    /// Provenance required of hierarchy-layer documents. Secondary sources
    /// lack reliable parent linkage for non-address entities.
    pub hierarchy_source: String,
    /// Optional layer constraint for the terminal specific-entity query.
    /// `None` searches every layer, matching the unconstrained final query.
    pub final_layer: Option<Layer>,
    /// Per-query timeout applied by the backend client
    pub query_timeout: Option<Duration>,
    /// Overall deadline for one full resolution. An unresponsive backend
    /// otherwise stalls the sequential chain indefinitely.
    pub resolution_deadline: Option<Duration>,
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            index: "pelias".to_string(),
            analyzer: "peliasQueryFullToken".to_string(),
            hierarchy_source: "whosonfirst".to_string(),
            final_layer: None,
            query_timeout: Some(Duration::from_secs(10)),
            resolution_deadline: Some(Duration::from_secs(30)),
        }
    }
}

/// Builder for creating resolver configurations with ergonomic defaults.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gazetteer index name
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.config.index = index.into();
        self
    }

    /// Set the query-time analyzer for name matching
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.config.analyzer = analyzer.into();
        self
    }

    /// Set the provenance source required of hierarchy-layer documents
    pub fn hierarchy_source(mut self, source: impl Into<String>) -> Self {
        self.config.hierarchy_source = source.into();
        self
    }

    /// Constrain the terminal specific-entity query to one layer
    /// (typically [`Layer::Address`] or [`Layer::Venue`])
    pub fn final_layer(mut self, layer: Layer) -> Self {
        self.config.final_layer = Some(layer);
        self
    }

    /// Set the per-query timeout enforced by the backend client
    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.config.query_timeout = Some(timeout);
        self
    }

    /// Set the overall deadline for one full resolution
    pub fn resolution_deadline(mut self, deadline: Duration) -> Self {
        self.config.resolution_deadline = Some(deadline);
        self
    }

    /// Disable the per-query timeout and the overall deadline
    pub fn no_deadlines(mut self) -> Self {
        self.config.query_timeout = None;
        self.config.resolution_deadline = None;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}
