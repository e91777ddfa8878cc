//! placewalk - Hierarchical Place Resolution Library
//!
//! placewalk resolves a free-text place description — "123 Main St,
//! Springfield, IL" — into a ranked administrative hierarchy of gazetteer
//! records: country, region, locality, borough, neighbourhood, and finally
//! the specific address or venue. It issues a sequence of dependent queries
//! against an Elasticsearch-compatible search backend, each one scoped to
//! the parent resolved in the previous step.
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
//! // Every walked layer, in descending order, plus the terminal entity.
//! for step in resolution.steps() {
//!     println!("{step}");
//! }
//! if let Some(hit) = resolution.final_hit() {
//!     println!("resolved to {} ({})", hit.name, hit.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # How resolution works
//!
//! - **Decompose**: an external analyzer (any [`TextDecomposer`]) splits the
//!   input into labelled fields; [`normalize`] renames them into the layer
//!   vocabulary and synthesizes the entity name from `number` + `street`.
//! - **Walk**: the resolver visits the hierarchy layers in fixed descending
//!   order, skipping layers the decomposition didn't produce, and carries
//!   the most recently resolved parent forward as a scoping constraint.
//! - **Finish**: one terminal query resolves the specific entity against
//!   the accumulated scope.
//!
//! The search backend is injected through the [`SearchBackend`] trait, so
//! the whole pipeline runs unchanged against a test fake.

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod adapt;
mod backend;
mod config;
mod core;
mod decompose;
pub mod error;
mod extract;
mod hierarchy;
mod query;
mod report;
mod resolve;

pub use adapt::normalize;
pub use backend::{
    BackendError, BackendResult, ElasticBackend, HitList, HitSource, LocalizedName, RawHit,
    SearchBackend, SearchResponse,
};
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use core::PlaceResolver;
pub use decompose::{NaiveDecomposer, TextDecomposer};
pub use error::PlacewalkError;
pub use extract::{PlaceHit, extract};
pub use hierarchy::{DecomposedQuery, Layer, UnknownLayer};
pub use query::{ParentScope, SearchRequest, build_query};
pub use report::{NO_HITS, format_hit};
pub use resolve::{Resolution, ResolutionStep, ResolutionTrace};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the placewalk library.
///
/// This sets up structured logging with configurable levels and filtering.
/// Call this once at the start of your application to enable detailed
/// logging output from placewalk operations.
///
/// # Arguments
///
/// * `level` - The minimum log level to display
///
/// # Examples
///
/// ```rust
/// use placewalk::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), placewalk::error::PlacewalkError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::PlacewalkError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_logging_init_is_idempotent() {
        setup_test_env();
        assert!(init_logging(tracing::Level::INFO).is_ok());
    }

    #[test]
    fn test_normalize_then_walk_vocabulary_lines_up() {
        setup_test_env();

        // The decomposer speaks "city"/"state"; after normalization every
        // walked key is a layer name the resolver understands.
        let decomposed = NaiveDecomposer.decompose("123 Main St, Springfield, IL");
        let normalized = normalize(decomposed);

        assert_eq!(normalized.layer(Layer::Locality), Some("Springfield"));
        assert_eq!(normalized.layer(Layer::Region), Some("IL"));
        assert_eq!(normalized.name(), Some("123 Main St"));
    }
}
