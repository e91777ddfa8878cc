//! The free-text decomposition seam.
//!
//! Decomposition — turning "123 Main St, Springfield, IL" into labelled
//! fields — is an external capability consumed through [`TextDecomposer`].
//! The trait is total: a decomposer always returns a mapping, possibly
//! empty, and never fails.
//!
//! [`NaiveDecomposer`] is a deliberately small comma-splitting stand-in so
//! the pipeline works end-to-end without a full address analyzer. Swap in a
//! real analyzer by implementing the trait.

use crate::hierarchy::DecomposedQuery;

/// Maps raw input text to a sparse field mapping in the decomposition
/// vocabulary ("name", "number", "street", "city", "state", ...).
pub trait TextDecomposer {
    fn decompose(&self, text: &str) -> DecomposedQuery;
}

/// Comma-delimited heuristic decomposer.
///
/// The first comma segment becomes either `number` + `street` (when it leads
/// with a house number) or `name`; the remaining segments are assigned, in
/// order, to `city`, `state` and `country`. Anything beyond that is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDecomposer;

impl NaiveDecomposer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextDecomposer for NaiveDecomposer {
    fn decompose(&self, text: &str) -> DecomposedQuery {
        let mut query = DecomposedQuery::new();

        let mut segments = text
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty());

        let Some(first) = segments.next() else {
            return query;
        };

        match split_house_number(first) {
            Some((number, street)) => {
                query.insert("number", number);
                query.insert("street", street);
            }
            None => query.insert("name", first),
        }

        for (key, segment) in ["city", "state", "country"].into_iter().zip(segments) {
            query.insert(key, segment);
        }

        query
    }
}

/// Split a leading house number off a street segment, if one is present.
fn split_house_number(segment: &str) -> Option<(&str, &str)> {
    let (number, street) = segment.split_once(char::is_whitespace)?;
    if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
        Some((number, street.trim_start()))
    } else {
        None
    }
}
