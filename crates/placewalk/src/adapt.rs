//! Normalization of decomposition output into the layer vocabulary.
//!
//! Decomposers speak their own vocabulary ("city", "state"); the gazetteer
//! speaks layers ("locality", "region"). [`normalize`] applies the static
//! rename table, passes unmapped keys through untouched, and synthesizes a
//! `name` from `number` + `street` when the decomposition extracted an
//! address but no explicit entity name.

use ahash::AHashMap as HashMap;
use once_cell::sync::Lazy;

use crate::hierarchy::DecomposedQuery;

/// Decomposition-vocabulary keys that map onto layer names.
static RENAMES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| [("city", "locality"), ("state", "region")].into_iter().collect());

/// Rename decomposition keys to layer keys and synthesize the entity name.
///
/// Pure and total: malformed or absent fields simply propagate as absent
/// keys. The output is what the hierarchy resolver consumes.
#[must_use]
pub fn normalize(decomposed: DecomposedQuery) -> DecomposedQuery {
    let mut normalized: DecomposedQuery = decomposed
        .into_fields()
        .map(|(key, value)| {
            let key = RENAMES
                .get(key.as_str())
                .map_or(key, |renamed| (*renamed).to_string());
            (key, value)
        })
        .collect();

    // An address decomposition carries number + street but no entity name;
    // the terminal query still needs one.
    if normalized.name().is_none()
        && let (Some(number), Some(street)) = (normalized.get("number"), normalized.get("street"))
    {
        let name = format!("{number} {street}");
        normalized.insert("name", name);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Layer;

    fn query(pairs: &[(&str, &str)]) -> DecomposedQuery {
        pairs.iter().copied().collect()
    }

    #[test]
    fn renames_city_and_state() {
        let normalized = normalize(query(&[("city", "springfield"), ("state", "il")]));

        assert_eq!(normalized.layer(Layer::Locality), Some("springfield"));
        assert_eq!(normalized.layer(Layer::Region), Some("il"));
        assert!(!normalized.contains("city"));
        assert!(!normalized.contains("state"));
    }

    #[test]
    fn unmapped_keys_pass_through() {
        let normalized = normalize(query(&[("country", "usa"), ("postalcode", "62701")]));

        assert_eq!(normalized.layer(Layer::Country), Some("usa"));
        assert_eq!(normalized.get("postalcode"), Some("62701"));
    }

    #[test]
    fn synthesizes_name_from_number_and_street() {
        let normalized = normalize(query(&[("number", "123"), ("street", "main st")]));

        assert_eq!(normalized.name(), Some("123 main st"));
        // The inputs survive alongside the synthesized name.
        assert_eq!(normalized.get("number"), Some("123"));
        assert_eq!(normalized.get("street"), Some("main st"));
    }

    #[test]
    fn explicit_name_wins_over_synthesis() {
        let normalized = normalize(query(&[
            ("name", "city hall"),
            ("number", "123"),
            ("street", "main st"),
        ]));

        assert_eq!(normalized.name(), Some("city hall"));
    }

    #[test]
    fn no_synthesis_without_both_parts() {
        assert_eq!(normalize(query(&[("number", "123")])).name(), None);
        assert_eq!(normalize(query(&[("street", "main st")])).name(), None);
        assert!(normalize(query(&[])).is_empty());
    }
}
