//! Console presentation of resolution outcomes.
//!
//! The resolver returns structured data; turning it into the classic
//! `[layer] id name (Nms)` console lines lives here, kept apart so
//! programmatic callers never pay for formatting.

use std::fmt;

use itertools::Itertools;

use crate::{
    extract::PlaceHit,
    resolve::{Resolution, ResolutionStep},
};

/// One console line for a hit: `[locality] 101748367 Springfield (12ms)`.
#[must_use]
pub fn format_hit(hit: &PlaceHit) -> String {
    format!("[{}] {} {} ({}ms)", hit.layer, hit.id, hit.name, hit.took_ms)
}

/// Line reported when a query matched nothing.
pub const NO_HITS: &str = "no hits";

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hit {
            Some(hit) => f.write_str(&format_hit(hit)),
            None => f.write_str(NO_HITS),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps().map(ToString::to_string).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hierarchy::Layer, resolve::ResolutionTrace};

    fn hit() -> PlaceHit {
        PlaceHit {
            id: "101748367".to_string(),
            layer: "locality".to_string(),
            name: "Springfield".to_string(),
            took_ms: 12,
        }
    }

    #[test]
    fn hit_line_matches_the_console_shape() {
        assert_eq!(format_hit(&hit()), "[locality] 101748367 Springfield (12ms)");
    }

    #[test]
    fn no_match_step_prints_no_hits() {
        let step = ResolutionStep {
            layer: Some(Layer::Borough),
            term: "nowhere".to_string(),
            hit: None,
        };
        assert_eq!(step.to_string(), "no hits");
    }

    #[test]
    fn resolution_prints_one_line_per_step() {
        let resolution = Resolution {
            trace: ResolutionTrace::default(),
            final_step: ResolutionStep {
                layer: None,
                term: "123 main st".to_string(),
                hit: Some(hit()),
            },
        };

        assert_eq!(
            resolution.to_string(),
            "[locality] 101748367 Springfield (12ms)"
        );
    }
}
