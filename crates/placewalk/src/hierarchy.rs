//! Layer vocabulary and the decomposed query model.
//!
//! The gazetteer organizes documents into layers. Five of them form the
//! administrative hierarchy that resolution walks from coarsest to finest;
//! `address` and `venue` are terminal layers that only ever appear in the
//! final specific-entity query.

use std::{fmt, str::FromStr};

use ahash::AHashMap as HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A document layer in the gazetteer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Country level (e.g. "United States")
    Country,
    /// State/Province level (e.g. "Illinois")
    Region,
    /// City/Town level (e.g. "Springfield")
    Locality,
    /// Borough within a locality (e.g. "Brooklyn")
    Borough,
    /// Neighbourhood within a locality or borough
    Neighbourhood,
    /// A specific street address (terminal, never part of the walk)
    Address,
    /// A named venue or point of interest (terminal, never part of the walk)
    Venue,
}

impl Layer {
    /// The administrative hierarchy in descending order. Earlier entries are
    /// searched first, and each resolved entry scopes the next.
    pub const HIERARCHY: [Self; 5] = [
        Self::Country,
        Self::Region,
        Self::Locality,
        Self::Borough,
        Self::Neighbourhood,
    ];

    /// Whether this layer is part of the administrative hierarchy walk.
    ///
    /// `address` and `venue` are not: they are only valid targets for the
    /// final specific-entity query and are exempt from the curated-source
    /// constraint applied to hierarchy queries.
    #[must_use]
    pub const fn is_hierarchy(self) -> bool {
        !matches!(self, Self::Address | Self::Venue)
    }

    /// The layer name as it appears in gazetteer documents and query keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Region => "region",
            Self::Locality => "locality",
            Self::Borough => "borough",
            Self::Neighbourhood => "neighbourhood",
            Self::Address => "address",
            Self::Venue => "venue",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("unknown layer: {0}")]
pub struct UnknownLayer(String);

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(Self::Country),
            "region" => Ok(Self::Region),
            "locality" => Ok(Self::Locality),
            "borough" => Ok(Self::Borough),
            "neighbourhood" => Ok(Self::Neighbourhood),
            "address" => Ok(Self::Address),
            "venue" => Ok(Self::Venue),
            other => Err(UnknownLayer(other.to_string())),
        }
    }
}

/// A sparse mapping from decomposition keys to extracted text.
///
/// Keys are the decomposition vocabulary ("name", "number", "street",
/// "city", "state", ...) before normalization and the layer vocabulary
/// afterwards. Which keys are present varies per input; absent keys simply
/// mean the decomposition step extracted nothing for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedQuery {
    fields: HashMap<String, String>,
}

impl DecomposedQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The extracted text for a hierarchy layer, if any.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> Option<&str> {
        self.get(layer.as_str())
    }

    /// The specific-entity name used for the terminal query.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the query, yielding its key/value pairs.
    pub fn into_fields(self) -> impl Iterator<Item = (String, String)> {
        self.fields.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for DecomposedQuery
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
