use serde::{Deserialize, Serialize};

use crate::core::types::ProductName;

/// One product's ordered list of part numbers
///
/// Parts are stored exactly as loaded (already trimmed, blank lines removed).
/// Their order only matters for tie-breaking during selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    /// Product name (unique within a run)
    pub name: ProductName,

    /// Part-number strings
    pub parts: Vec<String>,
}

impl ProductCatalog {
    pub fn new(name: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            name: ProductName::new(name),
            parts,
        }
    }

    /// Build from any iterator of string-like items
    pub fn from_parts<I, S>(name: impl Into<String>, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, parts.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of parts with fewer than `min_len` characters
    #[must_use]
    pub fn count_shorter_than(&self, min_len: usize) -> usize {
        self.parts
            .iter()
            .filter(|p| p.chars().count() < min_len)
            .count()
    }
}
