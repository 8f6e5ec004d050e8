use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::catalog::ProductCatalog;
use crate::core::types::{EmptyUniverseReason, ProductName, ReportNote};
use crate::signature::config::SolverConfig;
use crate::signature::selector::{SelectionResult, SelectionStep};

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse dictionary: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Dictionary format version for compatibility checking
pub const DICTIONARY_VERSION: &str = "1.0.0";

/// Result for one product catalog
#[derive(Debug, Clone, Serialize)]
pub struct ProductSignatures {
    pub product: ProductName,

    pub parts: Vec<String>,

    /// Selected substrings in selection order
    pub selected: Vec<String>,

    /// `covered[i]` is true iff `parts[i]` contains a selected substring
    pub covered: Vec<bool>,

    pub uncovered_count: usize,

    /// Distinct candidates before the cross-catalog filter
    pub generated_candidates: usize,

    /// Distinct candidates that survived the cross-catalog filter
    pub exclusive_candidates: usize,

    pub steps: Vec<SelectionStep>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ReportNote>,
}

impl ProductSignatures {
    /// Package one catalog's selection and attach notes for empty universes
    /// and incomplete coverage.
    #[must_use]
    pub fn assemble(
        catalog: &ProductCatalog,
        selection: SelectionResult,
        generated_candidates: usize,
        exclusive_candidates: usize,
        min_len: usize,
    ) -> Self {
        let mut notes = Vec::new();

        if exclusive_candidates == 0 {
            let reason = if catalog.is_empty() {
                EmptyUniverseReason::NoParts
            } else if generated_candidates == 0 {
                EmptyUniverseReason::NoCandidates
            } else {
                EmptyUniverseReason::AllShared
            };
            notes.push(ReportNote::EmptyUniverse { reason });
        }

        if selection.uncovered_count > 0 {
            // Short parts contain no candidate, so they are always uncovered
            let shorter_than_min_len = catalog.count_shorter_than(min_len);
            notes.push(ReportNote::PartialCoverage {
                uncovered: selection.uncovered_count,
                shorter_than_min_len,
            });
        }

        for note in &notes {
            warn!("{}: {note}", catalog.name);
        }

        Self {
            product: catalog.name.clone(),
            parts: catalog.parts.clone(),
            covered: selection.covered.to_bools(),
            selected: selection.selected,
            uncovered_count: selection.uncovered_count,
            generated_candidates,
            exclusive_candidates,
            steps: selection.steps,
            notes,
        }
    }

    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn covered_count(&self) -> usize {
        self.part_count() - self.uncovered_count
    }

    /// Covered fraction of parts (1.0 for an empty catalog)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coverage_fraction(&self) -> f64 {
        if self.parts.is_empty() {
            1.0
        } else {
            self.covered_count() as f64 / self.part_count() as f64
        }
    }

    /// Parts that no selected substring matches
    pub fn uncovered_parts(&self) -> impl Iterator<Item = &str> {
        self.parts
            .iter()
            .zip(&self.covered)
            .filter(|(_, covered)| !**covered)
            .map(|(part, _)| part.as_str())
    }
}

/// Per-product entry of an exported dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub product: ProductName,
    pub signatures: Vec<String>,
}

/// Exportable set of signatures, consumed by the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureDictionary {
    pub version: String,
    pub created_at: String,
    pub min_len: usize,
    pub max_len: usize,
    pub non_overlap: bool,
    pub products: Vec<ProductEntry>,
}

impl SignatureDictionary {
    #[must_use]
    pub fn from_results(results: &[ProductSignatures], config: &SolverConfig) -> Self {
        Self {
            version: DICTIONARY_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            min_len: config.min_len,
            max_len: config.max_len,
            non_overlap: config.non_overlap,
            products: results
                .iter()
                .map(|r| ProductEntry {
                    product: r.product.clone(),
                    signatures: r.selected.clone(),
                })
                .collect(),
        }
    }

    /// Load a dictionary from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid dictionary.
    pub fn load_from_file(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a dictionary from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::ParseError` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let dictionary: Self = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if dictionary.version != DICTIONARY_VERSION {
            warn!(
                "Dictionary version mismatch (expected {}, found {})",
                DICTIONARY_VERSION, dictionary.version
            );
        }

        Ok(dictionary)
    }

    /// Export to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, DictionaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::candidates::generate_candidates;
    use crate::signature::selector::greedy_select;

    fn assemble(catalog: &ProductCatalog, min_len: usize, max_len: usize) -> ProductSignatures {
        let universe = generate_candidates(&catalog.parts, min_len, max_len);
        let generated = universe.len();
        let selection = greedy_select(&catalog.parts, universe, false);
        ProductSignatures::assemble(catalog, selection, generated, generated, min_len)
    }

    #[test]
    fn test_full_coverage_has_no_notes() {
        let catalog = ProductCatalog::from_parts("a", ["ABC", "ABD"]);
        let report = assemble(&catalog, 2, 3);
        assert!(report.notes.is_empty());
        assert_eq!(report.covered, vec![true, true]);
        assert!((report.coverage_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_parts_reported() {
        let catalog = ProductCatalog::from_parts("a", ["ABCD", "X"]);
        let report = assemble(&catalog, 3, 4);
        assert_eq!(report.uncovered_count, 1);
        assert_eq!(report.uncovered_parts().collect::<Vec<_>>(), vec!["X"]);
        assert_eq!(
            report.notes,
            vec![ReportNote::PartialCoverage {
                uncovered: 1,
                shorter_than_min_len: 1
            }]
        );
    }

    #[test]
    fn test_short_part_count_uses_characters() {
        // "ÄÖ" is 4 bytes but only 2 characters; "QQQQ" is shared elsewhere
        let catalog = ProductCatalog::from_parts("a", ["ÄÖ", "ABCD", "QQQQ"]);
        let universe = generate_candidates(&catalog.parts, 3, 4);
        let generated = universe.len();
        let mut exclusive = universe.clone();
        exclusive.retain(|c| !c.substring.contains('Q'));
        let selection = greedy_select(&catalog.parts, exclusive.clone(), false);
        let report =
            ProductSignatures::assemble(&catalog, selection, generated, exclusive.len(), 3);

        assert_eq!(report.uncovered_parts().collect::<Vec<_>>(), vec!["ÄÖ", "QQQQ"]);
        assert_eq!(
            report.notes,
            vec![ReportNote::PartialCoverage {
                uncovered: 2,
                shorter_than_min_len: 1
            }]
        );
    }

    #[test]
    fn test_no_candidates_note() {
        let catalog = ProductCatalog::from_parts("a", ["AB", "CD"]);
        let report = assemble(&catalog, 10, 12);
        assert!(report.selected.is_empty());
        assert_eq!(report.covered, vec![false, false]);
        assert_eq!(
            report.notes[0],
            ReportNote::EmptyUniverse {
                reason: EmptyUniverseReason::NoCandidates
            }
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProductCatalog::new("empty", Vec::new());
        let report = assemble(&catalog, 3, 4);
        assert_eq!(report.uncovered_count, 0);
        assert_eq!(
            report.notes,
            vec![ReportNote::EmptyUniverse {
                reason: EmptyUniverseReason::NoParts
            }]
        );
    }

    #[test]
    fn test_dictionary_json() {
        let catalog = ProductCatalog::from_parts("pumps", ["P-100"]);
        let report = assemble(&catalog, 3, 3);
        let dictionary = SignatureDictionary::from_results(&[report], &SolverConfig::default());
        let json = dictionary.to_json().unwrap();
        assert!(json.contains("\"version\""));
        assert!(json.contains("\"pumps\""));

        let loaded = SignatureDictionary::from_json(&json).unwrap();
        assert_eq!(loaded.products, dictionary.products);
    }

    #[test]
    fn test_dictionary_load_from_file() {
        let catalog = ProductCatalog::from_parts("valves", ["V-9"]);
        let report = assemble(&catalog, 2, 2);
        let dictionary = SignatureDictionary::from_results(&[report], &SolverConfig::default());

        let temp = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        std::fs::write(temp.path(), dictionary.to_json().unwrap()).unwrap();

        let loaded = SignatureDictionary::load_from_file(temp.path()).unwrap();
        assert_eq!(loaded.products[0].signatures, vec!["V-".to_string()]);
    }
}
