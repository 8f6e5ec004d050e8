use serde::Serialize;

use crate::core::types::ProductName;
use crate::signature::report::SignatureDictionary;

/// Classification of one part string against a signature dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Classification {
    /// Signatures of exactly one product occur in the part
    Unique {
        product: ProductName,
        matched: Vec<String>,
    },
    /// Signatures of several products occur in the part. Cannot happen for
    /// parts that were in the catalogs the dictionary was built from.
    Ambiguous { products: Vec<ProductName> },
    /// No signature occurs in the part
    Unknown,
}

/// Looks up which products' signatures occur in a part string
pub struct Classifier<'a> {
    dictionary: &'a SignatureDictionary,
}

impl<'a> Classifier<'a> {
    pub fn new(dictionary: &'a SignatureDictionary) -> Self {
        Self { dictionary }
    }

    /// Classify a single part string; exact, case-sensitive substring matching
    #[must_use]
    pub fn classify(&self, part: &str) -> Classification {
        let mut hits: Vec<(&ProductName, Vec<String>)> = Vec::new();

        for entry in &self.dictionary.products {
            let matched: Vec<String> = entry
                .signatures
                .iter()
                .filter(|sig| part.contains(sig.as_str()))
                .cloned()
                .collect();
            if !matched.is_empty() {
                hits.push((&entry.product, matched));
            }
        }

        match hits.len() {
            0 => Classification::Unknown,
            1 => {
                let (product, matched) = hits.remove(0);
                Classification::Unique {
                    product: product.clone(),
                    matched,
                }
            }
            _ => Classification::Ambiguous {
                products: hits.into_iter().map(|(p, _)| p.clone()).collect(),
            },
        }
    }
}
