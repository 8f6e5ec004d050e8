use serde::{Deserialize, Serialize};

/// Unique name of a product catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(pub String);

impl ProductName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Non-fatal observation attached to a product's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportNote {
    /// Selection stopped with parts still uncovered because no remaining
    /// candidate covered any of them
    PartialCoverage {
        uncovered: usize,
        /// How many of the uncovered parts are shorter than the minimum length
        shorter_than_min_len: usize,
    },
    /// No candidate substrings remained for this product after filtering
    EmptyUniverse { reason: EmptyUniverseReason },
}

/// Why a product ended up with no candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyUniverseReason {
    /// The catalog has no parts at all
    NoParts,
    /// Every part is shorter than the minimum length
    NoCandidates,
    /// Every generated candidate also occurs in another catalog
    AllShared,
}

impl std::fmt::Display for ReportNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PartialCoverage {
                uncovered,
                shorter_than_min_len,
            } => {
                write!(
                    f,
                    "{uncovered} part(s) could not be covered by any exclusive substring"
                )?;
                if *shorter_than_min_len > 0 {
                    write!(f, " ({shorter_than_min_len} shorter than the minimum length)")?;
                }
                Ok(())
            }
            Self::EmptyUniverse { reason } => match reason {
                EmptyUniverseReason::NoParts => write!(f, "catalog has no parts; 0 candidates"),
                EmptyUniverseReason::NoCandidates => write!(
                    f,
                    "0 candidates generated: every part is shorter than the minimum length"
                ),
                EmptyUniverseReason::AllShared => write!(
                    f,
                    "0 candidates left: every substring also occurs in another catalog"
                ),
            },
        }
    }
}
