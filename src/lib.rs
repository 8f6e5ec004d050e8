//! # part-signatures
//!
//! A library for finding short substrings that identify which product a part
//! number belongs to.
//!
//! Given several product catalogs, each a list of part-number strings,
//! `part-signatures` computes for every product a small dictionary of
//! substrings that never occur in any other product's part numbers and that
//! together match as many of the product's own part numbers as possible.
//!
//! ## Pipeline
//!
//! 1. **Candidate generation**: every substring within a length window, per catalog
//! 2. **Cross-catalog filter**: drop substrings found in any other catalog
//! 3. **Greedy selection**: repeatedly pick the substring covering the most
//!    uncovered parts, with deterministic tie-breaking and an optional
//!    non-overlap constraint
//!
//! Selection is a greedy approximation of set cover; it does not promise the
//! smallest possible dictionary.
//!
//! ## Example
//!
//! ```rust,no_run
//! use part_signatures::{CatalogSet, SignatureSolver, SolverConfig};
//! use std::path::Path;
//!
//! let set = CatalogSet::load(Path::new("catalogs/")).unwrap();
//! let solver = SignatureSolver::new(SolverConfig::with_lengths(3, 6));
//!
//! for result in solver.solve(&set).unwrap() {
//!     println!("{}: {:?} ({:.1}% covered)",
//!         result.product,
//!         result.selected,
//!         result.coverage_fraction() * 100.0
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Loading the set of product catalogs for a run
//! - [`core`]: Core data types for catalogs, coverage sets, and notes
//! - [`signature`]: Candidate generation, filtering, selection, and reports
//! - [`parsing`]: Part list and TSV/CSV loaders
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod signature;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::CatalogSet;
pub use core::catalog::ProductCatalog;
pub use core::coverage::CoverageSet;
pub use core::types::*;
pub use signature::config::SolverConfig;
pub use signature::engine::{SignatureSolver, SolveError};
pub use signature::report::{ProductSignatures, SignatureDictionary};
