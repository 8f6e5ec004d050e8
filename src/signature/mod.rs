//! Signature computation: the three-stage pipeline and its result types.
//!
//! - [`candidates`]: enumerate every substring within a length window per catalog
//! - [`filter`]: drop substrings that occur in any other catalog
//! - [`selector`]: greedy set cover with deterministic tie-breaking
//! - [`report`]: per-product results and the exportable [`SignatureDictionary`]
//! - [`engine`]: [`SignatureSolver`] runs the stages across catalogs
//! - [`classify`]: match new part strings against an exported dictionary
//!
//! ## Tie-breaking
//!
//! Among candidates with the same gain the selector prefers, in order:
//!
//! 1. the shorter substring,
//! 2. the smaller earliest start offset,
//! 3. the candidate discovered first.
//!
//! Discovery order is fixed by generation (parts in order, then offsets, then
//! lengths) and kept by an insertion-ordered map, so results are reproducible.
//!
//! ## Example
//!
//! ```rust
//! use part_signatures::{ProductCatalog, SignatureSolver, SolverConfig};
//!
//! let catalogs = vec![
//!     ProductCatalog::from_parts("A", ["AAXX", "AAYY"]),
//!     ProductCatalog::from_parts("B", ["BBZZ"]),
//! ];
//! let config = SolverConfig::with_lengths(3, 4).non_overlapping(true);
//! let results = SignatureSolver::new(config).solve_catalogs(&catalogs).unwrap();
//!
//! assert_eq!(results[0].selected, vec!["AAX", "AAY"]);
//! ```

pub mod candidates;
pub mod classify;
pub mod config;
pub mod engine;
pub mod filter;
pub mod report;
pub mod selector;

pub use engine::{SignatureSolver, SolveError};
pub use report::{ProductSignatures, SignatureDictionary};
