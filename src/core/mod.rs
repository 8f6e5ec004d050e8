//! Core data types shared by the loaders and the signature pipeline.
//!
//! - [`ProductCatalog`]: a named, ordered list of part-number strings
//! - [`CoverageSet`]: fixed-size bit set over one catalog's parts
//! - [`ProductName`], [`ReportNote`]: identifiers and result annotations
//!
//! ## Lengths
//!
//! Substring lengths and offsets are counted in characters, not bytes, so a
//! part number containing non-ASCII text is never sliced mid-character.
//! Matching itself is exact and case-sensitive.

pub mod catalog;
pub mod coverage;
pub mod types;

pub use catalog::ProductCatalog;
pub use coverage::CoverageSet;
pub use types::{EmptyUniverseReason, ProductName, ReportNote};
