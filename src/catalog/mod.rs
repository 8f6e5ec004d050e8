//! Loading and holding the product catalogs of one run.
//!
//! A [`CatalogSet`](store::CatalogSet) is the ordered collection of every
//! product catalog that takes part in a run. Exclusivity is always relative to
//! the catalogs in the same set: a signature for `pumps` is only guaranteed not
//! to occur in the other catalogs that were loaded alongside it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use part_signatures::CatalogSet;
//! use std::path::Path;
//!
//! // Directory with one part list per product
//! let set = CatalogSet::load(Path::new("catalogs/")).unwrap();
//!
//! // Or a single TSV with product and part columns
//! let set = CatalogSet::load(Path::new("parts.tsv")).unwrap();
//! println!("{} products, {} parts", set.len(), set.total_parts());
//! ```

pub mod store;
