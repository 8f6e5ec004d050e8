//! Loaders that turn input files into [`ProductCatalog`](crate::core::catalog::ProductCatalog)s.
//!
//! - **Directory of part lists**: one file per product, one part per line;
//!   the product is named after the file (`pumps.txt` → `pumps`)
//! - **Gzip-compressed part lists**: `pumps.txt.gz`
//! - **TSV/CSV files**: `product<TAB>part` rows for every product in one file
//!
//! ## Example
//!
//! ```rust,no_run
//! use part_signatures::parsing::lines::parse_catalog_dir;
//! use std::path::Path;
//!
//! let catalogs = parse_catalog_dir(Path::new("catalogs/")).unwrap();
//! for catalog in &catalogs {
//!     println!("{}: {} parts", catalog.name, catalog.len());
//! }
//! ```
//!
//! In every format, surrounding whitespace is trimmed and blank or `#` comment
//! lines are skipped before any substring is generated.

pub mod lines;
pub mod tsv;

pub use lines::ParseError;
