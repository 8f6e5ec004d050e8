//! Plain-text catalogs: one part number per line.
//!
//! Files ending in `.gz` are decompressed transparently. Lines are trimmed;
//! blank lines and `#` comments are skipped.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::catalog::ProductCatalog;
use crate::utils::validation::{
    check_part_limit, is_hidden, normalize_part, product_name_from_path, MAX_PARTS_PER_CATALOG,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),

    #[error("Cannot derive a product name from {0}")]
    InvalidName(PathBuf),

    #[error("Too many parts: {0} exceeds maximum allowed ({MAX_PARTS_PER_CATALOG})")]
    TooManyParts(usize),
}

/// Check if the path is gzip-compressed by extension
fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Read parts from any buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure (including invalid UTF-8), or
/// `ParseError::TooManyParts` if the limit is exceeded.
pub fn parse_lines_reader<R: BufRead>(reader: R) -> Result<Vec<String>, ParseError> {
    let mut parts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(part) = normalize_part(&line) {
            if check_part_limit(parts.len()).is_some() {
                return Err(ParseError::TooManyParts(parts.len()));
            }
            parts.push(part.to_string());
        }
    }
    Ok(parts)
}

/// Parse parts from text already in memory
///
/// # Errors
///
/// Returns `ParseError::TooManyParts` if the limit is exceeded.
pub fn parse_lines_text(text: &str) -> Result<Vec<String>, ParseError> {
    parse_lines_reader(text.as_bytes())
}

/// Read parts from a file, decompressing `.gz` files
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyParts` if the limit is exceeded.
pub fn parse_lines_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let file = std::fs::File::open(path)?;
    let reader: Box<dyn Read> = if is_gzipped(path) {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    parse_lines_reader(BufReader::new(reader))
}

/// Load one catalog file, naming the product after the file
///
/// # Errors
///
/// Returns `ParseError::InvalidName` if no product name can be derived, or
/// any error from [`parse_lines_file`].
pub fn parse_catalog_file(path: &Path) -> Result<ProductCatalog, ParseError> {
    let name =
        product_name_from_path(path).ok_or_else(|| ParseError::InvalidName(path.to_path_buf()))?;
    let parts = parse_lines_file(path)?;
    debug!("Loaded {} parts for '{}' from {}", parts.len(), name, path.display());
    Ok(ProductCatalog::new(name, parts))
}

/// Load every regular, non-hidden file in `dir` as a catalog, sorted by file
/// name so runs are reproducible
///
/// # Errors
///
/// Returns `ParseError::Io` if the directory cannot be listed, or any error
/// from [`parse_catalog_file`].
pub fn parse_catalog_dir(dir: &Path) -> Result<Vec<ProductCatalog>, ParseError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && !is_hidden(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| parse_catalog_file(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_lines_text() {
        let text = "AB-100\n  AB-200  \n\n   \n# comment\r\nAB-300\r\n";
        let parts = parse_lines_text(text).unwrap();
        assert_eq!(parts, vec!["AB-100", "AB-200", "AB-300"]);
    }

    #[test]
    fn test_parse_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pumps.txt.gz");
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder.write_all(b"P-100\nP-200\n").unwrap();
        encoder.finish().unwrap();

        let catalog = parse_catalog_file(&path).unwrap();
        assert_eq!(catalog.name.as_str(), "pumps");
        assert_eq!(catalog.parts, vec!["P-100", "P-200"]);
    }

    #[test]
    fn test_parse_catalog_dir_sorted_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("valves.txt"), "V-1\nV-2\n").unwrap();
        std::fs::write(dir.path().join("pumps.txt"), "P-1\n").unwrap();
        std::fs::write(dir.path().join(".hidden"), "X\n").unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        let catalogs = parse_catalog_dir(dir.path()).unwrap();
        let names: Vec<&str> = catalogs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["pumps", "valves"]);
        assert_eq!(catalogs[1].len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_lines_file(Path::new("/nonexistent/catalog.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
