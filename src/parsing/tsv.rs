use std::collections::HashMap;
use std::path::Path;

use crate::core::catalog::ProductCatalog;
use crate::parsing::lines::ParseError;
use crate::utils::validation::{check_part_limit, normalize_part};

/// Parse a TSV/CSV file with columns: product, part
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_tsv_file(path: &Path, delimiter: char) -> Result<Vec<ProductCatalog>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_tsv_text(&content, delimiter)
}

/// Parse TSV/CSV text with columns: product, part
///
/// Rows are grouped by product; products keep the order in which they first
/// appear, parts keep their row order.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 2 fields or an
/// empty product/part, or no rows are found, or `ParseError::TooManyParts` if
/// a product exceeds the limit.
pub fn parse_tsv_text(text: &str, delimiter: char) -> Result<Vec<ProductCatalog>, ParseError> {
    let mut catalogs: Vec<ProductCatalog> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let Some(line) = normalize_part(line) else {
            continue;
        };

        let fields: Vec<&str> = line.splitn(2, delimiter).collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.trim().to_lowercase()).unwrap_or_default();
            if first == "product" || first == "catalog" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        let product = fields[0].trim();
        let part = fields[1].trim();
        if product.is_empty() || part.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has an empty product or part"
            )));
        }

        let slot = *index.entry(product.to_string()).or_insert_with(|| {
            catalogs.push(ProductCatalog::new(product, Vec::new()));
            catalogs.len() - 1
        });

        // Check part limit for DOS protection
        let parts = &mut catalogs[slot].parts;
        if check_part_limit(parts.len()).is_some() {
            return Err(ParseError::TooManyParts(parts.len()));
        }
        parts.push(part.to_string());
    }

    if catalogs.is_empty() {
        return Err(ParseError::InvalidFormat("No rows found in file".to_string()));
    }

    Ok(catalogs)
}
