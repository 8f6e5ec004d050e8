//! Centralized limits and small input helpers.

use std::path::Path;

/// Maximum number of parts allowed in a single catalog (DOS protection)
pub const MAX_PARTS_PER_CATALOG: usize = 1_000_000;

/// Check if adding another part would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new part.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_part_limit(parts.len()).is_some() {
///     return Err(...);
/// }
/// parts.push(new_part); // Safe to add
/// ```
#[must_use]
pub fn check_part_limit(count: usize) -> Option<String> {
    if count >= MAX_PARTS_PER_CATALOG {
        Some(format!(
            "Too many parts: adding another would exceed maximum of {MAX_PARTS_PER_CATALOG}"
        ))
    } else {
        None
    }
}

/// Normalize one input line into a part number.
///
/// Surrounding whitespace is trimmed. Blank lines and `#` comments yield `None`.
///
/// # Examples
///
/// ```
/// use part_signatures::utils::validation::normalize_part;
///
/// assert_eq!(normalize_part("  AB-100\r"), Some("AB-100"));
/// assert_eq!(normalize_part("   "), None);
/// assert_eq!(normalize_part("# comment"), None);
/// ```
#[must_use]
pub fn normalize_part(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line)
    }
}

/// Derive a product name from a catalog file name.
///
/// Strips a trailing `.gz` and then one remaining extension, so
/// `pumps.txt.gz` and `pumps.txt` both become `pumps`.
#[must_use]
pub fn product_name_from_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let without_gz = file_name.strip_suffix(".gz").unwrap_or(file_name);
    let stem = match without_gz.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => without_gz,
    };
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// Hidden files (leading `.`) are never treated as catalogs
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
