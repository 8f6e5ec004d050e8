use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::catalog::ProductCatalog;
use crate::core::types::ProductName;
use crate::parsing::lines::{parse_catalog_dir, parse_catalog_file, ParseError};
use crate::parsing::tsv::parse_tsv_file;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to load catalogs: {0}")]
    LoadError(#[from] ParseError),

    #[error("Duplicate product name: {0}")]
    DuplicateProduct(ProductName),
}

/// Input layout recognised by [`CatalogSet::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// Directory of per-product part lists
    Directory,
    /// Single `product<TAB>part` file
    Tsv,
    /// Single `product,part` file
    Csv,
    /// Single part list (one product)
    PartList,
}

impl InputLayout {
    /// Detect layout from the path
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        if path.is_dir() {
            return Self::Directory;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("tsv") => Self::Tsv,
            Some("csv") => Self::Csv,
            _ => Self::PartList,
        }
    }
}

/// All product catalogs of one run, in load order
#[derive(Debug, Default)]
pub struct CatalogSet {
    catalogs: Vec<ProductCatalog>,

    /// Index: product name -> index in catalogs vec
    name_to_index: HashMap<ProductName, usize>,
}

impl CatalogSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Load catalogs from a directory, a TSV/CSV file, or a single part list
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LoadError` if the input cannot be parsed, or
    /// `CatalogError::DuplicateProduct` if two catalogs share a name.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let catalogs = match InputLayout::detect(path) {
            InputLayout::Directory => parse_catalog_dir(path)?,
            InputLayout::Tsv => parse_tsv_file(path, '\t')?,
            InputLayout::Csv => parse_tsv_file(path, ',')?,
            InputLayout::PartList => vec![parse_catalog_file(path)?],
        };
        Self::from_catalogs(catalogs)
    }

    /// Build from already-loaded catalogs
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProduct` if two catalogs share a name.
    pub fn from_catalogs(catalogs: Vec<ProductCatalog>) -> Result<Self, CatalogError> {
        let mut set = Self::new();
        for catalog in catalogs {
            set.add_catalog(catalog)?;
        }
        Ok(set)
    }

    /// Add a catalog to the set
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProduct` if the name is already present.
    pub fn add_catalog(&mut self, catalog: ProductCatalog) -> Result<(), CatalogError> {
        if self.name_to_index.contains_key(&catalog.name) {
            return Err(CatalogError::DuplicateProduct(catalog.name));
        }
        self.name_to_index
            .insert(catalog.name.clone(), self.catalogs.len());
        self.catalogs.push(catalog);
        Ok(())
    }

    /// Get a catalog by product name
    pub fn get(&self, name: &ProductName) -> Option<&ProductCatalog> {
        self.name_to_index.get(name).map(|&idx| &self.catalogs[idx])
    }

    /// Catalogs in load order
    pub fn catalogs(&self) -> &[ProductCatalog] {
        &self.catalogs
    }

    /// Total parts across all catalogs
    pub fn total_parts(&self) -> usize {
        self.catalogs.iter().map(ProductCatalog::len).sum()
    }

    /// Number of catalogs
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
