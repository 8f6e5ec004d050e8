use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::catalog::store::CatalogSet;
use crate::core::catalog::ProductCatalog;
use crate::core::types::ProductName;
use crate::signature::candidates::{
    generate_candidates, generate_candidates_bounded, CandidateUniverse,
};
use crate::signature::config::{ConfigError, SolverConfig};
use crate::signature::filter::filter_cross_catalog;
use crate::signature::report::ProductSignatures;
use crate::signature::selector::greedy_select;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("No catalogs supplied")]
    EmptyInput,

    #[error("Catalog '{product}' produced more than {limit} distinct candidates; lower --max-len or raise --max-candidates")]
    CandidateLimit { product: ProductName, limit: usize },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Runs generation, cross-catalog filtering and greedy selection
///
/// Generation and selection are independent per catalog and run in parallel.
/// Filtering only starts once every catalog's candidates exist. Output order
/// always matches input order.
pub struct SignatureSolver {
    config: SolverConfig,
}

impl SignatureSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve every catalog in a loaded set
    ///
    /// # Errors
    ///
    /// See [`SignatureSolver::solve_catalogs`].
    pub fn solve(&self, set: &CatalogSet) -> Result<Vec<ProductSignatures>, SolveError> {
        self.solve_catalogs(set.catalogs())
    }

    /// Compute signatures for each catalog
    ///
    /// # Errors
    ///
    /// Returns `SolveError::Config` for invalid parameters (checked before any
    /// work), `SolveError::EmptyInput` for zero catalogs,
    /// `SolveError::CandidateLimit` if a catalog exceeds `max_candidates`, or
    /// `SolveError::ThreadPool` if a dedicated pool cannot be created.
    pub fn solve_catalogs(
        &self,
        catalogs: &[ProductCatalog],
    ) -> Result<Vec<ProductSignatures>, SolveError> {
        self.config.validate()?;
        if catalogs.is_empty() {
            return Err(SolveError::EmptyInput);
        }

        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| SolveError::ThreadPool(e.to_string()))?;
                pool.install(|| self.run(catalogs))
            }
            None => self.run(catalogs),
        }
    }

    fn run(&self, catalogs: &[ProductCatalog]) -> Result<Vec<ProductSignatures>, SolveError> {
        let SolverConfig {
            min_len,
            max_len,
            non_overlap,
            max_candidates,
            ..
        } = self.config;

        info!(
            "Generating candidates for {} catalogs (lengths {min_len}..={max_len})",
            catalogs.len()
        );
        let universes: Vec<CandidateUniverse> = catalogs
            .par_iter()
            .map(|catalog| match max_candidates {
                Some(limit) => generate_candidates_bounded(&catalog.parts, min_len, max_len, limit)
                    .map_err(|e| SolveError::CandidateLimit {
                        product: catalog.name.clone(),
                        limit: e.limit,
                    }),
                None => Ok(generate_candidates(&catalog.parts, min_len, max_len)),
            })
            .collect::<Result<_, _>>()?;
        let generated: Vec<usize> = universes.iter().map(CandidateUniverse::len).collect();

        info!("Filtering candidates shared between catalogs");
        let universes = filter_cross_catalog(universes, catalogs);
        let exclusive: Vec<usize> = universes.iter().map(CandidateUniverse::len).collect();

        info!(
            "Selecting signatures{}",
            if non_overlap { " (non-overlapping)" } else { "" }
        );
        let results: Vec<ProductSignatures> = universes
            .into_par_iter()
            .zip(catalogs.par_iter())
            .enumerate()
            .map(|(i, (universe, catalog))| {
                let selection = greedy_select(&catalog.parts, universe, non_overlap);
                ProductSignatures::assemble(catalog, selection, generated[i], exclusive[i], min_len)
            })
            .collect();

        for result in &results {
            info!(
                "{}: {} signature(s) cover {}/{} parts",
                result.product,
                result.selected.len(),
                result.covered_count(),
                result.part_count()
            );
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{EmptyUniverseReason, ReportNote};

    fn solve(catalogs: &[ProductCatalog], config: SolverConfig) -> Vec<ProductSignatures> {
        SignatureSolver::new(config).solve_catalogs(catalogs).unwrap()
    }

    #[test]
    fn test_two_catalog_scenario() {
        let catalogs = vec![
            ProductCatalog::from_parts("A", ["AAXX", "AAYY"]),
            ProductCatalog::from_parts("B", ["BBZZ"]),
        ];
        let results = solve(&catalogs, SolverConfig::with_lengths(3, 4).non_overlapping(true));

        assert_eq!(results[0].selected, vec!["AAX", "AAY"]);
        assert_eq!(results[0].covered, vec![true, true]);
        assert_eq!(results[0].uncovered_count, 0);
        assert_eq!(results[1].selected, vec!["BBZ"]);
    }

    #[test]
    fn test_min_len_longer_than_every_part() {
        let catalogs = vec![
            ProductCatalog::from_parts("A", ["SHORT", "TINY"]),
            ProductCatalog::from_parts("B", ["LONGENOUGHPART"]),
        ];
        let results = solve(&catalogs, SolverConfig::with_lengths(10, 12));

        assert!(results[0].selected.is_empty());
        assert_eq!(results[0].covered, vec![false, false]);
        assert_eq!(results[0].generated_candidates, 0);
        assert!(results[0].notes.contains(&ReportNote::EmptyUniverse {
            reason: EmptyUniverseReason::NoCandidates
        }));
        assert_eq!(results[1].uncovered_count, 0);
    }

    #[test]
    fn test_all_shared_note() {
        let catalogs = vec![
            ProductCatalog::from_parts("A", ["SAME"]),
            ProductCatalog::from_parts("B", ["SAME", "OTHER"]),
        ];
        let results = solve(&catalogs, SolverConfig::with_lengths(2, 4));
        assert_eq!(
            results[0].notes[0],
            ReportNote::EmptyUniverse {
                reason: EmptyUniverseReason::AllShared
            }
        );
        assert_eq!(results[1].covered, vec![false, true]);
    }

    #[test]
    fn test_config_checked_before_input() {
        let err = SignatureSolver::new(SolverConfig::with_lengths(4, 2))
            .solve_catalogs(&[])
            .unwrap_err();
        assert!(matches!(err, SolveError::Config(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = SignatureSolver::new(SolverConfig::default())
            .solve_catalogs(&[])
            .unwrap_err();
        assert!(matches!(err, SolveError::EmptyInput));
    }

    #[test]
    fn test_candidate_limit() {
        let catalogs = vec![ProductCatalog::from_parts("big", ["ABCDEFGHIJKLMNOP"])];
        let config = SolverConfig {
            max_candidates: Some(5),
            ..SolverConfig::default()
        };
        let err = SignatureSolver::new(config).solve_catalogs(&catalogs).unwrap_err();
        assert!(matches!(
            err,
            SolveError::CandidateLimit { ref product, limit: 5 } if product.as_str() == "big"
        ));
    }

    #[test]
    fn test_dedicated_pool_matches_global_pool() {
        let catalogs = vec![
            ProductCatalog::from_parts("A", ["AB-100", "AB-200", "AC-300"]),
            ProductCatalog::from_parts("B", ["BD-100", "BD-210"]),
            ProductCatalog::from_parts("C", ["C-1", "C-22", "AB"]),
        ];
        let global = solve(&catalogs, SolverConfig::with_lengths(2, 4));
        let pooled = solve(
            &catalogs,
            SolverConfig {
                threads: Some(2),
                ..SolverConfig::with_lengths(2, 4)
            },
        );
        for (a, b) in global.iter().zip(&pooled) {
            assert_eq!(a.selected, b.selected);
            assert_eq!(a.covered, b.covered);
        }
    }
}
