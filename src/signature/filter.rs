//! Cross-catalog uniqueness filter.
//!
//! A candidate survives only if it is not a literal, case-sensitive substring
//! of any part in any other catalog. Instead of scanning every foreign part for
//! every candidate, each catalog's parts are indexed once into the set of all
//! their substrings within the candidates' length range. A candidate of length
//! `k` occurs in a part iff it is one of that part's length-`k` substrings, so
//! the set lookup is exactly equivalent to the scan.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use crate::core::catalog::ProductCatalog;
use crate::signature::candidates::{char_boundaries, CandidateUniverse};

/// Every substring of a catalog's parts within a length window
struct SubstringIndex<'a> {
    substrings: HashSet<&'a str>,
}

impl<'a> SubstringIndex<'a> {
    fn build(parts: &'a [String], min_len: usize, max_len: usize) -> Self {
        let mut substrings = HashSet::new();
        for part in parts {
            let bounds = char_boundaries(part);
            let char_count = bounds.len() - 1;
            for offset in 0..char_count {
                let longest = max_len.min(char_count - offset);
                for len in min_len..=longest {
                    substrings.insert(&part[bounds[offset]..bounds[offset + len]]);
                }
            }
        }
        Self { substrings }
    }

    fn contains(&self, substring: &str) -> bool {
        self.substrings.contains(substring)
    }
}

/// Remove from each catalog's universe every candidate that occurs in another
/// catalog.
///
/// `universes[i]` must belong to `catalogs[i]`. Universes that end up empty are
/// returned as-is; that is a valid outcome, not an error.
///
/// # Panics
///
/// Panics if `universes` and `catalogs` differ in length.
#[must_use]
pub fn filter_cross_catalog(
    universes: Vec<CandidateUniverse>,
    catalogs: &[ProductCatalog],
) -> Vec<CandidateUniverse> {
    assert_eq!(
        universes.len(),
        catalogs.len(),
        "one candidate universe per catalog"
    );

    let Some((min_len, max_len)) = universes
        .iter()
        .filter_map(CandidateUniverse::length_range)
        .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    else {
        return universes;
    };

    let indexes: Vec<SubstringIndex<'_>> = catalogs
        .par_iter()
        .map(|catalog| SubstringIndex::build(&catalog.parts, min_len, max_len))
        .collect();

    universes
        .into_par_iter()
        .enumerate()
        .map(|(owner, mut universe)| {
            let before = universe.len();
            universe.retain(|candidate| {
                !indexes
                    .iter()
                    .enumerate()
                    .any(|(other, index)| {
                        other != owner && index.contains(&candidate.substring)
                    })
            });
            debug!(
                "{}: {} of {} candidates are exclusive",
                catalogs[owner].name,
                universe.len(),
                before
            );
            universe
        })
        .collect()
}

/// Direct scan: does `substring` occur in any part of a catalog other than
/// `owner`?
#[must_use]
pub fn occurs_in_other_catalog(
    substring: &str,
    owner: usize,
    catalogs: &[ProductCatalog],
) -> bool {
    catalogs
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != owner)
        .any(|(_, catalog)| catalog.parts.iter().any(|part| part.contains(substring)))
}
