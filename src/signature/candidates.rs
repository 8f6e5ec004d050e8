use indexmap::IndexMap;
use thiserror::Error;

use crate::core::coverage::CoverageSet;

/// A substring seen in one catalog and the parts that contain it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub substring: String,

    /// Bit `i` is set iff `substring` occurs in part `i`
    pub coverage: CoverageSet,

    /// Smallest character offset at which `substring` starts in any part
    pub earliest_offset: usize,

    /// Length in characters
    pub char_len: usize,
}

/// Distinct candidates of one catalog in discovery order
///
/// Discovery order is parts in catalog order, then start offsets ascending, then
/// lengths ascending. The greedy selector relies on it as its last tie-breaker,
/// so the map must never be re-sorted.
#[derive(Debug, Clone, Default)]
pub struct CandidateUniverse {
    entries: IndexMap<String, Candidate>,
}

impl CandidateUniverse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, substring: &str) -> Option<&Candidate> {
        self.entries.get(substring)
    }

    #[must_use]
    pub fn contains(&self, substring: &str) -> bool {
        self.entries.contains_key(substring)
    }

    /// Candidates in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.values()
    }

    /// Substrings in discovery order
    pub fn substrings(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Shortest and longest candidate length in characters
    #[must_use]
    pub fn length_range(&self) -> Option<(usize, usize)> {
        self.iter().fold(None, |acc, c| match acc {
            None => Some((c.char_len, c.char_len)),
            Some((lo, hi)) => Some((lo.min(c.char_len), hi.max(c.char_len))),
        })
    }

    /// Keep only the candidates for which `keep` returns true, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&Candidate) -> bool) {
        self.entries.retain(|_, c| keep(c));
    }

    /// Remove a single candidate, preserving the order of the rest
    pub fn remove(&mut self, substring: &str) -> Option<Candidate> {
        self.entries.shift_remove(substring)
    }

    /// Position of a candidate in discovery order
    #[must_use]
    pub fn position(&self, substring: &str) -> Option<usize> {
        self.entries.get_index_of(substring)
    }

    pub(crate) fn get_index(&self, index: usize) -> Option<&Candidate> {
        self.entries.get_index(index).map(|(_, c)| c)
    }

    fn record(
        &mut self,
        substring: &str,
        part_index: usize,
        part_count: usize,
        offset: usize,
        char_len: usize,
    ) {
        if let Some(candidate) = self.entries.get_mut(substring) {
            candidate.coverage.insert(part_index);
            candidate.earliest_offset = candidate.earliest_offset.min(offset);
            return;
        }
        let mut coverage = CoverageSet::new(part_count);
        coverage.insert(part_index);
        self.entries.insert(
            substring.to_string(),
            Candidate {
                substring: substring.to_string(),
                coverage,
                earliest_offset: offset,
                char_len,
            },
        );
    }
}

/// Returned when a catalog produces more distinct candidates than allowed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("more than {limit} distinct candidate substrings")]
pub struct CandidateLimitExceeded {
    pub limit: usize,
}

/// Byte offset of every character start plus the end of the string
pub(crate) fn char_boundaries(s: &str) -> Vec<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect()
}

/// Enumerate every contiguous substring of `min_len..=max_len` characters in
/// each part and record which parts contain it.
///
/// Cost is O(Σ Lᵢ · (max_len - min_len + 1)) substring instances per catalog,
/// i.e. O(Σ Lᵢ²) when `max_len` is unbounded relative to the part lengths. Keep
/// `max_len` small for catalogs with long strings, or use
/// [`generate_candidates_bounded`].
///
/// Parts shorter than `min_len` contribute nothing; they surface later as
/// permanently uncovered parts.
///
/// # Panics
///
/// Panics if `min_len` is 0. [`SolverConfig::validate`] rejects that window
/// before the solver gets here.
///
/// [`SolverConfig::validate`]: crate::signature::config::SolverConfig::validate
#[must_use]
pub fn generate_candidates<S: AsRef<str>>(
    parts: &[S],
    min_len: usize,
    max_len: usize,
) -> CandidateUniverse {
    match generate(parts, min_len, max_len, None) {
        Ok(universe) => universe,
        Err(_) => unreachable!("unbounded generation cannot exceed a limit"),
    }
}

/// Like [`generate_candidates`], but fails as soon as more than `limit`
/// distinct candidates have been discovered.
///
/// # Errors
///
/// Returns [`CandidateLimitExceeded`] if the catalog yields more than `limit`
/// distinct substrings.
///
/// # Panics
///
/// Panics if `min_len` is 0.
pub fn generate_candidates_bounded<S: AsRef<str>>(
    parts: &[S],
    min_len: usize,
    max_len: usize,
    limit: usize,
) -> Result<CandidateUniverse, CandidateLimitExceeded> {
    generate(parts, min_len, max_len, Some(limit))
}

fn generate<S: AsRef<str>>(
    parts: &[S],
    min_len: usize,
    max_len: usize,
    limit: Option<usize>,
) -> Result<CandidateUniverse, CandidateLimitExceeded> {
    let mut universe = CandidateUniverse::new();
    let part_count = parts.len();
    assert!(min_len >= 1, "minimum candidate length must be at least 1");

    for (part_index, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        let bounds = char_boundaries(part);
        let char_count = bounds.len() - 1;

        for offset in 0..char_count {
            let longest = max_len.min(char_count - offset);
            for len in min_len..=longest {
                let substring = &part[bounds[offset]..bounds[offset + len]];
                universe.record(substring, part_index, part_count, offset, len);
                if let Some(limit) = limit {
                    if universe.len() > limit {
                        return Err(CandidateLimitExceeded { limit });
                    }
                }
            }
        }
    }

    Ok(universe)
}
