use serde::Serialize;
use tracing::debug;

use crate::core::coverage::CoverageSet;
use crate::signature::candidates::{Candidate, CandidateUniverse};

/// One iteration of the greedy loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionStep {
    /// Substring chosen in this iteration
    pub substring: String,

    /// Parts newly covered by it
    pub gain: usize,

    /// Parts still uncovered after it was applied
    pub remaining_uncovered: usize,
}

/// Outcome of greedy selection for one catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    /// Chosen substrings in selection order
    pub selected: Vec<String>,

    /// Bit `i` is set iff part `i` contains at least one selected substring
    pub covered: CoverageSet,

    /// Parts not covered by any selected substring
    pub uncovered_count: usize,

    /// Trace of every iteration, parallel to `selected`
    pub steps: Vec<SelectionStep>,
}

/// Ordering key for candidates with equal gain: shorter wins, then the one
/// starting earlier in some part, then the one discovered first.
fn tie_key(candidate: &Candidate, position: usize) -> (usize, usize, usize) {
    (candidate.char_len, candidate.earliest_offset, position)
}

/// Index of the best candidate and its gain, or `None` when no candidate
/// covers any uncovered part.
fn best_candidate(
    universe: &CandidateUniverse,
    uncovered: &CoverageSet,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, (usize, usize, usize))> = None;

    for (position, candidate) in universe.iter().enumerate() {
        let gain = candidate.coverage.intersection_count(uncovered);
        if gain == 0 {
            continue;
        }
        let key = tie_key(candidate, position);
        let better = match &best {
            None => true,
            Some((_, best_gain, best_key)) => {
                gain > *best_gain || (gain == *best_gain && key < *best_key)
            }
        };
        if better {
            best = Some((position, gain, key));
        }
    }

    best.map(|(position, gain, _)| (position, gain))
}

/// Greedy weighted set cover over one catalog's exclusive candidates.
///
/// Each round picks the candidate covering the most still-uncovered parts and
/// marks those parts covered. With `non_overlap`, the winner and every
/// remaining candidate that contains it or is contained in it are dropped;
/// otherwise only the winner is dropped. The loop ends when every part is
/// covered, the universe is empty, or no candidate covers anything new.
///
/// Every round removes at least the winner, so the number of rounds is bounded
/// by the initial universe size.
#[must_use]
pub fn greedy_select<S: AsRef<str>>(
    parts: &[S],
    mut universe: CandidateUniverse,
    non_overlap: bool,
) -> SelectionResult {
    let mut uncovered = CoverageSet::full(parts.len());
    let mut selected = Vec::new();
    let mut steps = Vec::new();

    while uncovered.any() && !universe.is_empty() {
        let Some((position, gain)) = best_candidate(&universe, &uncovered) else {
            break;
        };
        let Some(winner) = universe.get_index(position).cloned() else {
            break;
        };

        uncovered.difference_with(&winner.coverage);
        let remaining_uncovered = uncovered.count();
        debug!(
            "selected {:?}: +{} covered, {} uncovered, {} candidates left",
            winner.substring,
            gain,
            remaining_uncovered,
            universe.len()
        );

        if non_overlap {
            let word = winner.substring.as_str();
            universe.retain(|c| {
                !(word.contains(c.substring.as_str()) || c.substring.contains(word))
            });
        } else {
            universe.remove(&winner.substring);
        }

        steps.push(SelectionStep {
            substring: winner.substring.clone(),
            gain,
            remaining_uncovered,
        });
        selected.push(winner.substring);
    }

    let uncovered_count = uncovered.count();
    SelectionResult {
        selected,
        covered: uncovered.complement(),
        uncovered_count,
        steps,
    }
}
