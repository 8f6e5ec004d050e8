//! Properties of the full pipeline that must hold for any input:
//! exclusivity, monotonic coverage, non-overlap, determinism and surfacing of
//! parts too short to ever be covered.

use part_signatures::signature::filter::occurs_in_other_catalog;
use part_signatures::{
    EmptyUniverseReason, ProductCatalog, ProductSignatures, ReportNote, SignatureSolver,
    SolverConfig,
};

fn fixture() -> Vec<ProductCatalog> {
    vec![
        ProductCatalog::from_parts(
            "pumps",
            ["PMP-1001-A", "PMP-1002-B", "PMP-2001-A", "PX-77", "HX-900", "P1"],
        ),
        ProductCatalog::from_parts(
            "valves",
            ["VLV-1001-A", "VLV-3003-C", "VX-77", "HX-901", "V-PMP"],
        ),
        ProductCatalog::from_parts("gears", ["GR-10", "GR-20", "GR-1001", "GEAR-X"]),
        ProductCatalog::from_parts("shared", ["HX-900", "1001"]),
    ]
}

fn solve(catalogs: &[ProductCatalog], config: SolverConfig) -> Vec<ProductSignatures> {
    SignatureSolver::new(config).solve_catalogs(catalogs).unwrap()
}

#[test]
fn test_exclusivity() {
    let catalogs = fixture();
    for non_overlap in [false, true] {
        let config = SolverConfig::with_lengths(2, 5).non_overlapping(non_overlap);
        let results = solve(&catalogs, config);

        for (owner, result) in results.iter().enumerate() {
            for signature in &result.selected {
                assert!(
                    catalogs[owner].parts.iter().any(|p| p.contains(signature.as_str())),
                    "{signature} not found in its own catalog"
                );
                assert!(
                    !occurs_in_other_catalog(signature, owner, &catalogs),
                    "{signature} of {} occurs in another catalog",
                    result.product
                );
            }
        }
    }
}

#[test]
fn test_covered_vector_matches_selection() {
    let catalogs = fixture();
    let results = solve(&catalogs, SolverConfig::with_lengths(2, 4));

    for result in &results {
        for (part, covered) in result.parts.iter().zip(&result.covered) {
            let matched = result.selected.iter().any(|s| part.contains(s.as_str()));
            assert_eq!(matched, *covered, "part {part} of {}", result.product);
        }
        assert_eq!(
            result.covered.iter().filter(|c| !**c).count(),
            result.uncovered_count
        );
    }
}

#[test]
fn test_monotonic_coverage() {
    let results = solve(&fixture(), SolverConfig::with_lengths(2, 6));
    for result in &results {
        let mut previous = result.part_count();
        for step in &result.steps {
            assert!(step.gain > 0);
            assert_eq!(previous - step.gain, step.remaining_uncovered);
            previous = step.remaining_uncovered;
        }
        assert_eq!(previous, result.uncovered_count);
    }
}

#[test]
fn test_non_overlap_invariant() {
    let results = solve(
        &fixture(),
        SolverConfig::with_lengths(1, 6).non_overlapping(true),
    );
    for result in &results {
        for (i, a) in result.selected.iter().enumerate() {
            for b in &result.selected[i + 1..] {
                assert!(
                    !a.contains(b.as_str()) && !b.contains(a.as_str()),
                    "{a} and {b} overlap in {}",
                    result.product
                );
            }
        }
    }
}

#[test]
fn test_determinism() {
    let catalogs = fixture();
    for non_overlap in [false, true] {
        let config = SolverConfig::with_lengths(2, 5).non_overlapping(non_overlap);
        let first = solve(&catalogs, config.clone());
        let second = solve(&catalogs, config);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.selected, b.selected);
            assert_eq!(a.covered, b.covered);
        }
    }
}

#[test]
fn test_short_parts_never_covered() {
    let catalogs = fixture();
    let min_len = 3;
    let results = solve(&catalogs, SolverConfig::with_lengths(min_len, 5));

    for (catalog, result) in catalogs.iter().zip(&results) {
        let short: Vec<usize> = catalog
            .parts
            .iter()
            .enumerate()
            .filter(|(_, p)| p.chars().count() < min_len)
            .map(|(i, _)| i)
            .collect();
        for &i in &short {
            assert!(!result.covered[i]);
        }
        assert!(result.uncovered_count >= short.len());
    }

    // "P1" in pumps is too short
    assert!(results[0].notes.iter().any(|n| matches!(
        n,
        ReportNote::PartialCoverage {
            shorter_than_min_len: 1,
            ..
        }
    )));
}

#[test]
fn test_catalog_fully_shadowed_by_others() {
    // Every substring of "shared" appears in pumps or gears/valves
    let results = solve(&fixture(), SolverConfig::with_lengths(2, 3));
    let shared = &results[3];
    assert_eq!(shared.product.as_str(), "shared");
    assert!(shared.selected.is_empty());
    assert_eq!(shared.exclusive_candidates, 0);
    assert!(shared.notes.contains(&ReportNote::EmptyUniverse {
        reason: EmptyUniverseReason::AllShared
    }));
}

#[test]
fn test_example_scenario() {
    let catalogs = vec![
        ProductCatalog::from_parts("A", ["AAXX", "AAYY"]),
        ProductCatalog::from_parts("B", ["BBZZ"]),
    ];
    let results = solve(
        &catalogs,
        SolverConfig::with_lengths(3, 4).non_overlapping(true),
    );
    assert_eq!(results[0].selected, vec!["AAX", "AAY"]);
    assert_eq!(results[0].covered, vec![true, true]);
    assert_eq!(results[0].uncovered_count, 0);
}

#[test]
fn test_boundary_scenario() {
    let catalogs = vec![
        ProductCatalog::from_parts("A", ["ABC", "DEFGH"]),
        ProductCatalog::from_parts("B", ["XYZ"]),
    ];
    let results = solve(&catalogs, SolverConfig::with_lengths(10, 10));
    for result in &results {
        assert!(result.selected.is_empty());
        assert!(result.covered.iter().all(|c| !c));
        assert_eq!(result.generated_candidates, 0);
        assert!(result.notes.contains(&ReportNote::EmptyUniverse {
            reason: EmptyUniverseReason::NoCandidates
        }));
    }
}
