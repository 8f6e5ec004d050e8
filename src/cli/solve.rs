use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::CatalogSet;
use crate::cli::OutputFormat;
use crate::signature::config::{SolverConfig, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use crate::signature::engine::SignatureSolver;
use crate::signature::report::{ProductSignatures, SignatureDictionary};

#[derive(Args)]
pub struct SolveArgs {
    /// Directory of part lists (one file per product), a TSV/CSV file with
    /// product and part columns, or a single part list
    #[arg(required = true)]
    pub input: PathBuf,

    /// Shortest substring length considered (characters)
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    pub min_len: usize,

    /// Longest substring length considered (characters). Candidate generation
    /// grows with this value times the total part length.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Never select two signatures where one contains the other
    #[arg(long)]
    pub non_overlap: bool,

    /// Number of worker threads (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Abort if a catalog yields more distinct candidates than this
    #[arg(long)]
    pub max_candidates: Option<usize>,

    /// Write the selected signatures as a JSON dictionary for `classify`
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Execute solve subcommand
///
/// # Errors
///
/// Returns an error if the parameters are invalid, the input cannot be loaded,
/// or the dictionary cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = SolverConfig {
        min_len: args.min_len,
        max_len: args.max_len,
        non_overlap: args.non_overlap,
        threads: args.threads,
        max_candidates: args.max_candidates,
    };
    // Fail on bad parameters before touching the input
    config.validate()?;

    let set = CatalogSet::load(&args.input)?;

    if verbose {
        eprintln!(
            "Loaded {} catalogs with {} parts from {}",
            set.len(),
            set.total_parts(),
            args.input.display()
        );
    }

    let solver = SignatureSolver::new(config);
    let results = solver.solve(&set)?;

    match format {
        OutputFormat::Text => print_text_results(&results, verbose),
        OutputFormat::Json => print_json_results(&results)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    if let Some(path) = &args.export {
        let dictionary = SignatureDictionary::from_results(&results, solver.config());
        std::fs::write(path, dictionary.to_json()?)?;
        if verbose {
            eprintln!("Wrote signature dictionary to {}", path.display());
        }
    }

    Ok(())
}

fn print_text_results(results: &[ProductSignatures], verbose: bool) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n{}", result.product);
        println!(
            "   Parts: {} total → {} covered, {} uncovered ({:.1}%)",
            result.part_count(),
            result.covered_count(),
            result.uncovered_count,
            result.coverage_fraction() * 100.0
        );
        println!(
            "   Candidates: {} generated, {} exclusive",
            result.generated_candidates, result.exclusive_candidates
        );

        if result.selected.is_empty() {
            println!("\n   Signatures: none");
        } else {
            println!("\n   Signatures:");
            for step in &result.steps {
                println!(
                    "   - {:<16} +{} covered, {} left",
                    step.substring, step.gain, step.remaining_uncovered
                );
            }
        }

        if !result.notes.is_empty() {
            println!("\n   Notes:");
            for note in &result.notes {
                println!("   - {note}");
            }
        }

        // Verbose details
        if verbose && result.uncovered_count > 0 {
            println!("\n   Uncovered parts:");
            for part in result.uncovered_parts() {
                println!("     {part}");
            }
        }
    }

    println!();
}

fn print_json_results(results: &[ProductSignatures]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "product": r.product,
                "signatures": r.selected,
                "steps": r.steps,
                "coverage": {
                    "total": r.part_count(),
                    "covered": r.covered_count(),
                    "uncovered": r.uncovered_count,
                    "fraction": r.coverage_fraction(),
                },
                "covered": r.covered,
                "candidates": {
                    "generated": r.generated_candidates,
                    "exclusive": r.exclusive_candidates,
                },
                "uncovered_parts": r.uncovered_parts().collect::<Vec<_>>(),
                "notes": r.notes.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[ProductSignatures]) {
    println!("product\trank\tsignature\tgain\tremaining_uncovered\ttotal_parts");
    for r in results {
        for (i, step) in r.steps.iter().enumerate() {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.product,
                i + 1,
                step.substring,
                step.gain,
                step.remaining_uncovered,
                r.part_count(),
            );
        }
    }

    // Per-product summary, including products with no signatures
    println!();
    println!("product\ttotal_parts\tcovered\tuncovered\tuncovered_parts\tnotes");
    for r in results {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            r.product,
            r.part_count(),
            r.covered_count(),
            r.uncovered_count,
            r.uncovered_parts().collect::<Vec<_>>().join(","),
            r.notes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        );
    }
}
