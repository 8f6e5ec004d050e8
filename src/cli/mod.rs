//! Command-line interface for part-signatures.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **solve**: Compute exclusive substring signatures for every product catalog
//! - **classify**: Match part numbers against an exported signature dictionary
//!
//! ## Usage
//!
//! ```text
//! # One part list per product in a directory
//! part-signatures solve catalogs/ --min-len 3 --max-len 6
//!
//! # Single TSV with product and part columns, no nested signatures
//! part-signatures solve parts.tsv --non-overlap
//!
//! # JSON output and an exported dictionary for later classification
//! part-signatures solve catalogs/ --format json --export signatures.json
//!
//! # Classify new part numbers from stdin
//! cat new_parts.txt | part-signatures classify signatures.json -
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod solve;

#[derive(Parser)]
#[command(name = "part-signatures")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find short substrings that uniquely identify each product catalog")]
#[command(
    long_about = "part-signatures takes several product catalogs of part numbers and computes, for each product, a small set of substrings that never occur in any other product's part numbers and that together match as many of its own part numbers as possible.\n\nSelection is a greedy set cover:\n- Candidates are every substring within a length window\n- Substrings shared with another catalog are discarded\n- The substring matching the most uncovered parts is picked until no candidate helps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute signatures for every product catalog
    Solve(solve::SolveArgs),

    /// Classify part numbers with an exported signature dictionary
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
