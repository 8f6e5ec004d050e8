use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::lines::{parse_lines_file, parse_lines_text};
use crate::signature::classify::{Classification, Classifier};
use crate::signature::report::SignatureDictionary;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Signature dictionary written by `solve --export`
    #[arg(required = true)]
    pub dictionary: PathBuf,

    /// Part list to classify, one per line. Use '-' for stdin
    #[arg(required = true)]
    pub parts: PathBuf,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the dictionary or the part list cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    use std::io::{self, Read};

    let dictionary = SignatureDictionary::load_from_file(&args.dictionary)?;

    let parts = if args.parts.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        parse_lines_text(&buffer)?
    } else {
        parse_lines_file(&args.parts)?
    };

    if verbose {
        eprintln!(
            "Classifying {} parts against {} products",
            parts.len(),
            dictionary.products.len()
        );
    }

    let classifier = Classifier::new(&dictionary);
    let classified: Vec<(&str, Classification)> = parts
        .iter()
        .map(|p| (p.as_str(), classifier.classify(p)))
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&classified),
        OutputFormat::Tsv => print_tsv_results(&classified),
        OutputFormat::Json => print_json_results(&classified)?,
    }

    Ok(())
}

fn describe(classification: &Classification) -> (String, String) {
    match classification {
        Classification::Unique { product, matched } => (product.to_string(), matched.join(",")),
        Classification::Ambiguous { products } => (
            "AMBIGUOUS".to_string(),
            products
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Classification::Unknown => ("UNKNOWN".to_string(), String::new()),
    }
}

fn print_text_results(classified: &[(&str, Classification)]) {
    let width = classified
        .iter()
        .map(|(part, _)| part.chars().count())
        .max()
        .unwrap_or(0);

    let (mut unique, mut ambiguous, mut unknown) = (0, 0, 0);
    for (part, classification) in classified {
        let verdict = match classification {
            Classification::Unique { product, matched } => {
                unique += 1;
                format!("{product} (matched {})", matched.join(", "))
            }
            Classification::Ambiguous { products } => {
                ambiguous += 1;
                let names: Vec<String> = products.iter().map(ToString::to_string).collect();
                format!("ambiguous: {}", names.join(", "))
            }
            Classification::Unknown => {
                unknown += 1;
                "unknown".to_string()
            }
        };
        println!("{part:<width$}  → {verdict}");
    }

    println!(
        "\n{} parts: {unique} identified, {ambiguous} ambiguous, {unknown} unknown",
        classified.len()
    );
}

fn print_tsv_results(classified: &[(&str, Classification)]) {
    println!("part\tproduct\tmatched");
    for (part, classification) in classified {
        let (product, matched) = describe(classification);
        println!("{part}\t{product}\t{matched}");
    }
}

fn print_json_results(classified: &[(&str, Classification)]) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = classified
        .iter()
        .map(|(part, classification)| {
            serde_json::json!({
                "part": part,
                "classification": classification,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
