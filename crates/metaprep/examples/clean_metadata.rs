//! Example: clean a metadata export and print the run report.
//!
//! Usage:
//!   cargo run --example clean_metadata -- <file_path> [keyword]
//!
//! Example:
//!   cargo run --example clean_metadata -- metadata.csv COVID-19

use std::env;
use std::path::Path;

use metaprep::{report, text, Pipeline, SummaryConfig, TokenConfig};

fn main() -> metaprep::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example clean_metadata -- <file_path> [keyword]");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let keyword = args.get(2).map(|s| s.as_str()).unwrap_or("COVID-19");

    if !Path::new(file_path).exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("metaprep: {}", file_path);
    println!("{}", separator);
    println!();

    let pipeline = Pipeline::new();
    let (result, source) = pipeline.process_file(file_path)?;

    println!("## Source");
    println!("  File: {}", source.file);
    println!("  Format: {}", source.format);
    println!("  Hash: {}", source.hash);
    println!("  Rows: {}", source.row_count);
    println!("  Columns: {}", source.column_count);
    println!();

    println!("## Missingness (top 10)");
    for stat in result.profile.iter().take(10) {
        println!(
            "  {:30} {:>6} missing ({:.1}%)",
            stat.column, stat.missing_count, stat.missing_pct
        );
    }
    println!();

    println!("## Cleaning");
    println!("  Columns dropped: {:?}", result.dropped_columns);
    println!("  Rows dropped (no valid date): {}", result.rows_dropped);
    println!(
        "  Cleaned shape: {} rows x {} columns",
        result.table.row_count(),
        result.table.column_count()
    );
    println!();

    let summary = report::summarize(&result.table, &SummaryConfig::for_keyword(keyword))?;
    println!("## Summary");
    println!("  Distinct journals: {}", summary.distinct_categories);
    println!("  With abstract: {}", summary.with_presence);
    println!("  Without abstract: {}", summary.without_presence);
    println!("  Mentioning '{}': {}", keyword, summary.keyword_matches);
    println!();

    if result.table.column_index("title").is_some() {
        println!("## Top title tokens");
        let tokens = text::token_frequency(&result.table, "title", &TokenConfig::default())?;
        for (token, count) in &tokens {
            println!("  {:20} {}", token, count);
        }
        println!();
    }

    if result.table.column_index("publish_year").is_some() {
        println!("## Papers per year");
        for (year, count) in report::year_distribution(&result.table, "publish_year")? {
            println!("  {}  {}", year, count);
        }
        println!();
    }

    println!("{}", separator);

    Ok(())
}
