use anyhow::Result;
use clap::Parser;
use mrf_index_filter::config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
use mrf_index_filter::filter::run_files;
use std::path::PathBuf;

/// Extract qualifying in-network file URLs from a price-transparency index
#[derive(Parser, Debug)]
#[command(name = "mrf-index-filter")]
#[command(about = "Stream a price-transparency index and extract NY PPO in-network file URLs")]
#[command(version)]
struct Args {
    /// Index file to scan (one reporting structure per line)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file for qualifying URLs (created or truncated)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::builder()
        .input(args.input)
        .output(args.output)
        .build()?;

    let stats = run_files(&config)?;

    println!(
        "Scanned {} lines ({} records, {} skipped)",
        stats.lines_read, stats.records_parsed, stats.lines_skipped
    );
    println!(
        "Wrote {} locations to {}",
        stats.locations_emitted,
        config.output.display()
    );
    if stats.duplicates_suppressed > 0 {
        println!(
            "Suppressed {} duplicate descriptions",
            stats.duplicates_suppressed
        );
    }
    if stats.write_failures > 0 {
        eprintln!("Warning: {} locations failed to write", stats.write_failures);
    }

    Ok(())
}
