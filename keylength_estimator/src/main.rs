use anyhow::Context;
use clap::Parser;
use ic_analysis::{
    index_of_coincidence, normalize, scan_key_lengths, split_into_columns, ScanConfig,
    DEFAULT_MAX_KEY_LENGTH, ENGLISH_IC,
};
use log::{debug, info, trace, LevelFilter};

/// Command-line arguments for the key-length estimator program.
#[derive(Parser, Debug)]
#[command(about = "Estimates the key length of a polyalphabetic cipher \
using the Index of Coincidence method")]
struct Cli {
    /// Path to the input file containing the ciphertext
    #[arg(help = "Path to the input file containing the ciphertext")]
    file: String,

    /// Upper bound on candidate key lengths
    #[arg(short, long, default_value_t = DEFAULT_MAX_KEY_LENGTH,
          help = "Upper bound on candidate key lengths")]
    max_key_length: usize,

    /// Expected IC of the plaintext language
    #[arg(short, long, default_value_t = ENGLISH_IC,
          help = "Expected index of coincidence of the plaintext language")]
    reference_ic: f64,

    /// Verbosity level (-v per-candidate, -vv per-column, -vvv input dump)
    #[arg(short, long, action = clap::ArgAction::Count,
          help = "Increase verbosity (-v, -vv, -vvv)")]
    verbose: u8,
}

/// Main entry point for the key-length estimator.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Map the -v count onto log levels
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Read the ciphertext from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read input file '{}'", cli.file))?;

    // Reduce to uppercase letters before analysis
    let text = normalize(&content);
    trace!("normalized input: {}", text);

    let config = ScanConfig {
        max_key_length: cli.max_key_length,
        reference_ic: cli.reference_ic,
    };

    // Scan all candidate key lengths
    let scan = scan_key_lengths(&text, &config)?;

    for candidate in &scan.candidates {
        info!("trying key length {}...", candidate.key_length);
        if log::log_enabled!(log::Level::Debug) {
            for (i, column) in split_into_columns(&text, candidate.key_length)
                .iter()
                .enumerate()
            {
                debug!(
                    "column {}: IC={:.6} | {}",
                    i + 1,
                    index_of_coincidence(column),
                    column
                );
            }
        }
        println!(
            "key length {:>3}: aggregate IC = {:.6}",
            candidate.key_length, candidate.aggregate_ic
        );
    }

    println!(
        "Most likely key length: {0} (or any factors of {0})",
        scan.best.key_length
    );
    println!("Index of coincidence: {:.6}", scan.best.aggregate_ic);

    Ok(())
}
