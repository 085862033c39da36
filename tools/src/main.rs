use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fixgen_tools::{run_generate, verbose_enabled, GenerateConfig};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(
    name = "gen-msgpack",
    version,
    about = "Generate a random source matrix and selected row index as MessagePack fixtures",
    allow_negative_numbers = true
)]
struct Cli {
    /// Number of matrix rows.
    rows: i64,
    /// Number of matrix columns.
    cols: i64,
    /// Output path for the source matrix.
    source_out: PathBuf,
    /// Output path for the selected row index.
    selected_row_out: PathBuf,
    /// Any non-empty value prints a preview of each file after writing.
    #[arg(allow_hyphen_values = true)]
    verbose: Option<String>,
    /// Seed the generator for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = GenerateConfig {
        rows: cli.rows,
        cols: cli.cols,
        source_out: cli.source_out,
        selected_row_out: cli.selected_row_out,
        verbose: verbose_enabled(cli.verbose.as_deref()),
    };

    let mut rng = match cli.seed {
        Some(seed) => {
            debug!("seeding generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let report = run_generate(&config, &mut rng, &mut stdout.lock())?;
    debug!(
        "done: {} values in {} bytes, row {} in {} bytes",
        report.source_values,
        report.source_bytes,
        report.selected_row.raw(),
        report.selected_row_bytes
    );
    Ok(())
}
