use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use codec::CodecLimits;
use fixgen_tools::{format_inspect_pretty, inspect_fixtures};
use log::info;

#[derive(Parser, Debug)]
#[command(
    name = "fixture-inspect",
    version,
    about = "Decode a source matrix and selected row fixture pair and summarize it"
)]
struct Cli {
    /// Source matrix MessagePack path.
    #[arg(short = 's', long = "source")]
    source: PathBuf,
    /// Selected row index MessagePack path.
    #[arg(short = 'i', long = "index")]
    index: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
    /// Fail when the value count or row index breaks the fixture conventions.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let report = inspect_fixtures(&cli.source, &cli.index, &CodecLimits::default(), cli.strict)?;
    match cli.format {
        OutputFormat::Pretty => println!("{}", format_inspect_pretty(&report)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
    }
    info!("Program completed!");
    Ok(())
}
