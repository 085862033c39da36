//! Command-line entry points for producing and checking fixture pairs.
//!
//! Two binaries sit on top of this library:
//!
//! - `gen-msgpack` generates a random source matrix and a selected row index
//! - `fixture-inspect` decodes a pair back and summarizes it
//!
//! The binaries only parse arguments and set up logging; the pipelines live
//! here so they can be driven with a seeded RNG and an in-memory writer.

mod generate;
mod inspect;

pub use generate::{run_generate, verbose_enabled, GenerateConfig, GenerateReport};
pub use inspect::{
    format_inspect_pretty, inspect_fixtures, InspectReport, SelectedRowSummary, SourceSummary,
};
