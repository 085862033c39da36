//! The fixture generation pipeline behind `gen-msgpack`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use codec::{
    decode_selected_row, decode_source, encode_selected_row, encode_source, format_pairs,
    generate_source, read_fixture, select_row, write_fixture, CodecLimits, SelectedRow,
    PREVIEW_LEN,
};
use log::info;
use rand::Rng;

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub rows: i64,
    pub cols: i64,
    pub source_out: PathBuf,
    pub selected_row_out: PathBuf,
    /// Read each file back and print a preview.
    pub verbose: bool,
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub source_values: usize,
    pub source_bytes: usize,
    pub selected_row: SelectedRow,
    pub selected_row_bytes: usize,
}

/// Interprets the optional `verbose` positional.
///
/// Any non-empty text enables verbose output, including `"False"` and `"0"`.
/// Only absence or an empty string disables it.
#[must_use]
pub fn verbose_enabled(arg: Option<&str>) -> bool {
    arg.is_some_and(|value| !value.is_empty())
}

/// Generates both fixtures, writes them, and optionally prints previews to `out`.
///
/// Steps run strictly in order: source matrix, its preview, row index, its
/// preview. A failure stops the run where it happens, so the source file may
/// exist without the row file.
pub fn run_generate<R, W>(
    config: &GenerateConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<GenerateReport>
where
    R: Rng + ?Sized,
    W: Write,
{
    // Freshly written files are trusted; only shape is checked on read-back.
    let readback_limits = CodecLimits::unlimited();

    let matrix =
        generate_source(config.rows, config.cols, rng).context("generate source matrix")?;
    let source_bytes = encode_source(&matrix).context("encode source matrix")?;
    write_fixture(&config.source_out, &source_bytes).context("write source matrix")?;
    info!(
        "wrote {} value pairs ({} bytes) to {}",
        matrix.values.len(),
        source_bytes.len(),
        config.source_out.display()
    );

    if config.verbose {
        let bytes = read_fixture(&config.source_out).context("read back source matrix")?;
        let decoded = decode_source(&bytes, &readback_limits).context("decode source matrix")?;
        writeln!(
            out,
            "First {PREVIEW_LEN} values of source: {}",
            format_pairs(decoded.preview(PREVIEW_LEN))
        )?;
    }

    let selected_row = select_row(config.rows, rng).context("select row")?;
    let row_bytes = encode_selected_row(selected_row).context("encode selected row")?;
    write_fixture(&config.selected_row_out, &row_bytes).context("write selected row")?;
    info!(
        "wrote selected row {} to {}",
        selected_row.raw(),
        config.selected_row_out.display()
    );

    if config.verbose {
        let bytes = read_fixture(&config.selected_row_out).context("read back selected row")?;
        let decoded =
            decode_selected_row(&bytes, &readback_limits).context("decode selected row")?;
        writeln!(out, "Selected row index: {}", decoded.raw())?;
    }

    Ok(GenerateReport {
        source_values: matrix.values.len(),
        source_bytes: source_bytes.len(),
        selected_row,
        selected_row_bytes: row_bytes.len(),
    })
}
