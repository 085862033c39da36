//! Reading fixture pairs back for inspection.

use std::fmt::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use codec::{
    decode_selected_row, decode_source, entry_count, format_pairs, read_fixture, CodecLimits,
    PREVIEW_LEN,
};
use serde::Serialize;

/// Summary of a decoded source matrix file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub path: String,
    pub file_bytes: usize,
    pub rows: i64,
    pub cols: i64,
    pub value_count: usize,
    /// `rows * cols`, or `None` when the product overflows.
    pub expected_count: Option<usize>,
    pub consistent: bool,
    pub preview: Vec<[f64; 2]>,
}

/// Summary of a decoded selected-row file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedRowSummary {
    pub path: String,
    pub file_bytes: usize,
    pub index: i64,
    pub within_rows: bool,
    /// Leading entries of the selected row, when the matrix is consistent.
    pub row_preview: Option<Vec<[f64; 2]>>,
}

/// Combined report for a source/row fixture pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub source: SourceSummary,
    pub selected_row: SelectedRowSummary,
}

impl InspectReport {
    /// Human-readable reasons the pair breaks the fixture conventions.
    #[must_use]
    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.source.consistent {
            match self.source.expected_count {
                Some(expected) => out.push(format!(
                    "source holds {} values but rows * cols = {expected}",
                    self.source.value_count
                )),
                None => out.push(format!(
                    "rows * cols overflows for rows={} cols={}",
                    self.source.rows, self.source.cols
                )),
            }
        }
        if !self.selected_row.within_rows {
            out.push(format!(
                "selected row {} is outside [0, {}]",
                self.selected_row.index,
                self.source.rows.saturating_sub(1)
            ));
        }
        out
    }
}

/// Decodes both fixture files and summarizes them.
///
/// With `strict`, a pair that breaks the conventions is an error instead of a
/// report with `consistent`/`within_rows` cleared.
pub fn inspect_fixtures(
    source_path: &Path,
    row_path: &Path,
    limits: &CodecLimits,
    strict: bool,
) -> Result<InspectReport> {
    let source_bytes = read_fixture(source_path).context("read source matrix")?;
    let matrix = decode_source(&source_bytes, limits)
        .with_context(|| format!("decode source matrix {}", source_path.display()))?;

    let row_bytes = read_fixture(row_path).context("read selected row")?;
    let row = decode_selected_row(&row_bytes, limits)
        .with_context(|| format!("decode selected row {}", row_path.display()))?;

    let report = InspectReport {
        source: SourceSummary {
            path: source_path.display().to_string(),
            file_bytes: source_bytes.len(),
            rows: matrix.rows,
            cols: matrix.cols,
            value_count: matrix.values.len(),
            expected_count: entry_count(matrix.rows, matrix.cols).ok(),
            consistent: matrix.is_consistent(),
            preview: matrix.preview(PREVIEW_LEN).to_vec(),
        },
        selected_row: SelectedRowSummary {
            path: row_path.display().to_string(),
            file_bytes: row_bytes.len(),
            index: row.raw(),
            within_rows: row.is_within(matrix.rows),
            row_preview: matrix
                .row(row.raw())
                .map(|entries| entries[..entries.len().min(PREVIEW_LEN)].to_vec()),
        },
    };

    if strict {
        let violations = report.violations();
        if !violations.is_empty() {
            bail!("fixture check failed: {}", violations.join("; "));
        }
    }
    Ok(report)
}

/// Renders an [`InspectReport`] as indented text.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let source = &report.source;
    let row = &report.selected_row;
    let expected = source
        .expected_count
        .map_or_else(|| "overflow".to_string(), |count| count.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "source: {} ({} bytes)", source.path, source.file_bytes);
    let _ = writeln!(out, "  rows: {} cols: {}", source.rows, source.cols);
    let _ = writeln!(
        out,
        "  values: {} (expected {expected})",
        source.value_count
    );
    let _ = writeln!(
        out,
        "  first {PREVIEW_LEN}: {}",
        format_pairs(&source.preview)
    );
    let _ = writeln!(out, "selected row: {} ({} bytes)", row.path, row.file_bytes);
    let _ = write!(out, "  index: {}", row.index);
    if let Some(entries) = &row.row_preview {
        let _ = write!(out, "\n  row first {PREVIEW_LEN}: {}", format_pairs(entries));
    }
    for violation in report.violations() {
        let _ = write!(out, "\nwarning: {violation}");
    }
    out
}
