//! Random fixture generation.
//!
//! Both generators take the RNG from the caller. Production runs pass an
//! entropy-seeded generator; tests pass a seeded one for reproducibility.

use log::debug;
use rand::Rng;

use crate::error::{CodecError, CodecResult};
use crate::types::{entry_count, SelectedRow, SourceMatrix, ValuePair};

/// Lower bound (inclusive) of every generated component.
pub const VALUE_MIN: f64 = -1.0;
/// Upper bound (inclusive) of every generated component.
pub const VALUE_MAX: f64 = 1.0;

/// Generates a `rows x cols` source matrix.
///
/// Each entry is a pair of independent uniform draws from
/// `[VALUE_MIN, VALUE_MAX]`. Dimensions are not validated; a non-positive
/// product produces an empty matrix.
pub fn generate_source<R: Rng + ?Sized>(
    rows: i64,
    cols: i64,
    rng: &mut R,
) -> CodecResult<SourceMatrix> {
    let count = entry_count(rows, cols)?;
    debug!("generating {count} value pairs for a {rows}x{cols} source matrix");

    let values = (0..count).map(|_| gen_pair(rng)).collect();
    Ok(SourceMatrix::new(rows, cols, values))
}

/// Selects a row index uniformly from `[0, rows-1]`.
pub fn select_row<R: Rng + ?Sized>(rows: i64, rng: &mut R) -> CodecResult<SelectedRow> {
    if rows < 1 {
        return Err(CodecError::EmptyRowRange { rows });
    }
    let index = rng.gen_range(0..rows);
    debug!("selected row {index} of {rows}");
    Ok(SelectedRow::new(index))
}

fn gen_pair<R: Rng + ?Sized>(rng: &mut R) -> ValuePair {
    [gen_val(rng), gen_val(rng)]
}

fn gen_val<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(VALUE_MIN..=VALUE_MAX)
}
