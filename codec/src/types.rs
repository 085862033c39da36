//! Core fixture types.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// One complex-like entry: two independent reals.
pub type ValuePair = [f64; 2];

/// Number of entries a `rows x cols` matrix holds.
///
/// The product is taken as-is; a product that is zero or negative yields no
/// entries. Two negative dimensions therefore multiply to a positive count.
pub fn entry_count(rows: i64, cols: i64) -> CodecResult<usize> {
    let product = rows
        .checked_mul(cols)
        .ok_or(CodecError::EntryCountOverflow { rows, cols })?;
    if product <= 0 {
        return Ok(0);
    }
    usize::try_from(product).map_err(|_| CodecError::EntryCountOverflow { rows, cols })
}

/// A generated source matrix, stored flat in row-major order.
///
/// `rows` and `cols` travel alongside `values`; nothing in the encoding ties
/// them together, so a decoded matrix is not guaranteed to be consistent.
/// Serializes as the array `[rows, cols, values]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMatrix {
    pub rows: i64,
    pub cols: i64,
    pub values: Vec<ValuePair>,
}

impl SourceMatrix {
    #[must_use]
    pub const fn new(rows: i64, cols: i64, values: Vec<ValuePair>) -> Self {
        Self { rows, cols, values }
    }

    /// Returns at most the first `len` entries.
    #[must_use]
    pub fn preview(&self, len: usize) -> &[ValuePair] {
        &self.values[..len.min(self.values.len())]
    }

    /// Returns `true` if `values` holds exactly `rows * cols` entries.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        entry_count(self.rows, self.cols).is_ok_and(|count| count == self.values.len())
    }

    /// Returns the entries of one row, if the matrix is consistent and the
    /// row exists.
    #[must_use]
    pub fn row(&self, index: i64) -> Option<&[ValuePair]> {
        if !self.is_consistent() || index < 0 || index >= self.rows {
            return None;
        }
        let cols = usize::try_from(self.cols).ok()?;
        let start = usize::try_from(index).ok()?.checked_mul(cols)?;
        self.values.get(start..start + cols)
    }
}

/// A randomly selected row index. Serializes as a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SelectedRow(i64);

impl SelectedRow {
    /// Creates a new selected row index.
    #[must_use]
    pub const fn new(index: i64) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns `true` if the index lies within `[0, rows-1]`.
    #[must_use]
    pub const fn is_within(self, rows: i64) -> bool {
        self.0 >= 0 && self.0 < rows
    }
}
