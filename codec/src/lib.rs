//! Randomized matrix fixtures and their MessagePack encoding.
//!
//! This is the main fixture crate that builds on wire to generate, encode,
//! store, and decode the two fixture files:
//!
//! - a source matrix `[rows, cols, [[re, im], ...]]` of uniform draws in `[-1.0, 1.0]`
//! - a selected row index, one integer in `[0, rows-1]`
//!
//! # Design Principles
//!
//! - **Caller-owned randomness** - Generators take the RNG as a parameter.
//! - **Exact round trips** - Integers and float64 values decode bit-for-bit.
//! - **Convention, not schema** - `rows * cols` is not enforced on decode.

mod error;
mod fixture;
mod generate;
mod io;
mod limits;
mod preview;
mod types;

pub use error::{CodecError, CodecResult, LimitKind};
pub use fixture::{decode_selected_row, decode_source, encode_selected_row, encode_source};
pub use generate::{generate_source, select_row, VALUE_MAX, VALUE_MIN};
pub use io::{read_fixture, write_fixture};
pub use limits::CodecLimits;
pub use preview::{format_pairs, PREVIEW_LEN};
pub use types::{entry_count, SelectedRow, SourceMatrix, ValuePair};
