//! MessagePack framing with bounded decoding for fixgen fixtures.
//!
//! This crate handles the binary container format: a single self-describing
//! MessagePack message per file, produced and parsed by `rmp-serde`. It does
//! not know about matrices or row indices, only serde types and their bytes.
//!
//! # Design Principles
//!
//! - **Compact layout** - Structs and tuples encode as arrays, never maps.
//! - **Bounded decoding** - Input size is checked against limits before parsing.
//! - **Exactly one value** - Trailing bytes are rejected.

mod error;
mod limits;
mod message;

pub use error::{DecodeError, EncodeError, LimitKind, WireResult};
pub use limits::Limits;
pub use message::{decode, encode};
