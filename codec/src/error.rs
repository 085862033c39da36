//! Error types for fixture operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for fixture operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while generating, encoding, decoding, or storing fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Fixture bytes could not be decoded into the expected shape.
    Decode(wire::DecodeError),

    /// Fixture could not be encoded.
    Encode(wire::EncodeError),

    /// `rows * cols` does not fit the platform's address space.
    EntryCountOverflow { rows: i64, cols: i64 },

    /// No row can be selected because the row range `[0, rows-1]` is empty.
    EmptyRowRange { rows: i64 },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Reading or writing a fixture file failed.
    Io {
        path: PathBuf,
        kind: io::ErrorKind,
        message: String,
    },
}

/// Specific limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    SourceValues,
}

impl CodecError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        Self::Io {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "decode error: {e}"),
            Self::Encode(e) => write!(f, "encode error: {e}"),
            Self::EntryCountOverflow { rows, cols } => {
                write!(f, "entry count {rows} * {cols} overflows")
            }
            Self::EmptyRowRange { rows } => {
                write!(
                    f,
                    "empty range for row selection: rows = {rows}, need at least 1"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::Io {
                path,
                kind,
                message,
            } => {
                write!(f, "{} ({kind:?}): {message}", path.display())
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SourceValues => "source values",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::DecodeError> for CodecError {
    fn from(err: wire::DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<wire::EncodeError> for CodecError {
    fn from(err: wire::EncodeError) -> Self {
        Self::Encode(err)
    }
}
