//! Configurable limits for bounded decoding.

/// Wire-level limits for message decoding.
///
/// The size check runs before any bytes are parsed, so a hostile or corrupt
/// fixture file cannot drive decoding past the cap. Fixture-shape checks
/// belong to the codec layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum encoded size of a single message in bytes.
    pub max_message_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // A pair encodes to 19 bytes, so this admits tens of millions of pairs.
            max_message_bytes: 1024 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller messages.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_message_bytes: 4096,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_message_bytes: usize::MAX,
        }
    }
}
