//! Limits for fixture decoding.

/// Codec-specific limits enforced when decoding fixture files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// File size cap, checked before parsing.
    pub wire: wire::Limits,
    /// Maximum number of pairs in a source matrix's `values`.
    pub max_source_values: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            wire: wire::Limits::default(),
            max_source_values: 1 << 25,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            wire: wire::Limits::for_testing(),
            max_source_values: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            wire: wire::Limits::unlimited(),
            max_source_values: usize::MAX,
        }
    }
}
