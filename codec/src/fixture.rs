//! Fixture encoding and decoding.
//!
//! Source file payload: `[rows, cols, [[re, im], ...]]`.
//! Row-index file payload: a single integer.

use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;
use crate::types::{SelectedRow, SourceMatrix};

/// Encodes a source matrix.
pub fn encode_source(matrix: &SourceMatrix) -> CodecResult<Vec<u8>> {
    Ok(wire::encode(matrix)?)
}

/// Decodes a source matrix.
///
/// Does not require `values.len() == rows * cols`; use
/// [`SourceMatrix::is_consistent`] when that matters. Integer pair components
/// are widened to floats.
pub fn decode_source(buf: &[u8], limits: &CodecLimits) -> CodecResult<SourceMatrix> {
    let matrix: SourceMatrix = wire::decode(buf, &limits.wire)?;
    if matrix.values.len() > limits.max_source_values {
        return Err(CodecError::LimitsExceeded {
            kind: LimitKind::SourceValues,
            limit: limits.max_source_values,
            actual: matrix.values.len(),
        });
    }
    Ok(matrix)
}

/// Encodes a selected row index.
pub fn encode_selected_row(row: SelectedRow) -> CodecResult<Vec<u8>> {
    Ok(wire::encode(&row)?)
}

/// Decodes a selected row index.
pub fn decode_selected_row(buf: &[u8], limits: &CodecLimits) -> CodecResult<SelectedRow> {
    Ok(wire::decode(buf, &limits.wire)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire::DecodeError;

    fn limits() -> CodecLimits {
        CodecLimits::for_testing()
    }

    #[test]
    fn encode_source_layout() {
        let matrix = SourceMatrix::new(1, 1, vec![[0.5, -1.0]]);
        let bytes = encode_source(&matrix).unwrap();
        let mut expected = vec![0x93, 0x01, 0x01, 0x91, 0x92, 0xcb];
        expected.extend_from_slice(&0.5f64.to_be_bytes());
        expected.push(0xcb);
        expected.extend_from_slice(&(-1.0f64).to_be_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn encode_empty_source() {
        let matrix = SourceMatrix::new(0, 4, Vec::new());
        let bytes = encode_source(&matrix).unwrap();
        assert_eq!(bytes, vec![0x93, 0x00, 0x04, 0x90]);
    }

    #[test]
    fn encode_negative_dimensions() {
        let matrix = SourceMatrix::new(-2, -3, Vec::new());
        let bytes = encode_source(&matrix).unwrap();
        assert_eq!(bytes, vec![0x93, 0xfe, 0xfd, 0x90]);
    }

    #[test]
    fn source_roundtrip_is_exact() {
        let matrix = SourceMatrix::new(
            2,
            2,
            vec![[0.1, -0.2], [1.0, -1.0], [f64::MIN_POSITIVE, -0.0], [0.3, 0.7]],
        );
        let bytes = encode_source(&matrix).unwrap();
        let decoded = decode_source(&bytes, &limits()).unwrap();
        assert_eq!(decoded.rows, 2);
        assert_eq!(decoded.cols, 2);
        for (a, b) in decoded.values.iter().zip(&matrix.values) {
            assert_eq!(a[0].to_bits(), b[0].to_bits());
            assert_eq!(a[1].to_bits(), b[1].to_bits());
        }
    }

    #[test]
    fn selected_row_roundtrip() {
        for raw in [0i64, 1, 127, 128, 65_536, -5] {
            let bytes = encode_selected_row(SelectedRow::new(raw)).unwrap();
            let decoded = decode_selected_row(&bytes, &limits()).unwrap();
            assert_eq!(decoded.raw(), raw);
        }
    }

    #[test]
    fn selected_row_small_index_is_one_byte() {
        let bytes = encode_selected_row(SelectedRow::new(3)).unwrap();
        assert_eq!(bytes, vec![0x03]);
    }

    #[test]
    fn decode_does_not_enforce_dimensions() {
        // rows * cols = 6, but only one pair is present.
        let matrix = SourceMatrix::new(2, 3, vec![[0.0, 0.0]]);
        let bytes = encode_source(&matrix).unwrap();
        let decoded = decode_source(&bytes, &limits()).unwrap();
        assert_eq!(decoded.values.len(), 1);
        assert!(!decoded.is_consistent());
    }

    #[test]
    fn decode_source_wrong_arity() {
        let bytes = wire::encode(&(1i64, 1i64)).unwrap();
        let err = decode_source(&bytes, &limits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_source_not_an_array() {
        let bytes = wire::encode(&4i64).unwrap();
        let err = decode_source(&bytes, &limits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_source_float_dimension() {
        let empty: Vec<[f64; 2]> = Vec::new();
        let bytes = wire::encode(&(1.0f64, 1i64, &empty)).unwrap();
        let err = decode_source(&bytes, &limits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_source_widens_integer_component() {
        let bytes = wire::encode(&(1i64, 1i64, vec![(1i64, 0.5f64)])).unwrap();
        let decoded = decode_source(&bytes, &limits()).unwrap();
        assert_eq!(decoded.values, vec![[1.0, 0.5]]);
    }

    #[test]
    fn decode_source_values_limit() {
        let limits = CodecLimits {
            max_source_values: 1,
            ..CodecLimits::for_testing()
        };
        let matrix = SourceMatrix::new(1, 2, vec![[0.0, 0.0]; 2]);
        let bytes = encode_source(&matrix).unwrap();
        let err = decode_source(&bytes, &limits).unwrap_err();
        assert!(matches!(
            err,
            CodecError::LimitsExceeded {
                kind: LimitKind::SourceValues,
                limit: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn decode_source_file_size_limit() {
        // 256 pairs at 19 bytes each exceed the 4096-byte test cap.
        let matrix = SourceMatrix::new(8, 32, vec![[0.0, 0.0]; 256]);
        let bytes = encode_source(&matrix).unwrap();
        let err = decode_source(&bytes, &limits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::LimitsExceeded { .. })
        ));
    }

    #[test]
    fn decode_selected_row_rejects_float() {
        let bytes = wire::encode(&1.0f64).unwrap();
        let err = decode_selected_row(&bytes, &limits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_truncated_file() {
        let matrix = SourceMatrix::new(1, 1, vec![[0.5, 0.5]]);
        let bytes = encode_source(&matrix).unwrap();
        let err = decode_source(&bytes[..bytes.len() - 1], &limits()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_source_trailing_bytes() {
        let mut bytes = encode_source(&SourceMatrix::new(0, 0, Vec::new())).unwrap();
        bytes.push(0x00);
        let err = decode_source(&bytes, &limits()).unwrap_err();
        assert_eq!(
            err,
            CodecError::Decode(DecodeError::TrailingBytes { remaining: 1 })
        );
    }
}
