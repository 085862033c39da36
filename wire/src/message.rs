//! Single-message encoding and bounded decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, EncodeError, LimitKind, WireResult};
use crate::limits::Limits;

/// Encodes `value` as one MessagePack message.
///
/// Structs and tuples become arrays, integers take their smallest form, and
/// `f64` is always written as float64.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(rmp_serde::to_vec(value)?)
}

/// Decodes exactly one message from `buf`.
///
/// The size limit is checked before parsing. Bytes left over after the value
/// are an error.
pub fn decode<T: DeserializeOwned>(buf: &[u8], limits: &Limits) -> WireResult<T> {
    if buf.len() > limits.max_message_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::MessageBytes,
            limit: limits.max_message_bytes,
            actual: buf.len(),
        });
    }

    let mut rest = buf;
    let value = {
        let mut de = rmp_serde::Deserializer::new(&mut rest);
        <T as Deserialize>::deserialize(&mut de)?
    };
    if !rest.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: rest.len(),
        });
    }
    Ok(value)
}
