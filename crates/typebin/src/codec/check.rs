//! Self-delimiting check for codecs.
//!
//! Sequence, record, tuple and dynamic-value codecs concatenate sub-encodings
//! without separators, which is only sound when every sub-codec reads back
//! exactly the bytes it wrote. Run hand-written codecs through
//! [`check_self_delimiting`] before composing them.

use std::fmt::Debug;

use thiserror::Error;

use crate::codec::primitives::{Reader, Writer};
use crate::codec::traits::Codec;
use crate::error::{DecodeError, EncodeError};

const PREFIX: &[u8] = &[0xA5, 0x00, 0xFF];
const SUFFIX: &[u8] = &[0x5A, 0x01, 0x00, 0x00, 0x00, 0xFE];

/// Ways a codec can break the self-delimiting or round-trip contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DelimitError {
    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("get consumed {actual} bytes but put wrote {expected}")]
    ConsumedMismatch { expected: usize, actual: usize },

    #[error("decoded value {actual} differs from encoded value {expected}")]
    ValueMismatch { expected: String, actual: String },

    #[error("encoding is not deterministic")]
    NonDeterministic,
}

/// Checks `codec` on `value` with a fixed set of surrounding bytes.
pub fn check_self_delimiting<C>(codec: &C, value: &C::Value) -> Result<(), DelimitError>
where
    C: Codec + ?Sized,
    C::Value: PartialEq + Debug,
{
    check_self_delimiting_with(codec, value, PREFIX, SUFFIX)
}

/// Checks that `codec` writes `value` after `prefix` and reads it back,
/// stopping exactly where `suffix` begins.
///
/// Also checks that two encodings of the same value are byte-identical.
pub fn check_self_delimiting_with<C>(
    codec: &C,
    value: &C::Value,
    prefix: &[u8],
    suffix: &[u8],
) -> Result<(), DelimitError>
where
    C: Codec + ?Sized,
    C::Value: PartialEq + Debug,
{
    let standalone = codec.encode(value)?;
    if codec.encode(value)? != standalone {
        return Err(DelimitError::NonDeterministic);
    }

    let mut writer = Writer::new();
    writer.write_bytes(prefix);
    codec.put(&mut writer, value)?;
    let written = writer.len() - prefix.len();
    writer.write_bytes(suffix);

    let bytes = writer.into_bytes();
    if bytes[prefix.len()..prefix.len() + written] != standalone[..] {
        return Err(DelimitError::NonDeterministic);
    }

    let mut reader = Reader::new(&bytes);
    reader.read_bytes(prefix.len(), "prefix")?;
    let decoded = codec.get(&mut reader)?;
    let consumed = reader.position() - prefix.len();

    if consumed != written {
        return Err(DelimitError::ConsumedMismatch {
            expected: written,
            actual: consumed,
        });
    }
    if &decoded != value {
        return Err(DelimitError::ValueMismatch {
            expected: format!("{value:?}"),
            actual: format!("{decoded:?}"),
        });
    }
    Ok(())
}
