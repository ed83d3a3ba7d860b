//! The [`Codec`] trait and the closure-based codec factory.
//!
//! A codec only has to say how to write one value into a [`Writer`] and how
//! to read one value back from a [`Reader`]. Whole-buffer encode/decode and
//! the hex and base64 text forms are provided on top of those two steps.
//!
//! Both steps must be self-delimiting: `get` consumes exactly the bytes `put`
//! produced, whatever precedes or follows them. Composite codecs rely on this
//! to concatenate sub-encodings with no separators.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};

/// A matched encode/decode pair for one data shape.
///
/// Implementors provide [`put`](Codec::put) and [`get`](Codec::get); every
/// other method is derived. Codecs hold no per-call state, so one codec value
/// can serve any number of concurrent encode/decode calls.
pub trait Codec {
    /// The type this codec encodes and decodes.
    type Value;

    /// Appends the encoding of `value` to the writer.
    fn put(&self, writer: &mut Writer, value: &Self::Value) -> Result<(), EncodeError>;

    /// Reads one value from the reader, consuming exactly the bytes `put` wrote.
    fn get(&self, reader: &mut Reader<'_>) -> Result<Self::Value, DecodeError>;

    /// Encodes `value` into a fresh byte vector.
    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>, EncodeError> {
        let mut writer = Writer::new();
        self.put(&mut writer, value)?;
        tracing::trace!(len = writer.len(), "encoded value");
        Ok(writer.into_bytes())
    }

    /// Decodes one value from the start of `bytes`.
    ///
    /// Bytes left over after the value are ignored; use
    /// [`decode_exact`](Codec::decode_exact) to reject them.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Value, DecodeError> {
        let mut reader = Reader::new(bytes);
        let value = self.get(&mut reader)?;
        if !reader.is_empty() {
            tracing::debug!(
                remaining = reader.remaining_len(),
                "ignoring trailing bytes after decoded value"
            );
        }
        tracing::trace!(consumed = reader.position(), "decoded value");
        Ok(value)
    }

    /// Decodes one value that must span all of `bytes`.
    fn decode_exact(&self, bytes: &[u8]) -> Result<Self::Value, DecodeError> {
        let mut reader = Reader::new(bytes);
        let value = self.get(&mut reader)?;
        if !reader.is_empty() {
            let remaining = reader.remaining_len();
            tracing::debug!(remaining, "rejecting trailing bytes after decoded value");
            return Err(DecodeError::TrailingBytes { remaining });
        }
        Ok(value)
    }

    /// Encodes `value` as standard-alphabet base64 with padding.
    fn encode_base64(&self, value: &Self::Value) -> Result<String, EncodeError> {
        Ok(STANDARD.encode(self.encode(value)?))
    }

    /// Decodes a value from standard-alphabet base64.
    ///
    /// Like [`decode_hex`](Codec::decode_hex), empty text is zero bytes.
    fn decode_base64(&self, text: &str) -> Result<Self::Value, DecodeError> {
        let bytes = STANDARD.decode(text)?;
        self.decode(&bytes)
    }

    /// Encodes `value` as lowercase hex, two digits per byte.
    fn encode_hex(&self, value: &Self::Value) -> Result<String, EncodeError> {
        Ok(hex::encode(self.encode(value)?))
    }

    /// Decodes a value from hex text.
    ///
    /// Odd-length input or a non-hex character fails with
    /// [`DecodeError::MalformedHex`]. Empty text is accepted as zero bytes,
    /// so codecs whose encoding is empty (such as a record with no fields)
    /// round-trip; any codec that needs bytes then fails with
    /// [`DecodeError::UnexpectedEof`].
    fn decode_hex(&self, text: &str) -> Result<Self::Value, DecodeError> {
        let bytes = hex::decode(text)?;
        self.decode(&bytes)
    }
}

impl<C: Codec + ?Sized> Codec for &C {
    type Value = C::Value;

    fn put(&self, writer: &mut Writer, value: &Self::Value) -> Result<(), EncodeError> {
        (**self).put(writer, value)
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<Self::Value, DecodeError> {
        (**self).get(reader)
    }
}

macro_rules! forward_codec {
    ($($ptr:ident),*) => {
        $(
            impl<C: Codec + ?Sized> Codec for $ptr<C> {
                type Value = C::Value;

                fn put(&self, writer: &mut Writer, value: &Self::Value) -> Result<(), EncodeError> {
                    (**self).put(writer, value)
                }

                fn get(&self, reader: &mut Reader<'_>) -> Result<Self::Value, DecodeError> {
                    (**self).get(reader)
                }
            }
        )*
    };
}

forward_codec!(Box, Rc, Arc);

// =============================================================================
// FACTORY
// =============================================================================

/// A codec built from a pair of closures. See [`from_fn`].
pub struct FnCodec<T, P, G> {
    put: P,
    get: G,
    _value: PhantomData<fn() -> T>,
}

/// Builds a codec from a write step and a read step.
///
/// The two closures must be mutual inverses and self-delimiting.
///
/// ```rust
/// use typebin::codec::{from_fn, Codec};
///
/// // A point stored as two big-endian i32s.
/// let point = from_fn(
///     |w, p: &(i32, i32)| {
///         w.write_i32(p.0);
///         w.write_i32(p.1);
///         Ok(())
///     },
///     |r| Ok((r.read_i32("point.x")?, r.read_i32("point.y")?)),
/// );
///
/// let bytes = point.encode(&(1, -1)).unwrap();
/// assert_eq!(bytes, [0, 0, 0, 1, 0xFF, 0xFF, 0xFF, 0xFF]);
/// assert_eq!(point.decode(&bytes).unwrap(), (1, -1));
/// ```
pub fn from_fn<T, P, G>(put: P, get: G) -> FnCodec<T, P, G>
where
    P: Fn(&mut Writer, &T) -> Result<(), EncodeError>,
    G: Fn(&mut Reader<'_>) -> Result<T, DecodeError>,
{
    FnCodec {
        put,
        get,
        _value: PhantomData,
    }
}

impl<T, P, G> Codec for FnCodec<T, P, G>
where
    P: Fn(&mut Writer, &T) -> Result<(), EncodeError>,
    G: Fn(&mut Reader<'_>) -> Result<T, DecodeError>,
{
    type Value = T;

    fn put(&self, writer: &mut Writer, value: &T) -> Result<(), EncodeError> {
        (self.put)(writer, value)
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<T, DecodeError> {
        (self.get)(reader)
    }
}

impl<T, P: Clone, G: Clone> Clone for FnCodec<T, P, G> {
    fn clone(&self) -> Self {
        Self {
            put: self.put.clone(),
            get: self.get.clone(),
            _value: PhantomData,
        }
    }
}

impl<T, P, G> fmt::Debug for FnCodec<T, P, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec")
            .field("value", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
