//! A value paired with the codec that serializes it.

use crate::codec::{Codec, Reader, Writer};
use crate::error::{DecodeError, EncodeError};

/// A value bound to its codec, so call sites need not pass the codec around.
///
/// Everything delegates to the bound codec.
///
/// ```rust
/// use typebin::Bound;
/// use typebin::codec::{SeqCodec, U16Codec};
///
/// let bound = Bound::new(vec![1u16, 2], SeqCodec::new(U16Codec));
/// let hex = bound.encode_hex().unwrap();
/// assert_eq!(hex, "0000000200010002");
///
/// let back = Bound::from_hex(&hex, SeqCodec::new(U16Codec)).unwrap();
/// assert_eq!(back.value(), &vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<T, C> {
    value: T,
    codec: C,
}

impl<T, C: Codec<Value = T>> Bound<T, C> {
    /// Binds `value` to `codec`.
    pub fn new(value: T, codec: C) -> Self {
        Self { value, codec }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Writes the value into `writer`.
    pub fn put(&self, writer: &mut Writer) -> Result<&Self, EncodeError> {
        self.codec.put(writer, &self.value)?;
        Ok(self)
    }

    /// Reads a value from `reader` and binds it to `codec`.
    pub fn get(reader: &mut Reader<'_>, codec: C) -> Result<Self, DecodeError> {
        let value = codec.get(reader)?;
        Ok(Self::new(value, codec))
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.codec.encode(&self.value)
    }

    pub fn encode_base64(&self) -> Result<String, EncodeError> {
        self.codec.encode_base64(&self.value)
    }

    pub fn encode_hex(&self) -> Result<String, EncodeError> {
        self.codec.encode_hex(&self.value)
    }

    pub fn decode(bytes: &[u8], codec: C) -> Result<Self, DecodeError> {
        let value = codec.decode(bytes)?;
        Ok(Self::new(value, codec))
    }

    pub fn decode_base64(text: &str, codec: C) -> Result<Self, DecodeError> {
        let value = codec.decode_base64(text)?;
        Ok(Self::new(value, codec))
    }

    pub fn decode_hex(text: &str, codec: C) -> Result<Self, DecodeError> {
        let value = codec.decode_hex(text)?;
        Ok(Self::new(value, codec))
    }

    /// Alias of [`Bound::decode`].
    pub fn from_bytes(bytes: &[u8], codec: C) -> Result<Self, DecodeError> {
        Self::decode(bytes, codec)
    }

    /// Alias of [`Bound::decode_base64`].
    pub fn from_base64(text: &str, codec: C) -> Result<Self, DecodeError> {
        Self::decode_base64(text, codec)
    }

    /// Alias of [`Bound::decode_hex`].
    pub fn from_hex(text: &str, codec: C) -> Result<Self, DecodeError> {
        Self::decode_hex(text, codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DynamicCodec, StrCodec, U32Codec};
    use crate::model::{Object, Value};

    #[test]
    fn test_bound_delegates() {
        let bound = Bound::new("hey".to_string(), StrCodec);
        assert_eq!(bound.encode().unwrap(), StrCodec.encode(&"hey".to_string()).unwrap());
        assert_eq!(bound.encode_hex().unwrap(), "00000003686579");
        assert_eq!(bound.encode_base64().unwrap(), "AAAAA2hleQ==");

        let back = Bound::from_base64("AAAAA2hleQ==", StrCodec).unwrap();
        assert_eq!(back, bound);
        let back = Bound::from_bytes(&bound.encode().unwrap(), StrCodec).unwrap();
        assert_eq!(back.into_inner(), "hey");
    }

    #[test]
    fn test_bound_put_and_get_share_a_buffer() {
        let mut writer = Writer::new();
        Bound::new(7u32, U32Codec)
            .put(&mut writer)
            .unwrap()
            .put(&mut writer)
            .unwrap();
        Bound::new("x".to_string(), StrCodec).put(&mut writer).unwrap();

        let mut reader = Reader::new(writer.as_bytes());
        assert_eq!(*Bound::get(&mut reader, U32Codec).unwrap().value(), 7);
        assert_eq!(*Bound::get(&mut reader, U32Codec).unwrap().value(), 7);
        assert_eq!(Bound::get(&mut reader, StrCodec).unwrap().value(), "x");
        assert!(reader.is_empty());
    }

    #[test]
    fn test_bound_with_borrowed_codec() {
        let codec = DynamicCodec::new();
        let value = Value::Object(Object::new().with("a", 1));
        let hex = Bound::new(value.clone(), &codec).encode_hex().unwrap();
        let back = Bound::decode_hex(&hex, &codec).unwrap();
        assert_eq!(back.value(), &value);
    }

    #[test]
    fn test_bound_decode_errors_propagate() {
        assert!(matches!(
            Bound::decode_hex("0", U32Codec),
            Err(DecodeError::MalformedHex { .. })
        ));
        assert!(matches!(
            Bound::decode(&[0, 0], U32Codec),
            Err(DecodeError::UnexpectedEof { .. })
        ));
    }
}
