//! Codecs for scalar values.
//!
//! | Codec | Value | Wire size |
//! |---|---|---|
//! | [`BoolCodec`] | `bool` | 1 byte |
//! | [`U8Codec`] / [`I8Codec`] | `u8` / `i8` | 1 byte |
//! | [`U16Codec`] / [`I16Codec`] | `u16` / `i16` | 2 bytes, big-endian |
//! | [`U32Codec`] / [`I32Codec`] | `u32` / `i32` | 4 bytes, big-endian |
//! | [`F64Codec`] ([`NumberCodec`]) | `f64` | 8 bytes, big-endian IEEE-754 |
//! | [`StrCodec`] | `String` | u32 byte length + UTF-8 |
//! | [`BytesCodec`] | `Vec<u8>` | u32 length + raw bytes |
//! | [`PackedBoolsCodec`] | `[bool; 8]` | 1 byte |

use crate::codec::primitives::{Reader, Writer};
use crate::codec::traits::Codec;
use crate::error::{DecodeError, EncodeError};

macro_rules! fixed_codec {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $write:ident, $read:ident, $context:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Codec for $name {
            type Value = $ty;

            #[inline]
            fn put(&self, writer: &mut Writer, value: &$ty) -> Result<(), EncodeError> {
                writer.$write(*value);
                Ok(())
            }

            #[inline]
            fn get(&self, reader: &mut Reader<'_>) -> Result<$ty, DecodeError> {
                reader.$read($context)
            }
        }
    };
}

fixed_codec!(
    /// One byte: `0x01` for true, `0x00` for false. Any byte other than `0x01`
    /// decodes as false.
    BoolCodec, bool, write_bool, read_bool, "bool"
);
fixed_codec!(
    /// One raw byte.
    U8Codec, u8, write_u8, read_u8, "u8"
);
fixed_codec!(
    /// One two's-complement byte.
    I8Codec, i8, write_i8, read_i8, "i8"
);
fixed_codec!(
    /// Two bytes, big-endian.
    U16Codec, u16, write_u16, read_u16, "u16"
);
fixed_codec!(
    /// Two bytes, big-endian two's complement.
    I16Codec, i16, write_i16, read_i16, "i16"
);
fixed_codec!(
    /// Four bytes, big-endian.
    U32Codec, u32, write_u32, read_u32, "u32"
);
fixed_codec!(
    /// Four bytes, big-endian two's complement.
    I32Codec, i32, write_i32, read_i32, "i32"
);
fixed_codec!(
    /// Eight bytes, big-endian IEEE-754 double.
    F64Codec, f64, write_f64, read_f64, "f64"
);

/// The number codec of the dynamic value model.
pub type NumberCodec = F64Codec;

/// Length-prefixed UTF-8 text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrCodec;

impl Codec for StrCodec {
    type Value = String;

    fn put(&self, writer: &mut Writer, value: &String) -> Result<(), EncodeError> {
        writer.write_string(value)
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<String, DecodeError> {
        reader.read_string("string")
    }
}

/// Length-prefixed raw bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesCodec;

impl Codec for BytesCodec {
    type Value = Vec<u8>;

    fn put(&self, writer: &mut Writer, value: &Vec<u8>) -> Result<(), EncodeError> {
        writer.write_bytes_prefixed(value)
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<Vec<u8>, DecodeError> {
        reader.read_bytes_prefixed("bytes")
    }
}

/// Eight booleans packed into a single byte.
///
/// Element 0 occupies the most significant bit, so
/// `[true, true, false, false, true, false, false, true]` encodes to `0xC9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedBoolsCodec;

impl Codec for PackedBoolsCodec {
    type Value = [bool; 8];

    fn put(&self, writer: &mut Writer, value: &[bool; 8]) -> Result<(), EncodeError> {
        let byte = value
            .iter()
            .enumerate()
            .filter(|(_, bit)| **bit)
            .fold(0u8, |acc, (i, _)| acc | (1 << (7 - i)));
        writer.write_u8(byte);
        Ok(())
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<[bool; 8], DecodeError> {
        let byte = reader.read_u8("packed_bools")?;
        Ok(std::array::from_fn(|i| (byte >> (7 - i)) & 1 == 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::check::check_self_delimiting;

    #[test]
    fn test_bool_roundtrip() {
        for v in [true, false] {
            check_self_delimiting(&BoolCodec, &v).unwrap();
        }
        assert_eq!(BoolCodec.encode(&true).unwrap(), vec![0x01]);
        assert_eq!(BoolCodec.encode(&false).unwrap(), vec![0x00]);
        assert!(!BoolCodec.decode(&[0x02]).unwrap());
    }

    #[test]
    fn test_integer_roundtrip() {
        for v in [0u8, 1, 127, 128, 255] {
            check_self_delimiting(&U8Codec, &v).unwrap();
        }
        for v in [i8::MIN, -1, 0, i8::MAX] {
            check_self_delimiting(&I8Codec, &v).unwrap();
        }
        for v in [0u16, 255, 256, u16::MAX] {
            check_self_delimiting(&U16Codec, &v).unwrap();
        }
        for v in [i16::MIN, -1, 0, i16::MAX] {
            check_self_delimiting(&I16Codec, &v).unwrap();
        }
        for v in [0u32, 1, 65536, u32::MAX] {
            check_self_delimiting(&U32Codec, &v).unwrap();
        }
        for v in [i32::MIN, -1, 0, i32::MAX] {
            check_self_delimiting(&I32Codec, &v).unwrap();
        }
    }

    #[test]
    fn test_integer_wire_layout() {
        assert_eq!(I8Codec.encode(&-2).unwrap(), vec![0xFE]);
        assert_eq!(U16Codec.encode(&0x1234).unwrap(), vec![0x12, 0x34]);
        assert_eq!(I16Codec.decode(&[0x80, 0x00]).unwrap(), i16::MIN);
        assert_eq!(U32Codec.encode(&1).unwrap(), vec![0, 0, 0, 1]);
        assert_eq!(I32Codec.decode(&[0xFF, 0xFF, 0xFF, 0xFE]).unwrap(), -2);
    }

    #[test]
    fn test_number_roundtrip() {
        for v in [0.0, -1.5, 3.14159, f64::MAX, f64::MIN, f64::INFINITY, f64::NEG_INFINITY] {
            check_self_delimiting(&NumberCodec::default(), &v).unwrap();
        }
        let nan = F64Codec.decode(&F64Codec.encode(&f64::NAN).unwrap()).unwrap();
        assert!(nan.is_nan());
    }

    #[test]
    fn test_string_roundtrip() {
        for s in ["", "hello", "Hello, 你好", "emoji: \u{1F600}"] {
            check_self_delimiting(&StrCodec, &s.to_string()).unwrap();
        }
        assert_eq!(
            StrCodec.encode(&"hi".to_string()).unwrap(),
            vec![0, 0, 0, 2, b'h', b'i']
        );
    }

    #[test]
    fn test_bytes_roundtrip() {
        for b in [vec![], vec![0u8], vec![0xFF; 300]] {
            check_self_delimiting(&BytesCodec, &b).unwrap();
        }
        assert_eq!(BytesCodec.encode(&vec![]).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_truncated_inputs() {
        assert!(matches!(
            U32Codec.decode(&[0, 0, 1]),
            Err(DecodeError::UnexpectedEof { context: "u32" })
        ));
        assert!(matches!(
            F64Codec.decode(&[0; 7]),
            Err(DecodeError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            StrCodec.decode(&[0, 0, 0, 3, b'a']),
            Err(DecodeError::UnexpectedEof { .. })
        ));
        assert!(matches!(BoolCodec.decode(&[]), Err(DecodeError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_packed_bools() {
        let value = [true, true, false, false, true, false, false, true];
        let bytes = PackedBoolsCodec.encode(&value).unwrap();
        assert_eq!(bytes, vec![0b1100_1001]);
        assert_eq!(PackedBoolsCodec.decode(&bytes).unwrap(), value);

        check_self_delimiting(&PackedBoolsCodec, &[false; 8]).unwrap();
        check_self_delimiting(&PackedBoolsCodec, &[true; 8]).unwrap();
        assert_eq!(PackedBoolsCodec.encode(&[true; 8]).unwrap(), vec![0xFF]);
    }
}
