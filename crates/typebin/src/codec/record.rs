//! Record combinator.
//!
//! A record codec writes a fixed, ordered list of fields back to back: no
//! field names, no length prefix. It is a closed codec, so the decoding side
//! must be built with the same fields in the same order.
//!
//! ```rust
//! use typebin::codec::{Codec, RecordCodec, StrCodec, U8Codec};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u8,
//! }
//!
//! let codec = RecordCodec::<User>::builder()
//!     .field("name", StrCodec, |u| &u.name, |u, v| u.name = v)
//!     .field("age", U8Codec, |u| &u.age, |u, v| u.age = v)
//!     .build()
//!     .unwrap();
//!
//! let user = User { name: "Ada".into(), age: 36 };
//! let bytes = codec.encode(&user).unwrap();
//! assert_eq!(bytes, [0, 0, 0, 3, b'A', b'd', b'a', 36]);
//! assert_eq!(codec.decode(&bytes).unwrap(), user);
//! ```

use std::fmt;

use rustc_hash::FxHashSet;

use crate::codec::primitives::{Reader, Writer};
use crate::codec::traits::Codec;
use crate::error::{DecodeError, EncodeError, SchemaError};

/// Reads and writes one field of `R`.
trait FieldCodec<R>: Send + Sync {
    fn put(&self, writer: &mut Writer, record: &R) -> Result<(), EncodeError>;
    fn get_into(&self, reader: &mut Reader<'_>, record: &mut R) -> Result<(), DecodeError>;
}

struct Accessor<C, G, S> {
    codec: C,
    get: G,
    set: S,
}

impl<R, C, G, S> FieldCodec<R> for Accessor<C, G, S>
where
    C: Codec + Send + Sync,
    G: Fn(&R) -> &C::Value + Send + Sync,
    S: Fn(&mut R, C::Value) + Send + Sync,
{
    fn put(&self, writer: &mut Writer, record: &R) -> Result<(), EncodeError> {
        self.codec.put(writer, (self.get)(record))
    }

    fn get_into(&self, reader: &mut Reader<'_>, record: &mut R) -> Result<(), DecodeError> {
        let value = self.codec.get(reader)?;
        (self.set)(record, value);
        Ok(())
    }
}

struct Field<R> {
    name: String,
    codec: Box<dyn FieldCodec<R>>,
}

/// Codec for a fixed-shape record `R`.
///
/// Built with [`RecordCodec::builder`]. Decoding starts from `R::default()`
/// and assigns each field in declaration order.
pub struct RecordCodec<R> {
    fields: Vec<Field<R>>,
}

impl<R: Default> RecordCodec<R> {
    /// Starts a new record schema with no fields.
    pub fn builder() -> RecordBuilder<R> {
        RecordBuilder { fields: Vec::new() }
    }

    /// Returns the field names in wire order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<R: Default> Codec for RecordCodec<R> {
    type Value = R;

    fn put(&self, writer: &mut Writer, value: &R) -> Result<(), EncodeError> {
        for field in &self.fields {
            field.codec.put(writer, value)?;
        }
        Ok(())
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<R, DecodeError> {
        let mut record = R::default();
        for field in &self.fields {
            field.codec.get_into(reader, &mut record)?;
        }
        Ok(record)
    }
}

impl<R> fmt::Debug for RecordCodec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCodec")
            .field("fields", &self.fields.iter().map(|f| &f.name).collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`RecordCodec`].
pub struct RecordBuilder<R> {
    fields: Vec<Field<R>>,
}

impl<R: Default> RecordBuilder<R> {
    /// Appends a field.
    ///
    /// `get` borrows the field out of a record for encoding; `set` stores a
    /// decoded value back into a record.
    pub fn field<C, G, S>(mut self, name: impl Into<String>, codec: C, get: G, set: S) -> Self
    where
        C: Codec + Send + Sync + 'static,
        G: Fn(&R) -> &C::Value + Send + Sync + 'static,
        S: Fn(&mut R, C::Value) + Send + Sync + 'static,
        R: 'static,
    {
        self.fields.push(Field {
            name: name.into(),
            codec: Box::new(Accessor { codec, get, set }),
        });
        self
    }

    /// Finishes the schema, rejecting duplicate field names.
    pub fn build(self) -> Result<RecordCodec<R>, SchemaError> {
        let mut seen = FxHashSet::with_capacity_and_hasher(self.fields.len(), Default::default());
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(RecordCodec {
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::check::check_self_delimiting;
    use crate::codec::scalar::{BoolCodec, BytesCodec, F64Codec, I16Codec, StrCodec};
    use crate::codec::seq::SeqCodec;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Reading {
        sensor: String,
        offset: i16,
        samples: Vec<f64>,
        calibrated: bool,
        raw: Vec<u8>,
    }

    fn reading_codec() -> RecordCodec<Reading> {
        RecordCodec::<Reading>::builder()
            .field("sensor", StrCodec, |r| &r.sensor, |r, v| r.sensor = v)
            .field("offset", I16Codec, |r| &r.offset, |r, v| r.offset = v)
            .field("samples", SeqCodec::new(F64Codec), |r| &r.samples, |r, v| r.samples = v)
            .field("calibrated", BoolCodec, |r| &r.calibrated, |r, v| r.calibrated = v)
            .field("raw", BytesCodec, |r| &r.raw, |r, v| r.raw = v)
            .build()
            .unwrap()
    }

    fn sample() -> Reading {
        Reading {
            sensor: "t-1".to_string(),
            offset: -3,
            samples: vec![20.5, 21.0],
            calibrated: true,
            raw: vec![9, 8, 7],
        }
    }

    #[test]
    fn test_record_roundtrip() {
        let codec = reading_codec();
        check_self_delimiting(&codec, &sample()).unwrap();
        check_self_delimiting(&codec, &Reading::default()).unwrap();
    }

    #[test]
    fn test_record_wire_is_field_concatenation() {
        let codec = reading_codec();
        let value = sample();

        let mut expected = Vec::new();
        expected.extend(StrCodec.encode(&value.sensor).unwrap());
        expected.extend(I16Codec.encode(&value.offset).unwrap());
        expected.extend(SeqCodec::new(F64Codec).encode(&value.samples).unwrap());
        expected.extend(BoolCodec.encode(&value.calibrated).unwrap());
        expected.extend(BytesCodec.encode(&value.raw).unwrap());

        assert_eq!(codec.encode(&value).unwrap(), expected);
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let codec = reading_codec();
        let names: Vec<_> = codec.field_names().collect();
        assert_eq!(names, ["sensor", "offset", "samples", "calibrated", "raw"]);
        assert_eq!(codec.len(), 5);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = RecordCodec::<Reading>::builder()
            .field("sensor", StrCodec, |r| &r.sensor, |r, v| r.sensor = v)
            .field("sensor", StrCodec, |r| &r.sensor, |r, v| r.sensor = v)
            .build();
        assert_eq!(
            result.err(),
            Some(SchemaError::DuplicateField {
                name: "sensor".to_string()
            })
        );
    }

    #[test]
    fn test_empty_record_is_zero_width() {
        let codec = RecordCodec::<Reading>::builder().build().unwrap();
        assert!(codec.is_empty());
        assert_eq!(codec.encode(&sample()).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.encode_hex(&sample()).unwrap(), "");
        assert_eq!(codec.decode_hex("").unwrap(), Reading::default());
    }

    #[test]
    fn test_truncated_record_fails() {
        let codec = reading_codec();
        let bytes = codec.encode(&sample()).unwrap();
        for cut in [0, 3, 8, bytes.len() - 1] {
            assert!(
                matches!(codec.decode(&bytes[..cut]), Err(DecodeError::UnexpectedEof { .. })),
                "cut at {cut}"
            );
        }
    }

    #[test]
    fn test_record_in_sequence() {
        let codec = SeqCodec::new(reading_codec());
        let value = vec![sample(), Reading::default(), sample()];
        check_self_delimiting(&codec, &value).unwrap();
    }
}
