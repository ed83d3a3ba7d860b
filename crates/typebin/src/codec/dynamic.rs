//! Self-describing codec for dynamic values.
//!
//! Each value is a one-byte [`ValueTag`] followed by a tag-specific payload:
//!
//! | Tag | Variant | Payload |
//! |---|---|---|
//! | 0 | Null | none |
//! | 1 | Bool | 1 byte |
//! | 2 | Number | 8-byte big-endian f64 |
//! | 3 | String | u32 length + UTF-8 |
//! | 4 | Array | u32 count + values |
//! | 5 | Object | u32 count + (string key, value) pairs |
//! | 6 | Bytes | u32 length + raw bytes |

use rustc_hash::FxHashSet;

use crate::codec::primitives::{Reader, Writer};
use crate::codec::scalar::{BoolCodec, BytesCodec, NumberCodec, StrCodec};
use crate::codec::traits::Codec;
use crate::error::{DecodeError, EncodeError};
use crate::limits::DEFAULT_MAX_DEPTH;
use crate::model::value::ObjectCollector;
use crate::model::{Object, Value, ValueTag};

/// Codec for [`Value`].
///
/// Arrays and objects may nest up to `max_depth` levels; deeper values are
/// refused on encode and rejected on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicCodec {
    max_depth: usize,
}

impl Default for DynamicCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicCodec {
    /// Creates a codec with the default depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a codec accepting at most `max_depth` nested arrays/objects.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn enter(&self, depth: usize) -> Option<usize> {
        let depth = depth + 1;
        (depth <= self.max_depth).then_some(depth)
    }

    fn put_at(&self, writer: &mut Writer, value: &Value, depth: usize) -> Result<(), EncodeError> {
        let depth = match value {
            Value::Array(_) | Value::Object(_) => self.enter(depth).ok_or_else(|| self.too_deep())?,
            _ => depth,
        };
        if let Value::Object(obj) = value {
            check_unique_keys(obj)?;
        }

        writer.write_u8(value.tag() as u8);
        match value {
            Value::Null => Ok(()),
            Value::Bool(b) => BoolCodec.put(writer, b),
            Value::Number(n) => NumberCodec::default().put(writer, n),
            Value::String(s) => StrCodec.put(writer, s),
            Value::Bytes(b) => BytesCodec.put(writer, b),
            Value::Array(items) => {
                writer.write_len(items.len(), "array")?;
                for item in items {
                    self.put_at(writer, item, depth)?;
                }
                Ok(())
            }
            Value::Object(obj) => {
                writer.write_len(obj.len(), "object")?;
                for (key, item) in obj.iter() {
                    writer.write_string(key)?;
                    self.put_at(writer, item, depth)?;
                }
                Ok(())
            }
        }
    }

    fn get_at(&self, reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
        let offset = reader.position();
        let tag_byte = reader.read_u8("value.tag")?;
        let Some(tag) = ValueTag::from_u8(tag_byte) else {
            tracing::debug!(tag = tag_byte, offset, "unknown dynamic value tag");
            return Err(DecodeError::UnknownTag { tag: tag_byte });
        };

        match tag {
            ValueTag::Null => Ok(Value::Null),
            ValueTag::Bool => BoolCodec.get(reader).map(Value::Bool),
            ValueTag::Number => NumberCodec::default().get(reader).map(Value::Number),
            ValueTag::String => StrCodec.get(reader).map(Value::String),
            ValueTag::Bytes => BytesCodec.get(reader).map(Value::Bytes),
            ValueTag::Array => {
                let depth = self.enter_decode(depth, offset)?;
                let count = reader.read_len("array.len")?;
                let mut items = Vec::with_capacity(reader.capacity_hint(count, 1));
                for _ in 0..count {
                    items.push(self.get_at(reader, depth)?);
                }
                Ok(Value::Array(items))
            }
            ValueTag::Object => {
                let depth = self.enter_decode(depth, offset)?;
                let count = reader.read_len("object.len")?;
                // Smallest entry: empty key (4) + null tag (1)
                let mut entries = ObjectCollector::with_capacity(reader.capacity_hint(count, 5));
                for _ in 0..count {
                    let key = reader.read_string("object.key")?;
                    let item = self.get_at(reader, depth)?;
                    entries.push(key, item);
                }
                Ok(Value::Object(entries.finish()))
            }
        }
    }

    fn enter_decode(&self, depth: usize, offset: usize) -> Result<usize, DecodeError> {
        self.enter(depth).ok_or_else(|| {
            tracing::debug!(max = self.max_depth, offset, "dynamic value nested too deeply");
            DecodeError::DepthLimitExceeded {
                max: self.max_depth,
            }
        })
    }

    fn too_deep(&self) -> EncodeError {
        EncodeError::UnsupportedValue {
            reason: format!("nesting deeper than {} levels", self.max_depth),
        }
    }
}

fn check_unique_keys(obj: &Object) -> Result<(), EncodeError> {
    if obj.len() < 2 {
        return Ok(());
    }
    let mut seen = FxHashSet::with_capacity_and_hasher(obj.len(), Default::default());
    for key in obj.keys() {
        if !seen.insert(key) {
            return Err(EncodeError::UnsupportedValue {
                reason: format!("duplicate object key {key:?}"),
            });
        }
    }
    Ok(())
}

impl Codec for DynamicCodec {
    type Value = Value;

    /// On failure the writer is rolled back to where it started.
    fn put(&self, writer: &mut Writer, value: &Value) -> Result<(), EncodeError> {
        let start = writer.len();
        self.put_at(writer, value, 0).inspect_err(|_| writer.truncate(start))
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
        self.get_at(reader, 0)
    }
}
