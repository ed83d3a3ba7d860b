//! typebin: type-directed binary codecs.
//!
//! A codec is a matched encode/decode pair for one data shape. Primitive
//! codecs cover booleans, fixed-width integers, doubles, text and byte blobs;
//! combinators build codecs for sequences, fixed-shape records and tuples;
//! and a self-describing codec handles dynamic, JSON-like values.
//!
//! # Quick Start
//!
//! ```rust
//! use typebin::codec::{Codec, DynamicCodec, F64Codec, SeqCodec};
//! use typebin::{Object, Value};
//!
//! // A closed codec for a list of numbers
//! let numbers = SeqCodec::new(F64Codec);
//! let bytes = numbers.encode(&vec![1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(numbers.decode(&bytes).unwrap(), vec![1.0, 2.0, 3.0]);
//!
//! // A self-describing codec for dynamic values
//! let dynamic = DynamicCodec::new();
//! let value = Value::Object(Object::new().with("id", 7).with("tags", vec![Value::from("a")]));
//! let hex = dynamic.encode_hex(&value).unwrap();
//! assert_eq!(dynamic.decode_hex(&hex).unwrap(), value);
//! ```
//!
//! # Modules
//!
//! - [`codec`]: The [`Codec`](codec::Codec) trait, primitive codecs and combinators
//! - [`model`]: The dynamic value model
//! - [`bound`]: A value bound to its codec
//! - [`error`]: Error types
//! - [`limits`]: Wire-format limits
//!
//! # Wire Format
//!
//! - Multi-byte integers and doubles are big-endian
//! - Lengths and counts are u32 big-endian prefixes
//! - Composite encodings are concatenations of their parts, with no separators
//!
//! Every codec is self-delimiting: decoding consumes exactly the bytes that
//! encoding produced. Decoding never reads past the end of its input; short
//! input fails with [`DecodeError::UnexpectedEof`].

pub mod bound;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use bound::Bound;
pub use codec::{Codec, Reader, Writer, from_fn};
pub use error::{DecodeError, EncodeError, ErrorCode, SchemaError};
pub use model::{Object, Value, ValueTag};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
