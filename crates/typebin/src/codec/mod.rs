//! Binary codecs for typebin.
//!
//! [`Codec`] is the core abstraction; everything else here is a codec or a
//! way of combining codecs.

pub mod check;
pub mod dynamic;
pub mod primitives;
pub mod record;
pub mod scalar;
pub mod seq;
pub mod traits;
pub mod tuple;

pub use check::{DelimitError, check_self_delimiting, check_self_delimiting_with};
pub use dynamic::DynamicCodec;
pub use primitives::{Reader, Writer};
pub use record::{RecordBuilder, RecordCodec};
pub use scalar::{
    BoolCodec, BytesCodec, F64Codec, I8Codec, I16Codec, I32Codec, NumberCodec, PackedBoolsCodec,
    StrCodec, U8Codec, U16Codec, U32Codec,
};
pub use seq::SeqCodec;
pub use traits::{Codec, FnCodec, from_fn};
