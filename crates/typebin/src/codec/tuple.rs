//! Tuples of codecs are codecs for tuples.
//!
//! `(StrCodec, U32Codec)` encodes a `(String, u32)` as the string's encoding
//! followed by the integer's. Like records, tuple codecs are closed.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::traits::Codec;
use crate::error::{DecodeError, EncodeError};

macro_rules! tuple_codec {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Codec),+> Codec for ($($name,)+) {
            type Value = ($($name::Value,)+);

            fn put(&self, writer: &mut Writer, value: &Self::Value) -> Result<(), EncodeError> {
                $(self.$idx.put(writer, &value.$idx)?;)+
                Ok(())
            }

            fn get(&self, reader: &mut Reader<'_>) -> Result<Self::Value, DecodeError> {
                Ok(($(self.$idx.get(reader)?,)+))
            }
        }
    };
}

tuple_codec!(A: 0, B: 1);
tuple_codec!(A: 0, B: 1, C: 2);
tuple_codec!(A: 0, B: 1, C: 2, D: 3);
