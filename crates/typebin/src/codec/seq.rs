//! Sequence combinator.
//!
//! Wire format: u32 element count, then each element's encoding back to back.

use crate::codec::primitives::{Reader, Writer};
use crate::codec::traits::Codec;
use crate::error::{DecodeError, EncodeError};

/// Codec for `Vec<T>` built from a codec for `T`.
///
/// A recursive type gets a unit-struct codec whose `put`/`get` build the
/// children's sequence codec from the codec itself:
///
/// ```rust
/// use typebin::codec::{Codec, Reader, SeqCodec, StrCodec, Writer};
/// use typebin::{DecodeError, EncodeError};
///
/// #[derive(Debug, PartialEq)]
/// struct Node {
///     name: String,
///     children: Vec<Node>,
/// }
///
/// struct NodeCodec;
///
/// impl Codec for NodeCodec {
///     type Value = Node;
///
///     fn put(&self, w: &mut Writer, node: &Node) -> Result<(), EncodeError> {
///         StrCodec.put(w, &node.name)?;
///         SeqCodec::new(NodeCodec).put(w, &node.children)
///     }
///
///     fn get(&self, r: &mut Reader<'_>) -> Result<Node, DecodeError> {
///         Ok(Node {
///             name: StrCodec.get(r)?,
///             children: SeqCodec::new(NodeCodec).get(r)?,
///         })
///     }
/// }
///
/// let tree = Node {
///     name: "root".into(),
///     children: vec![Node { name: "leaf".into(), children: vec![] }],
/// };
/// let hex = NodeCodec.encode_hex(&tree).unwrap();
/// assert_eq!(NodeCodec.decode_hex(&hex).unwrap(), tree);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeqCodec<C> {
    element: C,
}

impl<C: Codec> SeqCodec<C> {
    /// Creates a sequence codec over `element`.
    pub fn new(element: C) -> Self {
        Self { element }
    }

    /// Returns the element codec.
    pub fn element(&self) -> &C {
        &self.element
    }
}

impl<C: Codec> Codec for SeqCodec<C> {
    type Value = Vec<C::Value>;

    fn put(&self, writer: &mut Writer, value: &Vec<C::Value>) -> Result<(), EncodeError> {
        writer.write_len(value.len(), "seq")?;
        for item in value {
            self.element.put(writer, item)?;
        }
        Ok(())
    }

    fn get(&self, reader: &mut Reader<'_>) -> Result<Vec<C::Value>, DecodeError> {
        let count = reader.read_len("seq.len")?;
        let mut items = Vec::with_capacity(reader.capacity_hint(count, 1));
        for _ in 0..count {
            items.push(self.element.get(reader)?);
        }
        Ok(items)
    }
}
