//! Dynamic, JSON-like values.
//!
//! [`Value`] is what the self-describing [`DynamicCodec`] encodes: JSON's
//! shapes plus raw byte blobs. Object entries are an explicit ordered list,
//! so key order survives a round trip.
//!
//! [`DynamicCodec`]: crate::codec::DynamicCodec

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

/// Wire tags for dynamic values. The numbering is part of the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueTag {
    Null = 0,
    Bool = 1,
    Number = 2,
    String = 3,
    Array = 4,
    Object = 5,
    Bytes = 6,
}

impl ValueTag {
    /// Creates a ValueTag from its wire representation.
    pub fn from_u8(v: u8) -> Option<ValueTag> {
        match v {
            0 => Some(ValueTag::Null),
            1 => Some(ValueTag::Bool),
            2 => Some(ValueTag::Number),
            3 => Some(ValueTag::String),
            4 => Some(ValueTag::Array),
            5 => Some(ValueTag::Object),
            6 => Some(ValueTag::Bytes),
            _ => None,
        }
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Ordered string-keyed entries.
    Object(Object),
    /// Raw byte blob.
    Bytes(Vec<u8>),
}

impl Value {
    /// Returns the wire tag for this value.
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Null => ValueTag::Null,
            Value::Bool(_) => ValueTag::Bool,
            Value::Number(_) => ValueTag::Number,
            Value::String(_) => ValueTag::String,
            Value::Array(_) => ValueTag::Array,
            Value::Object(_) => ValueTag::Object,
            Value::Bytes(_) => ValueTag::Bytes,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Ordered string-keyed entries of an object value.
///
/// Iteration order is the order keys were first inserted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Wraps raw entries without checking keys for uniqueness.
    ///
    /// The dynamic codec refuses to encode an object with repeated keys.
    pub fn from_entries(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key keeps its position and the previous value is returned.
    /// This scans the entries; collect with [`FromIterator`] to build large
    /// objects.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Chainable form of [`insert`](Object::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut collector = ObjectCollector::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            collector.push(k.into(), v.into());
        }
        collector.finish()
    }
}

/// Builds an [`Object`] in one pass, indexing keys as they arrive.
///
/// A repeated key keeps its first position and takes the last value.
#[derive(Debug, Default)]
pub(crate) struct ObjectCollector {
    entries: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl ObjectCollector {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn push(&mut self, key: String, value: Value) {
        match self.index.entry(key) {
            Entry::Occupied(slot) => self.entries[*slot.get()].1 = value,
            Entry::Vacant(slot) => {
                self.entries.push((slot.key().clone(), value));
                slot.insert(self.entries.len() - 1);
            }
        }
    }

    pub(crate) fn finish(self) -> Object {
        Object {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_numbering() {
        for (v, tag) in [
            (0, ValueTag::Null),
            (1, ValueTag::Bool),
            (2, ValueTag::Number),
            (3, ValueTag::String),
            (4, ValueTag::Array),
            (5, ValueTag::Object),
            (6, ValueTag::Bytes),
        ] {
            assert_eq!(ValueTag::from_u8(v), Some(tag));
            assert_eq!(tag as u8, v);
        }
        assert_eq!(ValueTag::from_u8(7), None);
        assert_eq!(ValueTag::from_u8(255), None);
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let obj = Object::new().with("zeta", 1).with("alpha", 2).with("mid", 3);
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_object_insert_replaces_in_place() {
        let mut obj = Object::new().with("a", 1).with("b", 2);
        let old = obj.insert("a", "x");
        assert_eq!(old, Some(Value::Number(1.0)));
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(obj.get("a").and_then(Value::as_str), Some("x"));
        assert_eq!(obj.len(), 2);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("s")), Value::String("s".into()));
        assert_eq!(Value::from(vec![1u8, 2]).as_bytes(), Some(&[1u8, 2][..]));
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from(vec![Value::Null]).tag(), ValueTag::Array);
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_from_iter_dedups_keys() {
        let obj: Object = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a").and_then(Value::as_f64), Some(3.0));
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_collector_keeps_first_position_last_value() {
        let mut collector = ObjectCollector::with_capacity(4);
        collector.push("x".into(), Value::from(1));
        collector.push("y".into(), Value::from(2));
        collector.push("x".into(), Value::from(3));
        collector.push("z".into(), Value::Null);
        let obj = collector.finish();
        assert_eq!(obj.keys().collect::<Vec<_>>(), ["x", "y", "z"]);
        assert_eq!(obj.get("x"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn test_collect_many_distinct_keys() {
        let obj: Object = (0..50_000).map(|i| (format!("k{i:06}"), i)).collect();
        assert_eq!(obj.len(), 50_000);
        assert_eq!(obj.keys().next(), Some("k000000"));
        assert_eq!(obj.get("k049999").and_then(Value::as_f64), Some(49_999.0));
    }
}
