//! Data model types for typebin.
//!
//! This module contains the dynamic value model encoded by the
//! self-describing dynamic codec.

pub mod value;

pub use value::{Object, Value, ValueTag};
