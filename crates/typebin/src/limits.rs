//! Wire-format limits.
//!
//! Length and count prefixes are unsigned 32-bit big-endian, so nothing longer
//! than `MAX_PREFIXED_LEN` can be written. Decoding of dynamic values is
//! bounded in depth to keep recursion off untrusted input finite.

/// Size in bytes of every length/count prefix.
pub const LEN_PREFIX_BYTES: usize = 4;

/// Largest length or element count a prefix can express.
pub const MAX_PREFIXED_LEN: usize = u32::MAX as usize;

/// Default maximum nesting depth of arrays/objects in a dynamic value.
pub const DEFAULT_MAX_DEPTH: usize = 128;
