//! Byte sink and byte source for the typebin wire format.
//!
//! All multi-byte integers and floats are big-endian. Lengths and counts are
//! written as a 4-byte unsigned big-endian prefix.

use crate::error::{DecodeError, EncodeError};
use crate::limits::{LEN_PREFIX_BYTES, MAX_PREFIXED_LEN};

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding binary data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking. The position only moves forward.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    #[inline]
    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    pub fn read_u8(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        self.read_byte(context)
    }

    /// Reads a two's-complement signed 8-bit integer.
    pub fn read_i8(&mut self, context: &'static str) -> Result<i8, DecodeError> {
        Ok(self.read_byte(context)? as i8)
    }

    /// Reads a big-endian u16.
    pub fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i16.
    pub fn read_i16(&mut self, context: &'static str) -> Result<i16, DecodeError> {
        Ok(i16::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian u32.
    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian i32.
    pub fn read_i32(&mut self, context: &'static str) -> Result<i32, DecodeError> {
        Ok(i32::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a big-endian IEEE-754 f64. NaN payloads are preserved.
    #[inline]
    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, DecodeError> {
        Ok(f64::from_be_bytes(self.read_array(context)?))
    }

    /// Reads a boolean byte.
    ///
    /// Only `0x01` decodes to `true`. Every other byte, including `0x02..=0xFF`,
    /// decodes to `false`.
    pub fn read_bool(&mut self, context: &'static str) -> Result<bool, DecodeError> {
        Ok(self.read_byte(context)? == 1)
    }

    /// Reads a 4-byte length or count prefix.
    #[inline]
    pub fn read_len(&mut self, context: &'static str) -> Result<usize, DecodeError> {
        Ok(self.read_u32(context)? as usize)
    }

    /// Reads a length-prefixed UTF-8 string.
    pub fn read_string(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let len = self.read_len(field)?;
        let bytes = self.read_bytes(len, field)?;
        // Validate UTF-8 on the borrowed slice, then allocate once
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    /// Reads a length-prefixed byte array.
    pub fn read_bytes_prefixed(&mut self, field: &'static str) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_len(field)?;
        Ok(self.read_bytes(len, field)?.to_vec())
    }

    /// Capacity to reserve for `count` elements of at least `min_size` bytes each.
    ///
    /// Never exceeds what the remaining input could actually hold, so a forged
    /// count cannot trigger a large allocation before the reads fail.
    pub fn capacity_hint(&self, count: usize, min_size: usize) -> usize {
        count.min(self.remaining_len() / min_size.max(1))
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for encoding binary data.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drops everything written after the first `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_u8(&mut self, value: u8) {
        self.write_byte(value);
    }

    /// Writes the two's-complement bit pattern of a signed 8-bit integer.
    pub fn write_i8(&mut self, value: i8) {
        self.write_byte(value as u8);
    }

    /// Writes a big-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian i16.
    pub fn write_i16(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian i32.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes a big-endian IEEE-754 f64.
    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Writes `0x01` for true and `0x00` for false.
    pub fn write_bool(&mut self, value: bool) {
        self.write_byte(if value { 0x01 } else { 0x00 });
    }

    /// Writes a 4-byte length or count prefix.
    pub fn write_len(&mut self, len: usize, field: &'static str) -> Result<(), EncodeError> {
        if len > MAX_PREFIXED_LEN {
            return Err(EncodeError::LengthExceedsLimit {
                field,
                len,
                max: MAX_PREFIXED_LEN,
            });
        }
        self.write_u32(len as u32);
        Ok(())
    }

    /// Writes a length-prefixed UTF-8 string.
    ///
    /// The prefix counts encoded bytes, not characters.
    pub fn write_string(&mut self, s: &str) -> Result<(), EncodeError> {
        self.write_bytes_prefixed_as(s.as_bytes(), "string")
    }

    /// Writes a length-prefixed byte array.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.write_bytes_prefixed_as(bytes, "bytes")
    }

    fn write_bytes_prefixed_as(&mut self, bytes: &[u8], field: &'static str) -> Result<(), EncodeError> {
        self.buf.reserve(LEN_PREFIX_BYTES + bytes.len());
        self.write_len(bytes.len(), field)?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}
