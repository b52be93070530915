//! Growable byte buffer with a read cursor
//!
//! `BufferData` pairs an owned byte sequence with a single read offset.
//! Writes append and never look at the cursor; reads decode at the cursor
//! and advance it by exactly the number of bytes the codec consumed. A read
//! that fails leaves the cursor where it was.

use varbuf_core::validation::{offset_cursor, remaining_from, take_exact};
use varbuf_core::{Decode, Encode, FieldKind, Result, Value};

/// Byte sequence with a stateful read cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferData {
    data: Vec<u8>,
    cursor: usize,
}

impl BufferData {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            cursor: 0,
        }
    }

    /// Create an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Take ownership of `data` and start reading at `cursor`
    pub fn with_cursor(data: Vec<u8>, cursor: usize) -> Self {
        Self { data, cursor }
    }

    /// Build a buffer from a copy of any byte source, cursor at 0
    pub fn from_bytes(source: impl AsRef<[u8]>) -> Self {
        Self::with_cursor(source.as_ref().to_vec(), 0)
    }

    /// All bytes in the buffer, regardless of the cursor
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Total number of bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes between the cursor and the end (zero if the cursor is past the end)
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.cursor)
    }

    /// Whether no unread bytes are left
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.data.len()
    }

    // Cursor management

    /// Set the cursor to an absolute offset
    ///
    /// The offset is not checked against the length; a later read past the
    /// end fails with `BufferUnderflow`.
    pub fn seek(&mut self, position: usize) -> &mut Self {
        self.cursor = position;
        self
    }

    /// Move the cursor by a signed amount
    ///
    /// Fails with `CursorOutOfRange`, leaving the cursor unchanged, if the
    /// move would go before offset 0.
    pub fn move_cursor(&mut self, delta: isize) -> Result<&mut Self> {
        self.cursor = offset_cursor(self.cursor, delta)?;
        Ok(self)
    }

    /// Append a copy of another buffer's bytes or any byte collection
    pub fn concat(&mut self, other: impl AsRef<[u8]>) -> &mut Self {
        self.data.extend_from_slice(other.as_ref());
        self
    }

    // Write methods

    /// Append the encoding of `value`
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode(&mut self.data);
        self
    }

    /// Append a 32-bit varint
    pub fn write_int(&mut self, value: u32) -> &mut Self {
        self.write(&value)
    }

    /// Append a 64-bit varint
    pub fn write_long(&mut self, value: u64) -> &mut Self {
        self.write(&value)
    }

    /// Append a big-endian 16-bit integer
    pub fn write_short(&mut self, value: i16) -> &mut Self {
        self.write(&value)
    }

    pub fn write_float(&mut self, value: f32) -> &mut Self {
        self.write(&value)
    }

    pub fn write_double(&mut self, value: f64) -> &mut Self {
        self.write(&value)
    }

    pub fn write_boolean(&mut self, value: bool) -> &mut Self {
        self.write(&value)
    }

    /// Append a length-prefixed byte range
    pub fn write_bytes(&mut self, value: &[u8]) -> &mut Self {
        self.write(value)
    }

    /// Append length-prefixed UTF-8 text
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        self.write(value)
    }

    pub fn write_value(&mut self, value: &Value) -> &mut Self {
        self.write(value)
    }

    // Read methods

    /// Decode at the cursor with `decode` and advance by the bytes it consumed
    fn read_with<T>(&mut self, decode: impl FnOnce(&[u8]) -> Result<(T, usize)>) -> Result<T> {
        let outcome = remaining_from(&self.data, self.cursor).and_then(decode);
        match outcome {
            Ok((value, consumed)) => {
                self.cursor += consumed;
                Ok(value)
            }
            Err(err) => {
                tracing::trace!(
                    cursor = self.cursor,
                    remaining = self.remaining(),
                    error = %err,
                    "buffer read failed"
                );
                Err(err)
            }
        }
    }

    /// Decode one value of type `T` at the cursor and advance past it
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        self.read_with(T::decode)
    }

    /// Decode one value of type `T` at the cursor without advancing
    pub fn peek<T: Decode>(&self) -> Result<T> {
        let rest = remaining_from(&self.data, self.cursor)?;
        T::decode(rest).map(|(value, _)| value)
    }

    /// Decode a value of the given kind
    pub fn read_value(&mut self, kind: FieldKind) -> Result<Value> {
        self.read_with(|bytes| varbuf_core::decode_value(kind, bytes))
    }

    pub fn read_int(&mut self) -> Result<u32> {
        self.read()
    }

    pub fn read_long(&mut self) -> Result<u64> {
        self.read()
    }

    pub fn read_short(&mut self) -> Result<i16> {
        self.read()
    }

    pub fn read_float(&mut self) -> Result<f32> {
        self.read()
    }

    pub fn read_double(&mut self) -> Result<f64> {
        self.read()
    }

    pub fn read_boolean(&mut self) -> Result<bool> {
        self.read()
    }

    /// Read a length-prefixed byte range
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        self.read()
    }

    /// Read length-prefixed UTF-8 text
    pub fn read_string(&mut self) -> Result<String> {
        self.read()
    }

    /// Read exactly `length` raw bytes with no length prefix
    pub fn read_bytes_by_length(&mut self, length: usize) -> Result<Vec<u8>> {
        self.read_with(|bytes| take_exact(bytes, length).map(|head| (head.to_vec(), length)))
    }

    /// Read every byte from the cursor to the end
    ///
    /// Returns an empty vector when the cursor is already at the end. A
    /// cursor beyond the end is an underflow.
    pub fn read_rest_bytes(&mut self) -> Result<Vec<u8>> {
        self.read_with(|bytes| Ok((bytes.to_vec(), bytes.len())))
    }
}

impl AsRef<[u8]> for BufferData {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for BufferData {
    fn from(data: Vec<u8>) -> Self {
        Self::with_cursor(data, 0)
    }
}

impl From<&Vec<u8>> for BufferData {
    fn from(data: &Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for BufferData {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl<const N: usize> From<[u8; N]> for BufferData {
    fn from(data: [u8; N]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&BufferData> for BufferData {
    /// Copy another buffer's bytes; the cursor always starts at 0
    fn from(other: &BufferData) -> Self {
        Self::from_bytes(other)
    }
}

impl From<BufferData> for Vec<u8> {
    fn from(buffer: BufferData) -> Self {
        buffer.into_vec()
    }
}
