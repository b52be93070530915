//! Bounds checks for reads against a byte slice
//!
//! Decoders call these before touching any byte so that a short read fails
//! without consuming anything.

use crate::{CodecError, Result};

/// Return the first `len` bytes of `bytes`, or `BufferUnderflow` if there are fewer
pub fn take_exact(bytes: &[u8], len: usize) -> Result<&[u8]> {
    bytes.get(..len).ok_or(CodecError::BufferUnderflow)
}

/// Add a length to a start offset with overflow protection
pub const fn checked_end(start: usize, len: usize) -> Result<usize> {
    match start.checked_add(len) {
        Some(end) => Ok(end),
        None => Err(CodecError::BufferUnderflow),
    }
}

/// Apply a signed delta to a cursor position
///
/// The result must stay within `0..=usize::MAX`; the upper end of the data is
/// not checked here.
pub const fn offset_cursor(cursor: usize, delta: isize) -> Result<usize> {
    match cursor.checked_add_signed(delta) {
        Some(moved) => Ok(moved),
        None => Err(CodecError::CursorOutOfRange),
    }
}

/// Slice of `data` from `cursor` to the end
///
/// A cursor exactly at the end yields an empty slice; beyond the end is an
/// underflow.
pub fn remaining_from(data: &[u8], cursor: usize) -> Result<&[u8]> {
    data.get(cursor..).ok_or(CodecError::BufferUnderflow)
}
