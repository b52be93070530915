//! Fixed-width encodings
//!
//! The 16-bit integer is big-endian. Floats use the platform's native byte
//! order, matching a plain in-memory copy of the IEEE-754 value.

use super::constants::{sizes, FALSE_BYTE, TRUE_BYTE};
use crate::validation::take_exact;
use crate::Result;
use alloc::vec::Vec;

/// Append a 16-bit integer as two big-endian bytes
pub fn encode_i16(value: i16, out: &mut Vec<u8>) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Decode a big-endian 16-bit integer
pub fn decode_i16(bytes: &[u8]) -> Result<(i16, usize)> {
    let head = take_exact(bytes, sizes::SHORT)?;
    Ok((i16::from_be_bytes([head[0], head[1]]), sizes::SHORT))
}

/// Append an `f32` in native byte order
pub fn encode_f32(value: f32, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::bytes_of(&value));
}

/// Decode a native-order `f32`
pub fn decode_f32(bytes: &[u8]) -> Result<(f32, usize)> {
    let head = take_exact(bytes, sizes::FLOAT)?;
    Ok((bytemuck::pod_read_unaligned(head), sizes::FLOAT))
}

/// Append an `f64` in native byte order
pub fn encode_f64(value: f64, out: &mut Vec<u8>) {
    out.extend_from_slice(bytemuck::bytes_of(&value));
}

/// Decode a native-order `f64`
pub fn decode_f64(bytes: &[u8]) -> Result<(f64, usize)> {
    let head = take_exact(bytes, sizes::DOUBLE)?;
    Ok((bytemuck::pod_read_unaligned(head), sizes::DOUBLE))
}

/// Append a boolean as a single `1` or `0` byte
pub fn encode_bool(value: bool, out: &mut Vec<u8>) {
    out.push(if value { TRUE_BYTE } else { FALSE_BYTE });
}

/// Decode a boolean byte
///
/// Only `1` reads as `true`; any other byte value reads as `false`.
pub fn decode_bool(bytes: &[u8]) -> Result<(bool, usize)> {
    let head = take_exact(bytes, sizes::BOOLEAN)?;
    Ok((head[0] == TRUE_BYTE, sizes::BOOLEAN))
}
