//! Unsigned LEB128 varint encoding
//!
//! Each byte carries seven payload bits, least significant group first.
//! Bit 7 is set on every byte except the last. Zero encodes as a single
//! `0x00` byte.

use super::constants::{
    BITS_PER_BYTE, CONTINUATION_BIT, MAX_VARINT32_LEN, MAX_VARINT64_LEN, PAYLOAD_MASK,
};
use crate::{CodecError, Result};
use alloc::vec::Vec;

/// Append the varint encoding of a 32-bit value
pub fn encode_varint_u32(value: u32, out: &mut Vec<u8>) {
    encode_varint_u64(u64::from(value), out);
}

/// Append the varint encoding of a 64-bit value
pub fn encode_varint_u64(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let mut byte = (value as u8) & PAYLOAD_MASK;
        value >>= BITS_PER_BYTE;
        if value != 0 {
            byte |= CONTINUATION_BIT;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Number of bytes the varint encoding of `value` occupies
pub const fn varint_len_u64(value: u64) -> usize {
    // 64 - leading_zeros gives the significant bit count; zero still takes one byte
    let bits = 64 - value.leading_zeros() as usize;
    if bits == 0 {
        1
    } else {
        bits.div_ceil(BITS_PER_BYTE as usize)
    }
}

/// Decode a 32-bit varint from the head of `bytes`
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint_u32(bytes: &[u8]) -> Result<(u32, usize)> {
    let (value, consumed) = decode_varint(bytes, MAX_VARINT32_LEN, u32::BITS)?;
    Ok((value as u32, consumed))
}

/// Decode a 64-bit varint from the head of `bytes`
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint_u64(bytes: &[u8]) -> Result<(u64, usize)> {
    decode_varint(bytes, MAX_VARINT64_LEN, u64::BITS)
}

fn decode_varint(bytes: &[u8], max_len: usize, width: u32) -> Result<(u64, usize)> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (index, &byte) in bytes.iter().enumerate() {
        let payload = u64::from(byte & PAYLOAD_MASK);

        // The last permitted byte may only fill the bits left in the target width
        let room = width - shift;
        if room < BITS_PER_BYTE && payload >> room != 0 {
            return Err(CodecError::VarintOverflow);
        }

        result |= payload << shift;

        if byte & CONTINUATION_BIT == 0 {
            return Ok((result, index + 1));
        }

        // A continuation on the last permitted byte can never end in a valid value
        if index + 1 == max_len {
            return Err(CodecError::VarintOverflow);
        }
        shift += BITS_PER_BYTE;
    }

    Err(CodecError::BufferUnderflow)
}

/// Map a signed 32-bit value onto the unsigned range so small magnitudes stay short
pub const fn zigzag_encode_i32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_encode_i32`]
pub const fn zigzag_decode_u32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Map a signed 64-bit value onto the unsigned range so small magnitudes stay short
pub const fn zigzag_encode_i64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode_i64`]
pub const fn zigzag_decode_u64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn encoded(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_varint_u64(value, &mut out);
        out
    }

    #[test]
    fn test_boundary_encodings() {
        assert_eq!(encoded(0), vec![0x00]);
        assert_eq!(encoded(1), vec![0x01]);
        assert_eq!(encoded(127), vec![0x7f]);
        assert_eq!(encoded(128), vec![0x80, 0x01]);
        assert_eq!(encoded(300), vec![0xac, 0x02]);
        assert_eq!(encoded(16383), vec![0xff, 0x7f]);
        assert_eq!(encoded(16384), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_u32_matches_u64_wire_form() {
        for value in [0u32, 1, 127, 128, 16384, 1 << 28, u32::MAX] {
            let mut narrow = Vec::new();
            encode_varint_u32(value, &mut narrow);
            assert_eq!(narrow, encoded(u64::from(value)));
        }

        let mut max = Vec::new();
        encode_varint_u32(u32::MAX, &mut max);
        assert_eq!(max, vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn test_varint_len() {
        assert_eq!(varint_len_u64(0), 1);
        assert_eq!(varint_len_u64(127), 1);
        assert_eq!(varint_len_u64(128), 2);
        assert_eq!(varint_len_u64(16383), 2);
        assert_eq!(varint_len_u64(16384), 3);
        assert_eq!(varint_len_u64(u64::from(u32::MAX)), MAX_VARINT32_LEN);
        assert_eq!(varint_len_u64(u64::MAX), MAX_VARINT64_LEN);

        for value in [0u64, 5, 200, 70_000, 1 << 40, u64::MAX] {
            assert_eq!(varint_len_u64(value), encoded(value).len());
        }
    }

    #[test]
    fn test_decode_reports_consumed() {
        assert_eq!(decode_varint_u32(&[0x00]), Ok((0, 1)));
        assert_eq!(decode_varint_u32(&[0x7f, 0xaa]), Ok((127, 1)));
        assert_eq!(decode_varint_u32(&[0x80, 0x01, 0xaa]), Ok((128, 2)));
        assert_eq!(decode_varint_u64(&[0x80, 0x80, 0x01]), Ok((16384, 3)));
        assert_eq!(
            decode_varint_u32(&[0xff, 0xff, 0xff, 0xff, 0x0f]),
            Ok((u32::MAX, 5))
        );
        assert_eq!(decode_varint_u64(&encoded(u64::MAX)), Ok((u64::MAX, 10)));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_varint_u32(&[]), Err(CodecError::BufferUnderflow));
        assert_eq!(decode_varint_u32(&[0x80]), Err(CodecError::BufferUnderflow));
        assert_eq!(
            decode_varint_u64(&[0xff, 0xff, 0xff]),
            Err(CodecError::BufferUnderflow)
        );
    }

    #[test]
    fn test_decode_overflow() {
        // Sixth byte for a 32-bit value
        assert_eq!(
            decode_varint_u32(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]),
            Err(CodecError::VarintOverflow)
        );
        // Fifth byte sets bits above bit 31
        assert_eq!(
            decode_varint_u32(&[0xff, 0xff, 0xff, 0xff, 0x1f]),
            Err(CodecError::VarintOverflow)
        );
        // Tenth byte may only carry bit 63
        assert_eq!(
            decode_varint_u64(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02]),
            Err(CodecError::VarintOverflow)
        );
        // Continuation on the last permitted byte, regardless of what follows
        assert_eq!(decode_varint_u32(&[0x80; 5]), Err(CodecError::VarintOverflow));
        assert_eq!(decode_varint_u32(&[0x80; 6]), Err(CodecError::VarintOverflow));
        assert_eq!(decode_varint_u64(&[0x80; 10]), Err(CodecError::VarintOverflow));
        // A 64-bit value is fine as long, but not as int
        let wide = encoded(u64::from(u32::MAX) + 1);
        assert_eq!(decode_varint_u32(&wide), Err(CodecError::VarintOverflow));
        assert_eq!(decode_varint_u64(&wide), Ok((u64::from(u32::MAX) + 1, 5)));
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(zigzag_encode_i32(0), 0);
        assert_eq!(zigzag_encode_i32(-1), 1);
        assert_eq!(zigzag_encode_i32(1), 2);
        assert_eq!(zigzag_encode_i32(-2), 3);
        assert_eq!(zigzag_encode_i32(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag_encode_i32(i32::MIN), u32::MAX);

        for value in [0i32, -1, 1, -64, 64, i32::MIN, i32::MAX] {
            assert_eq!(zigzag_decode_u32(zigzag_encode_i32(value)), value);
        }
        for value in [0i64, -1, 1, -64, 64, i64::MIN, i64::MAX] {
            assert_eq!(zigzag_decode_u64(zigzag_encode_i64(value)), value);
        }

        // Small negative values stay one byte on the wire
        assert_eq!(encoded(u64::from(zigzag_encode_i32(-5))), vec![0x09]);
    }
}
