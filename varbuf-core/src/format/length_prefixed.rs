//! Length-prefixed byte ranges and text
//!
//! A varint byte count followed by that many raw bytes. Text is the UTF-8
//! encoding of the string wrapped the same way.

use super::varint::{decode_varint_u64, encode_varint_u64};
use crate::validation::{checked_end, take_exact};
use crate::{CodecError, Result};
use alloc::vec::Vec;

/// Append `value` prefixed with its varint length
pub fn encode_bytes(value: &[u8], out: &mut Vec<u8>) {
    encode_varint_u64(value.len() as u64, out);
    out.extend_from_slice(value);
}

/// Decode a length-prefixed byte range without copying
///
/// The consumed count covers both the length prefix and the payload.
pub fn decode_bytes(bytes: &[u8]) -> Result<(&[u8], usize)> {
    let (length, prefix_len) = decode_varint_u64(bytes)?;
    let length = usize::try_from(length).map_err(|_| CodecError::BufferUnderflow)?;
    let payload = take_exact(&bytes[prefix_len..], length)?;
    Ok((payload, checked_end(prefix_len, length)?))
}

/// Append a UTF-8 string as a length-prefixed byte range
pub fn encode_str(value: &str, out: &mut Vec<u8>) {
    encode_bytes(value.as_bytes(), out);
}

/// Decode length-prefixed UTF-8 text without copying
pub fn decode_str(bytes: &[u8]) -> Result<(&str, usize)> {
    let (payload, consumed) = decode_bytes(bytes)?;
    let text = core::str::from_utf8(payload).map_err(|_| CodecError::InvalidUtf8)?;
    Ok((text, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_bytes_layout() {
        let mut out = Vec::new();
        encode_bytes(&[0xde, 0xad, 0xbe, 0xef], &mut out);
        assert_eq!(out, vec![0x04, 0xde, 0xad, 0xbe, 0xef]);

        assert_eq!(decode_bytes(&out), Ok((&out[1..], 5)));
    }

    #[test]
    fn test_long_payload_uses_multibyte_prefix() {
        let payload = vec![7u8; 300];
        let mut out = Vec::new();
        encode_bytes(&payload, &mut out);
        assert_eq!(&out[..2], &[0xac, 0x02]);
        assert_eq!(out.len(), 302);

        let (decoded, consumed) = decode_bytes(&out).unwrap();
        assert_eq!(decoded, payload.as_slice());
        assert_eq!(consumed, 302);
    }

    #[test]
    fn test_empty_string_is_single_zero_byte() {
        let mut out = Vec::new();
        encode_str("", &mut out);
        assert_eq!(out, vec![0x00]);
        assert_eq!(decode_str(&out), Ok(("", 1)));
    }

    #[test]
    fn test_multibyte_text() {
        let text = "héllo, 世界 🦀";
        let mut out = Vec::new();
        encode_str(text, &mut out);
        assert_eq!(out[0] as usize, text.len());
        assert_eq!(decode_str(&out), Ok((text, text.len() + 1)));
    }

    #[test]
    fn test_payload_shorter_than_prefix() {
        assert_eq!(decode_bytes(&[0x03, 0x01, 0x02]), Err(CodecError::BufferUnderflow));
        assert_eq!(decode_bytes(&[]), Err(CodecError::BufferUnderflow));
        assert_eq!(decode_bytes(&[0x80]), Err(CodecError::BufferUnderflow));
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(decode_str(&[0x02, 0xc3, 0x28]), Err(CodecError::InvalidUtf8));
    }
}
