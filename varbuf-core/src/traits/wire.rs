//! Encode/decode traits for supported primitive types
//!
//! Only the types listed in the wire format implement these traits, so an
//! attempt to write anything else is rejected at compile time.

use crate::format::{self, FieldKind, Value};
use crate::Result;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Types that can be appended to a buffer
pub trait Encode {
    /// Append the wire encoding of `self` to `out`
    fn encode(&self, out: &mut Vec<u8>);
}

/// Types that can be decoded from the head of a byte slice
pub trait Decode: Sized {
    /// Wire kind read by this type
    const KIND: FieldKind;

    /// Decode one value, returning it with the number of bytes consumed
    fn decode(bytes: &[u8]) -> Result<(Self, usize)>;
}

/// Implement both traits for a `Copy` primitive backed by a codec pair
macro_rules! impl_wire_primitive {
    ($ty:ty, $kind:ident, $encode:path, $decode:path) => {
        impl Encode for $ty {
            fn encode(&self, out: &mut Vec<u8>) {
                $encode(*self, out)
            }
        }

        impl Decode for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
                $decode(bytes)
            }
        }
    };
}

impl_wire_primitive!(u32, Int, format::encode_varint_u32, format::decode_varint_u32);
impl_wire_primitive!(u64, Long, format::encode_varint_u64, format::decode_varint_u64);
impl_wire_primitive!(i16, Short, format::encode_i16, format::decode_i16);
impl_wire_primitive!(f32, Float, format::encode_f32, format::decode_f32);
impl_wire_primitive!(f64, Double, format::encode_f64, format::decode_f64);
impl_wire_primitive!(bool, Boolean, format::encode_bool, format::decode_bool);

impl Encode for str {
    fn encode(&self, out: &mut Vec<u8>) {
        format::encode_str(self, out)
    }
}

impl Encode for String {
    fn encode(&self, out: &mut Vec<u8>) {
        format::encode_str(self, out)
    }
}

impl Decode for String {
    const KIND: FieldKind = FieldKind::Text;

    fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        let (text, consumed) = format::decode_str(bytes)?;
        Ok((text.to_string(), consumed))
    }
}

impl Encode for [u8] {
    fn encode(&self, out: &mut Vec<u8>) {
        format::encode_bytes(self, out)
    }
}

impl Encode for Vec<u8> {
    fn encode(&self, out: &mut Vec<u8>) {
        format::encode_bytes(self, out)
    }
}

impl Decode for Vec<u8> {
    const KIND: FieldKind = FieldKind::Bytes;

    fn decode(bytes: &[u8]) -> Result<(Self, usize)> {
        let (payload, consumed) = format::decode_bytes(bytes)?;
        Ok((payload.to_vec(), consumed))
    }
}

impl Encode for Value {
    fn encode(&self, out: &mut Vec<u8>) {
        format::encode_value(self, out)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, out: &mut Vec<u8>) {
        (**self).encode(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn to_wire<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
        let mut out = Vec::new();
        value.encode(&mut out);
        out
    }

    fn round_trip<T: Encode + Decode + PartialEq + core::fmt::Debug>(value: T) {
        let bytes = to_wire(&value);
        let (decoded, consumed) = T::decode(&bytes).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(<u32 as Decode>::KIND, FieldKind::Int);
        assert_eq!(<u64 as Decode>::KIND, FieldKind::Long);
        assert_eq!(<i16 as Decode>::KIND, FieldKind::Short);
        assert_eq!(<f32 as Decode>::KIND, FieldKind::Float);
        assert_eq!(<f64 as Decode>::KIND, FieldKind::Double);
        assert_eq!(<bool as Decode>::KIND, FieldKind::Boolean);
        assert_eq!(<String as Decode>::KIND, FieldKind::Text);
        assert_eq!(<Vec<u8> as Decode>::KIND, FieldKind::Bytes);
    }

    #[test]
    fn test_numeric_extremes_round_trip() {
        for value in [0u32, 1, 127, 128, u32::MAX] {
            round_trip(value);
        }
        for value in [0u64, 16384, u64::MAX] {
            round_trip(value);
        }
        for value in [0i16, -1, i16::MIN, i16::MAX] {
            round_trip(value);
        }
        for value in [0.0f32, f32::MIN, f32::MAX] {
            round_trip(value);
        }
        for value in [0.0f64, f64::MIN, f64::MAX] {
            round_trip(value);
        }
        round_trip(true);
        round_trip(false);
    }

    #[test]
    fn test_unsized_and_owned_encode_alike() {
        assert_eq!(to_wire("abc"), to_wire(&String::from("abc")));
        assert_eq!(to_wire(&[1u8, 2][..]), to_wire(&vec![1u8, 2]));
        assert_eq!(to_wire(&Value::Int(300)), to_wire(&300u32));
        round_trip(String::from("日本語"));
        round_trip(vec![0u8, 255, 7]);
    }
}
