//! Closed set of value kinds the wire format can carry

use super::constants::sizes;
use super::fixed::{
    decode_bool, decode_f32, decode_f64, decode_i16, encode_bool, encode_f32, encode_f64,
    encode_i16,
};
use super::length_prefixed::{decode_bytes, decode_str, encode_bytes, encode_str};
use super::varint::{decode_varint_u32, decode_varint_u64, encode_varint_u32, encode_varint_u64};
use crate::Result;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Kind of a single encoded field
///
/// Each kind has a one-letter pattern tag used by pattern extraction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Length-prefixed UTF-8 text (`s`)
    Text = b's',
    /// 64-bit varint (`l`)
    Long = b'l',
    /// 32-bit varint (`i`)
    Int = b'i',
    /// Single boolean byte (`b`)
    Boolean = b'b',
    /// Length-prefixed raw bytes (`d`)
    Bytes = b'd',
    /// Big-endian 16-bit integer (`h`)
    Short = b'h',
    /// Native-order `f32` (`f`)
    Float = b'f',
    /// Native-order `f64` (`x`)
    Double = b'x',
}

impl FieldKind {
    /// All kinds, in pattern-tag table order
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Text,
        FieldKind::Long,
        FieldKind::Int,
        FieldKind::Boolean,
        FieldKind::Bytes,
        FieldKind::Short,
        FieldKind::Float,
        FieldKind::Double,
    ];

    /// Look up a kind by its pattern tag (case-insensitive)
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_lowercase() {
            's' => Some(FieldKind::Text),
            'l' => Some(FieldKind::Long),
            'i' => Some(FieldKind::Int),
            'b' => Some(FieldKind::Boolean),
            'd' => Some(FieldKind::Bytes),
            'h' => Some(FieldKind::Short),
            'f' => Some(FieldKind::Float),
            'x' => Some(FieldKind::Double),
            _ => None,
        }
    }

    /// Lowercase pattern tag for this kind
    pub const fn tag(self) -> char {
        self as u8 as char
    }

    /// Encoded size for fixed-width kinds, `None` for variable-length ones
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            FieldKind::Short => Some(sizes::SHORT),
            FieldKind::Float => Some(sizes::FLOAT),
            FieldKind::Double => Some(sizes::DOUBLE),
            FieldKind::Boolean => Some(sizes::BOOLEAN),
            FieldKind::Text | FieldKind::Long | FieldKind::Int | FieldKind::Bytes => None,
        }
    }
}

impl core::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Long => write!(f, "long"),
            FieldKind::Int => write!(f, "int"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Bytes => write!(f, "bytes"),
            FieldKind::Short => write!(f, "short"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Double => write!(f, "double"),
        }
    }
}

/// A decoded value of any supported kind
///
/// With the `serde` feature the value serializes externally tagged
/// (`{"Int": 42}`), so the kind survives a round trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// UTF-8 text
    Text(String),
    /// 64-bit varint
    Long(u64),
    /// 32-bit varint
    Int(u32),
    /// Boolean byte
    Boolean(bool),
    /// Raw byte range
    Bytes(Vec<u8>),
    /// Big-endian 16-bit integer
    Short(i16),
    /// Native-order `f32`
    Float(f32),
    /// Native-order `f64`
    Double(f64),
}

impl Value {
    /// Kind of this value
    pub const fn kind(&self) -> FieldKind {
        match self {
            Value::Text(_) => FieldKind::Text,
            Value::Long(_) => FieldKind::Long,
            Value::Int(_) => FieldKind::Int,
            Value::Boolean(_) => FieldKind::Boolean,
            Value::Bytes(_) => FieldKind::Bytes,
            Value::Short(_) => FieldKind::Short,
            Value::Float(_) => FieldKind::Float,
            Value::Double(_) => FieldKind::Double,
        }
    }

    /// Text payload, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Raw payload, if this is a byte range
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Widen any integer kind to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(i64::from(*v)),
            Value::Short(v) => Some(i64::from(*v)),
            Value::Long(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Widen any float kind to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_value_from!(
    u64 => Long,
    u32 => Int,
    bool => Boolean,
    i16 => Short,
    f32 => Float,
    f64 => Double,
);

/// Append the wire encoding of `value`
pub fn encode_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Text(text) => encode_str(text, out),
        Value::Long(v) => encode_varint_u64(*v, out),
        Value::Int(v) => encode_varint_u32(*v, out),
        Value::Boolean(v) => encode_bool(*v, out),
        Value::Bytes(bytes) => encode_bytes(bytes, out),
        Value::Short(v) => encode_i16(*v, out),
        Value::Float(v) => encode_f32(*v, out),
        Value::Double(v) => encode_f64(*v, out),
    }
}

/// Decode one value of `kind` from the head of `bytes`
pub fn decode_value(kind: FieldKind, bytes: &[u8]) -> Result<(Value, usize)> {
    let decoded = match kind {
        FieldKind::Text => {
            let (text, consumed) = decode_str(bytes)?;
            (Value::Text(text.to_string()), consumed)
        }
        FieldKind::Long => {
            let (v, consumed) = decode_varint_u64(bytes)?;
            (Value::Long(v), consumed)
        }
        FieldKind::Int => {
            let (v, consumed) = decode_varint_u32(bytes)?;
            (Value::Int(v), consumed)
        }
        FieldKind::Boolean => {
            let (v, consumed) = decode_bool(bytes)?;
            (Value::Boolean(v), consumed)
        }
        FieldKind::Bytes => {
            let (payload, consumed) = decode_bytes(bytes)?;
            (Value::Bytes(payload.to_vec()), consumed)
        }
        FieldKind::Short => {
            let (v, consumed) = decode_i16(bytes)?;
            (Value::Short(v), consumed)
        }
        FieldKind::Float => {
            let (v, consumed) = decode_f32(bytes)?;
            (Value::Float(v), consumed)
        }
        FieldKind::Double => {
            let (v, consumed) = decode_f64(bytes)?;
            (Value::Double(v), consumed)
        }
    };
    Ok(decoded)
}
