#![no_std]

//! varbuf Core - Wire Format and Codec Definitions
//!
//! This crate provides the pure encode/decode functions behind the varbuf
//! binary buffer: LEB128 varints, fixed-width numbers, length-prefixed bytes
//! and text, plus the closed set of value kinds and pattern parsing. It has
//! no I/O and no cursor state; decoders report the number of bytes they
//! consumed and leave advancing to the caller.

extern crate alloc;

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{
    decode_bool, decode_bytes, decode_f32, decode_f64, decode_i16, decode_str, decode_value,
    decode_varint_u32, decode_varint_u64, encode_bool, encode_bytes, encode_f32, encode_f64,
    encode_i16, encode_str, encode_value, encode_varint_u32, encode_varint_u64, varint_len_u64,
    zigzag_decode_u32, zigzag_decode_u64, zigzag_encode_i32, zigzag_encode_i64, FieldKind, Value,
};
pub use traits::*;
pub use validation::{parse_pattern, parse_pattern_strict};
