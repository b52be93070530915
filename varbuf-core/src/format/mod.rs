//! Wire format definitions and codec functions
//!
//! Every function here is pure: encoders append to a caller-owned `Vec<u8>`,
//! decoders read from the head of a slice and report how many bytes they
//! consumed. Cursor bookkeeping belongs to the caller.

pub mod constants;
pub mod fixed;
pub mod length_prefixed;
pub mod value;
pub mod varint;

// Re-export codec functions
pub use fixed::{
    decode_bool, decode_f32, decode_f64, decode_i16, encode_bool, encode_f32, encode_f64,
    encode_i16,
};
pub use length_prefixed::{decode_bytes, decode_str, encode_bytes, encode_str};
pub use value::{decode_value, encode_value, FieldKind, Value};
pub use varint::{
    decode_varint_u32, decode_varint_u64, encode_varint_u32, encode_varint_u64, varint_len_u64,
    zigzag_decode_u32, zigzag_decode_u64, zigzag_encode_i32, zigzag_encode_i64,
};
