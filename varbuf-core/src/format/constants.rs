//! Wire format constants for the varbuf encoding

/// High bit of a varint byte, set when more bytes follow
pub const CONTINUATION_BIT: u8 = 0x80;

/// Low seven payload bits of a varint byte
pub const PAYLOAD_MASK: u8 = 0x7f;

/// Payload bits carried by one varint byte
pub const BITS_PER_BYTE: u32 = 7;

/// Maximum encoded length of a 32-bit varint
pub const MAX_VARINT32_LEN: usize = 5;

/// Maximum encoded length of a 64-bit varint
pub const MAX_VARINT64_LEN: usize = 10;

/// Fixed encoded sizes
pub mod sizes {
    /// Big-endian 16-bit integer
    pub const SHORT: usize = 2;

    /// IEEE-754 binary32
    pub const FLOAT: usize = 4;

    /// IEEE-754 binary64
    pub const DOUBLE: usize = 8;

    /// Boolean byte
    pub const BOOLEAN: usize = 1;
}

/// Boolean byte values
pub const TRUE_BYTE: u8 = 1;
pub const FALSE_BYTE: u8 = 0;
