//! varbuf - Binary Buffer with a Read Cursor
//!
//! This library provides `BufferData`, a growable byte sequence with a single
//! read cursor, typed writes and reads over a compact varint-based wire
//! format, and pattern-driven extraction of several values at once.
//!
//! ## Architecture
//!
//! varbuf keeps the wire format and the stateful buffer apart:
//!
//! - **varbuf-core**: Pure encode/decode functions, value kinds, pattern parsing (no I/O)
//! - **varbuf**: The buffer itself, file loading, and the inspection tool
//!
//! ## Quick Start
//!
//! ```rust
//! use varbuf::{BufferData, Value};
//!
//! let mut buffer = BufferData::new();
//! buffer.write_string("a").write_string("bb").write_int(42);
//!
//! let values = buffer.extract("ssi").unwrap();
//! assert_eq!(values, vec![Value::from("a"), Value::from("bb"), Value::Int(42)]);
//! assert_eq!(buffer.cursor(), buffer.len());
//! ```
//!
//! ## Features
//!
//! - **Varint integers**: 32/64-bit unsigned LEB128, one byte for values below 128
//! - **Length-prefixed data**: Byte ranges and UTF-8 text
//! - **Failure-safe reads**: A failed read never moves the cursor
//! - **Memory-mapped loading**: Read persisted buffers from disk (`mmap` feature)

// Re-export core abstractions and format definitions
pub use varbuf_core::{
    // Codec traits
    Decode, Encode,
    // Value model
    FieldKind, Value,
    // Error handling
    CodecError, ErrorCategory,
    // Pattern utilities
    parse_pattern, parse_pattern_strict,
    // Signed integer helpers
    zigzag_decode_u32, zigzag_decode_u64, zigzag_encode_i32, zigzag_encode_i64,
};

// Implementation modules
pub mod buffer;
pub mod error;
pub mod extract;
#[cfg(feature = "mmap")]
pub mod file;

// Public exports
pub use buffer::BufferData;
pub use error::{Error, Result};

// File features
#[cfg(feature = "mmap")]
pub use file::BufferFile;
