//! Error types for varbuf codec operations

/// Errors that can occur while encoding or decoding buffer values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer bytes remain than the value requires
    BufferUnderflow,
    /// No codec is defined for the requested kind
    UnsupportedType,
    /// Varint carries more bits than its target integer width
    VarintOverflow,
    /// Text payload is not valid UTF-8
    InvalidUtf8,
    /// Relative cursor move would leave the addressable range
    CursorOutOfRange,
}

/// Broad classification of codec errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The data ran out before the read completed
    Bounds,
    /// The bytes do not follow the wire format
    Format,
    /// The caller asked for something the codec cannot do
    Usage,
}

impl CodecError {
    /// Get the category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CodecError::BufferUnderflow | CodecError::CursorOutOfRange => ErrorCategory::Bounds,
            CodecError::VarintOverflow | CodecError::InvalidUtf8 => ErrorCategory::Format,
            CodecError::UnsupportedType => ErrorCategory::Usage,
        }
    }

    /// Whether the error only means the stream ended early
    ///
    /// Callers decoding a sequence of unknown length can treat this as
    /// end-of-stream instead of corruption.
    pub const fn is_underflow(&self) -> bool {
        matches!(self, CodecError::BufferUnderflow)
    }
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CodecError::BufferUnderflow => "Not enough bytes remaining in buffer",
            CodecError::UnsupportedType => "Unsupported value type",
            CodecError::VarintOverflow => "Varint exceeds target integer width",
            CodecError::InvalidUtf8 => "Text payload is not valid UTF-8",
            CodecError::CursorOutOfRange => "Cursor moved outside addressable range",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for CodecError {}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_categories() {
        assert_eq!(CodecError::BufferUnderflow.category(), ErrorCategory::Bounds);
        assert_eq!(CodecError::CursorOutOfRange.category(), ErrorCategory::Bounds);
        assert_eq!(CodecError::VarintOverflow.category(), ErrorCategory::Format);
        assert_eq!(CodecError::InvalidUtf8.category(), ErrorCategory::Format);
        assert_eq!(CodecError::UnsupportedType.category(), ErrorCategory::Usage);

        assert!(CodecError::BufferUnderflow.is_underflow());
        assert!(!CodecError::VarintOverflow.is_underflow());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CodecError::BufferUnderflow.to_string(),
            "Not enough bytes remaining in buffer"
        );
        assert_eq!(
            CodecError::UnsupportedType.to_string(),
            "Unsupported value type"
        );
    }
}
