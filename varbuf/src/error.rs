//! Error type for buffer file and tool operations

use varbuf_core::CodecError;

/// Errors from operations that touch the filesystem or decode stored data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Encoding or decoding failed
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Codec error behind this failure, if any
    pub fn as_codec(&self) -> Option<CodecError> {
        match self {
            Error::Codec(err) => Some(*err),
            Error::Io(_) => None,
        }
    }
}

/// Result type for file and tool operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_conversion() {
        let err: Error = CodecError::BufferUnderflow.into();
        assert_eq!(err.as_codec(), Some(CodecError::BufferUnderflow));
        assert_eq!(
            err.to_string(),
            "codec error: Not enough bytes remaining in buffer"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.as_codec().is_none());
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
