//! Custom error types for TIFF processing

use std::fmt;
use std::io;

use crate::tiff::tags::get_tag_name;

/// TIFF-specific error types
#[derive(Debug)]
pub enum TiffError {
    /// I/O error
    IoError(io::Error),
    /// Caller supplied dimensions or a pixel format outside the supported set
    ParameterInvalid(String),
    /// Destination could not be created
    SinkUnavailable(io::Error),
    /// Source could not be opened
    SourceUnavailable(io::Error),
    /// Invalid TIFF header (byte order marker or magic mismatch)
    InvalidHeader,
    /// A tag carries a value this codec does not support
    UnsupportedFeature { tag: u16, value: u32 },
    /// Required directory fields were never seen
    IncompleteDirectory {
        width: u32,
        height: u32,
        total_bytes: u32,
        data_offset: Option<u32>,
    },
    /// Bits per sample did not resolve to 8, 16 or 32
    UnresolvedBitDepth(u32),
    /// Source ended before the requested number of bytes
    ShortRead,
    /// Sink accepted fewer bytes than requested
    ShortWrite,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for TiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiffError::IoError(e) => write!(f, "I/O error: {}", e),
            TiffError::ParameterInvalid(msg) => write!(f, "Invalid parameters: {}", msg),
            TiffError::SinkUnavailable(e) => write!(f, "Cannot create output: {}", e),
            TiffError::SourceUnavailable(e) => write!(f, "Cannot open input: {}", e),
            TiffError::InvalidHeader => write!(f, "Invalid TIFF header"),
            TiffError::UnsupportedFeature { tag, value } => write!(
                f,
                "Unsupported value {} for tag {} ({})",
                value,
                tag,
                get_tag_name(*tag)
            ),
            TiffError::IncompleteDirectory { width, height, total_bytes, data_offset } => write!(
                f,
                "Incomplete directory: width={}, height={}, total_bytes={}, data_offset={:?}",
                width, height, total_bytes, data_offset
            ),
            TiffError::UnresolvedBitDepth(bits) => write!(f, "Unsupported bits per component: {}", bits),
            TiffError::ShortRead => write!(f, "Unexpected end of data"),
            TiffError::ShortWrite => write!(f, "Output accepted fewer bytes than written"),
            TiffError::GenericError(msg) => write!(f, "TIFF error: {}", msg),
        }
    }
}

impl std::error::Error for TiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TiffError::IoError(e) | TiffError::SinkUnavailable(e) | TiffError::SourceUnavailable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TiffError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => TiffError::ShortRead,
            io::ErrorKind::WriteZero => TiffError::ShortWrite,
            _ => TiffError::IoError(error),
        }
    }
}

/// Result type for TIFF operations
pub type TiffResult<T> = Result<T, TiffError>;

impl From<String> for TiffError {
    fn from(msg: String) -> Self {
        TiffError::GenericError(msg)
    }
}
