//! Error types for acadrust library

use std::io;
use thiserror::Error;

/// Main error type for acadrust operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported CAD file version
    #[error("Unsupported CAD version: {0:?}")]
    UnsupportedVersion(String),

    /// Error during compression/decompression
    #[error("Compression error: {0}")]
    Compression(String),

    /// Error parsing CAD file format
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid DXF code encountered
    #[error("Invalid DXF code: {0}")]
    InvalidDxfCode(i32),

    /// Invalid handle reference
    #[error("Invalid handle: {0:#X}")]
    InvalidHandle(u64),

    /// Object not found in document
    #[error("Object not found: handle {0:#X}")]
    ObjectNotFound(u64),

    /// Invalid entity type
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// CRC checksum mismatch
    #[error("CRC checksum mismatch: expected {expected:#X}, got {actual:#X}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    /// Invalid file header
    #[error("Invalid file header: {0}")]
    InvalidHeader(String),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Invalid sentinel in file
    #[error("Invalid sentinel: {0}")]
    InvalidSentinel(String),

    /// Decompression error
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Decryption error
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Feature not yet implemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// A required section was absent from the file's section locator.
    #[error("Missing section: {0}")]
    MissingSection(String),

    /// An object's bit stream was malformed, truncated, or failed its CRC.
    #[error("Malformed record at handle {handle:#X}: {reason}")]
    MalformedRecord { handle: u64, reason: String },

    /// A handle was requested that has no entry in the object map.
    #[error("Unknown handle: {0:#X}")]
    UnknownHandle(u64),

    /// A handle resolved to a type with no registered decoder.
    #[error("Unsupported type '{type_name}' for handle {handle:#X}")]
    UnsupportedType { handle: u64, type_name: String },

    /// `to_points` was invoked for a type with no point projection rule.
    #[error("No point projection for type '{0}'")]
    NoPointProjection(String),

    /// A bit-stream cursor advanced past the declared bit length of its region.
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DxfError {
    /// The boundary error code named in the specification's external
    /// interfaces table, for callers that key off a stable string rather
    /// than matching on the enum variant.
    pub fn code(&self) -> &'static str {
        match self {
            DxfError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            DxfError::MissingSection(_) => "MISSING_SECTION",
            DxfError::ChecksumMismatch { .. } | DxfError::InvalidSentinel(_) => "CRC_MISMATCH",
            DxfError::MalformedRecord { .. } | DxfError::Parse(_) => "MALFORMED_RECORD",
            DxfError::UnknownHandle(_) | DxfError::ObjectNotFound(_) => "UNKNOWN_HANDLE",
            DxfError::UnsupportedType { .. } | DxfError::InvalidEntityType(_) => {
                "UNSUPPORTED_TYPE"
            }
            DxfError::NoPointProjection(_) => "NO_POINT_PROJECTION",
            DxfError::OutOfBounds(_) => "OUT_OF_BOUNDS",
            _ => "ERROR",
        }
    }
}

/// Result type alias for acadrust operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnsupportedVersion("AC1009".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported CAD version: \"AC1009\""
        );
    }

    #[test]
    fn test_checksum_error() {
        let err = DxfError::ChecksumMismatch {
            expected: 0x1234,
            actual: 0x5678,
        };
        assert!(err.to_string().contains("0x1234"));
        assert!(err.to_string().contains("0x5678"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }

    #[test]
    fn test_boundary_codes() {
        assert_eq!(
            DxfError::UnsupportedVersion("AC1009".into()).code(),
            "UNSUPPORTED_VERSION"
        );
        assert_eq!(DxfError::MissingSection("AcDb:Handles".into()).code(), "MISSING_SECTION");
        assert_eq!(
            DxfError::ChecksumMismatch { expected: 1, actual: 2 }.code(),
            "CRC_MISMATCH"
        );
        assert_eq!(
            DxfError::MalformedRecord { handle: 0x20, reason: "truncated".into() }.code(),
            "MALFORMED_RECORD"
        );
        assert_eq!(DxfError::UnknownHandle(0x20).code(), "UNKNOWN_HANDLE");
        assert_eq!(
            DxfError::UnsupportedType { handle: 0x20, type_name: "BODY".into() }.code(),
            "UNSUPPORTED_TYPE"
        );
        assert_eq!(
            DxfError::NoPointProjection("HATCH".into()).code(),
            "NO_POINT_PROJECTION"
        );
        assert_eq!(DxfError::OutOfBounds("bit cursor".into()).code(), "OUT_OF_BOUNDS");
    }
}


