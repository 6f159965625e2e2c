use std::fmt;

/// Errors raised while turning a `ClientMessage` into a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SerializationError {
    /// The serialized metadata does not fit in the 4-byte length header.
    MetadataTooLarge { len: usize },

    /// The metadata contains a value the metadata format cannot represent.
    Unrepresentable(String),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::MetadataTooLarge { len } => write!(
                f,
                "metadata too large: {} bytes exceeds the {} byte header limit",
                len,
                u32::MAX
            ),
            SerializationError::Unrepresentable(reason) => {
                write!(f, "unrepresentable metadata: {}", reason)
            }
        }
    }
}

impl std::error::Error for SerializationError {}

/// Errors raised while reading a frame back into a `ClientMessage`.
///
/// Every variant means the frame was rejected; a frame is never partially
/// decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum FramingError {
    /// Fewer bytes than the fixed-size header were supplied.
    TruncatedHeader { len: usize },

    /// The header announces more metadata bytes than the frame contains.
    TruncatedMetadata { expected: usize, available: usize },

    /// The metadata region could not be deserialized.
    MalformedMetadata(String),
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramingError::TruncatedHeader { len } => {
                write!(f, "truncated header: got {} of 4 bytes", len)
            }
            FramingError::TruncatedMetadata {
                expected,
                available,
            } => write!(
                f,
                "truncated metadata: header announces {} bytes, {} available",
                expected, available
            ),
            FramingError::MalformedMetadata(reason) => {
                write!(f, "malformed metadata: {}", reason)
            }
        }
    }
}

impl std::error::Error for FramingError {}
