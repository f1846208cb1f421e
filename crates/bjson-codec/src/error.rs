//! Error types for the codec layer.
//!
//! Every failure aborts the whole top-level encode or decode. The decoder
//! never returns a partial tree and the encoder never retracts bytes it
//! has already written.

use crate::TypeTag;

/// Errors that can occur while encoding or decoding a BJSON node.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A tag byte read from the stream is not one of the defined codes.
    #[error("unknown type tag: {0}")]
    UnknownTypeTag(u8),

    /// The encoder was asked to write a value under a tag that does not
    /// match the value's own kind.
    #[error("cannot encode a {found} value as {expected}")]
    UnsupportedValueKind {
        /// The tag the caller asked for.
        expected: TypeTag,
        /// The tag of the value that was supplied.
        found: TypeTag,
    },

    /// A container count or string length read from the stream is
    /// negative or larger than the configured maximum.
    #[error("malformed length {len} (max {max:?})")]
    MalformedLength {
        /// The length as read from the wire.
        len: i64,
        /// The configured maximum, if any.
        max: Option<usize>,
    },

    /// The document nests deeper than the configured maximum.
    #[error("nesting depth exceeds maximum of {max}")]
    DepthExceeded {
        /// The configured maximum depth.
        max: usize,
    },

    /// A container or string is too long for the 4-byte length field.
    #[error("length {0} does not fit in a 4-byte length field")]
    LengthOverflow(usize),

    /// A string payload is not valid UTF-8.
    #[error("invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The underlying stream failed (truncated, disconnected, disk full).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
