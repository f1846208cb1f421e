//! Unified error type for the BJSON crates.

use bjson_codec::CodecError;

/// Top-level error that wraps the codec error and file-level I/O.
///
/// I/O failures *inside* an encode or decode arrive as
/// [`CodecError::Io`]; the [`BjsonError::Io`] variant is for opening,
/// creating or flushing files around the codec call.
#[derive(Debug, thiserror::Error)]
pub enum BjsonError {
    /// An encode or decode failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A file could not be opened, created or flushed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
