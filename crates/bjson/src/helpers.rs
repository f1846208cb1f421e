//! One-call helpers over in-memory buffers and files.
//!
//! File helpers open the file, run exactly one top-level encode or
//! decode, and close the file before returning, on success and on error.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use bjson_codec::{CodecConfig, Decoder, Encoder, Value};

use crate::BjsonError;

/// Encodes `value` into a new byte vector.
pub fn to_vec(value: &Value, config: CodecConfig) -> Result<Vec<u8>, BjsonError> {
    let mut encoder = Encoder::new(Vec::new(), config);
    encoder.encode_node(value)?;
    Ok(encoder.into_inner().into_inner())
}

/// Decodes the first node in `bytes`. Trailing bytes are ignored.
pub fn from_slice(bytes: &[u8], config: CodecConfig) -> Result<Value, BjsonError> {
    Ok(Decoder::new(bytes, config).decode_node()?)
}

/// Decodes the first node stored in the file at `path`.
pub fn read_file(path: impl AsRef<Path>, config: CodecConfig) -> Result<Value, BjsonError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file), config);
    let value = decoder.decode_node()?;
    tracing::debug!(path = %path.display(), tag = %value.tag(), "read bjson file");
    Ok(value)
}

/// Creates (or truncates) the file at `path` and writes `value` to it.
///
/// The file is flushed before this returns. If encoding fails part way,
/// the file is left holding whatever was written up to the failure.
pub fn write_file(
    path: impl AsRef<Path>,
    value: &Value,
    config: CodecConfig,
) -> Result<(), BjsonError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), config);
    encoder.encode_node(value)?;
    encoder.flush()?;
    tracing::debug!(path = %path.display(), tag = %value.tag(), "wrote bjson file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use bjson_codec::CodecError;

    use super::*;

    #[test]
    fn test_to_vec_then_from_slice() {
        let value: Value = [("n", Value::UInt64(u64::MAX))].into_iter().collect();
        let config = CodecConfig::default();
        let bytes = to_vec(&value, config).unwrap();
        assert_eq!(from_slice(&bytes, config).unwrap(), value);
    }

    #[test]
    fn test_one_config_drives_encoder_decoder_and_helpers() {
        let config = CodecConfig::big_endian().with_limits(bjson_codec::DecodeLimits::strict());
        let value = Value::Int32(-2);

        let bytes = to_vec(&value, config).unwrap();
        let mut encoder = Encoder::new(Vec::new(), config);
        encoder.encode_node(&value).unwrap();
        assert_eq!(encoder.into_inner().into_inner(), bytes);
        assert_eq!(bytes, [7, 0xff, 0xff, 0xff, 0xfe]);

        assert_eq!(from_slice(&bytes, config).unwrap(), value);
        assert_eq!(Decoder::new(&bytes[..], config).decode_node().unwrap(), value);
    }

    #[test]
    fn test_from_slice_ignores_trailing_bytes() {
        let config = CodecConfig::default();
        let value = from_slice(&[0, 1, 2, 3], config).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_from_slice_reports_codec_error() {
        let err = from_slice(&[200], CodecConfig::default()).unwrap_err();
        assert!(matches!(err, BjsonError::Codec(CodecError::UnknownTypeTag(200))));
    }
}
