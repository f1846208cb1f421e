//! Decoding BJSON bytes into [`Value`] trees.

use std::io::Read;

use bjson_io::{BinaryRead, BinaryReader, ByteOrder};

use crate::{CodecConfig, CodecError, DecodeLimits, Object, TypeTag, Value};

/// Upper bound on container capacity reserved up front. A declared count
/// is untrusted until its entries have actually been read.
const PREALLOC_LIMIT: usize = 1024;

/// Reads BJSON nodes from a binary source.
///
/// The decoder owns its source for its whole lifetime, so one stream can
/// never be shared by two decodes at once. Byte order is a property of
/// the source and is fixed when the decoder is built.
///
/// ## Example
///
/// ```rust
/// use bjson_codec::{CodecConfig, Decoder, Value};
///
/// // Tag Int16 (6) followed by 300 in little-endian.
/// let bytes = [6u8, 0x2c, 0x01];
/// let mut decoder = Decoder::new(&bytes[..], CodecConfig::default());
/// assert_eq!(decoder.decode_node().unwrap(), Value::Int16(300));
/// ```
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    limits: DecodeLimits,
}

impl<R: Read> Decoder<BinaryReader<R>> {
    /// Creates a decoder over a plain reader using `config`'s byte order
    /// and limits.
    pub fn new(reader: R, config: CodecConfig) -> Self {
        Self::from_source(BinaryReader::new(reader, config.byte_order), config.limits)
    }
}

impl<S: BinaryRead> Decoder<S> {
    /// Creates a decoder over an existing binary source.
    pub fn from_source(source: S, limits: DecodeLimits) -> Self {
        Self { source, limits }
    }

    /// Returns the byte order of the underlying source.
    pub fn byte_order(&self) -> ByteOrder {
        self.source.byte_order()
    }

    /// Returns the limits applied to every decode.
    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Returns a reference to the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Consumes the decoder, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads one tag byte and the value it introduces.
    ///
    /// # Errors
    /// - [`CodecError::UnknownTypeTag`] if any tag in the tree is not a
    ///   defined code. Nothing past that tag byte is consumed.
    /// - [`CodecError::MalformedLength`] for a negative count or string
    ///   length. This check always applies, even with
    ///   [`DecodeLimits::unlimited`].
    /// - [`CodecError::MalformedLength`] / [`CodecError::DepthExceeded`]
    ///   when a configured limit is hit.
    /// - [`CodecError::InvalidUtf8`] for a string that is not UTF-8.
    /// - [`CodecError::Io`] when the source fails or runs out.
    ///
    /// No partial tree is returned on error.
    pub fn decode_node(&mut self) -> Result<Value, CodecError> {
        let tag = self.read_tag()?;
        let value = self.decode_at(tag, 0)?;
        tracing::debug!(%tag, "decoded node");
        Ok(value)
    }

    /// Reads the payload of a value whose tag the caller already consumed.
    pub fn decode_value(&mut self, tag: TypeTag) -> Result<Value, CodecError> {
        self.decode_at(tag, 0)
    }

    fn decode_at(&mut self, tag: TypeTag, depth: usize) -> Result<Value, CodecError> {
        if let Some(max) = self.limits.max_depth {
            if depth > max {
                tracing::warn!(depth, max, "rejected nesting depth");
                return Err(CodecError::DepthExceeded { max });
            }
        }

        let value = match tag {
            TypeTag::Null => Value::Null,
            TypeTag::Object => Value::Object(self.decode_object(depth)?),
            TypeTag::Array => Value::Array(self.decode_array(depth)?),
            TypeTag::String => Value::String(self.read_string()?),
            TypeTag::Boolean => Value::Boolean(self.source.read_bool()?),
            TypeTag::Int8 => Value::Int8(self.source.read_i8()?),
            TypeTag::Int16 => Value::Int16(self.source.read_i16()?),
            TypeTag::Int32 => Value::Int32(self.source.read_i32()?),
            TypeTag::Int64 => Value::Int64(self.source.read_i64()?),
            TypeTag::UInt8 => Value::UInt8(self.source.read_u8()?),
            TypeTag::UInt16 => Value::UInt16(self.source.read_u16()?),
            TypeTag::UInt32 => Value::UInt32(self.source.read_u32()?),
            TypeTag::UInt64 => Value::UInt64(self.source.read_u64()?),
            TypeTag::Float32 => Value::Float32(self.source.read_f32()?),
            TypeTag::Float64 => Value::Float64(self.source.read_f64()?),
        };
        Ok(value)
    }

    /// Duplicate keys: the later value replaces the earlier one, which
    /// keeps its position.
    fn decode_object(&mut self, depth: usize) -> Result<Object, CodecError> {
        let len = self.read_len()?;
        tracing::trace!(len, depth, "decoding object");

        let mut object = Object::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            let key = self.read_string()?;
            let tag = self.read_tag()?;
            let value = self.decode_at(tag, depth + 1)?;
            object.insert(key, value);
        }
        Ok(object)
    }

    fn decode_array(&mut self, depth: usize) -> Result<Vec<Value>, CodecError> {
        let len = self.read_len()?;
        tracing::trace!(len, depth, "decoding array");

        let mut array = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            let tag = self.read_tag()?;
            array.push(self.decode_at(tag, depth + 1)?);
        }
        Ok(array)
    }

    fn read_tag(&mut self) -> Result<TypeTag, CodecError> {
        TypeTag::try_from(self.source.read_u8()?)
    }

    fn read_string(&mut self) -> Result<String, CodecError> {
        let len = self.read_len()?;
        let bytes = self.source.read_bytes(len)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Reads a 4-byte count or length and checks it against the limits.
    fn read_len(&mut self) -> Result<usize, CodecError> {
        let raw = self.source.read_i32()?;
        let max = self.limits.max_len;
        match usize::try_from(raw) {
            Ok(len) if max.is_none_or(|max| len <= max) => Ok(len),
            _ => {
                tracing::warn!(len = raw, ?max, "rejected length");
                Err(CodecError::MalformedLength {
                    len: raw.into(),
                    max,
                })
            }
        }
    }
}
