//! Encoding [`Value`] trees into BJSON bytes.

use std::io::Write;

use bjson_io::{BinaryWrite, BinaryWriter, ByteOrder};

use crate::{CodecConfig, CodecError, Object, TypeTag, Value};

/// Writes BJSON nodes to a binary sink.
///
/// The tag of every value comes from its [`Value`] variant. Bytes are
/// written as they are produced; a failure part way through leaves the
/// bytes already written in the sink.
///
/// ## Example
///
/// ```rust
/// use bjson_codec::{CodecConfig, Encoder, Value};
///
/// let mut encoder = Encoder::new(Vec::new(), CodecConfig::big_endian());
/// encoder.encode_node(&Value::UInt16(0x0102)).unwrap();
/// assert_eq!(encoder.into_inner().into_inner(), vec![10, 0x01, 0x02]);
/// ```
#[derive(Debug)]
pub struct Encoder<S> {
    sink: S,
}

impl<W: Write> Encoder<BinaryWriter<W>> {
    /// Creates an encoder over a plain writer using `config`'s byte order.
    pub fn new(writer: W, config: CodecConfig) -> Self {
        Self::from_sink(BinaryWriter::new(writer, config.byte_order))
    }
}

impl<S: BinaryWrite> Encoder<S> {
    /// Creates an encoder over an existing binary sink.
    pub fn from_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the byte order of the underlying sink.
    pub fn byte_order(&self) -> ByteOrder {
        self.sink.byte_order()
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Consumes the encoder, returning the underlying sink. Call
    /// [`Encoder::flush`] first if the sink buffers.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes the value's tag byte followed by its payload.
    ///
    /// # Errors
    /// - [`CodecError::LengthOverflow`] if a string or container is longer
    ///   than a 4-byte signed count allows.
    /// - [`CodecError::Io`] if the sink fails.
    pub fn encode_node(&mut self, value: &Value) -> Result<(), CodecError> {
        self.write_node(value)?;
        tracing::debug!(tag = %value.tag(), "encoded node");
        Ok(())
    }

    /// Writes only the payload of `value`, as the kind named by `tag`.
    ///
    /// # Errors
    /// Returns [`CodecError::UnsupportedValueKind`] without writing
    /// anything if `tag` is not the value's own kind.
    pub fn encode_value(&mut self, value: &Value, tag: TypeTag) -> Result<(), CodecError> {
        let found = value.tag();
        if found != tag {
            return Err(CodecError::UnsupportedValueKind {
                expected: tag,
                found,
            });
        }
        self.write_payload(value)
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        Ok(self.sink.flush()?)
    }

    fn write_node(&mut self, value: &Value) -> Result<(), CodecError> {
        self.sink.write_u8(value.tag().code())?;
        self.write_payload(value)
    }

    fn write_payload(&mut self, value: &Value) -> Result<(), CodecError> {
        match value {
            Value::Null => {}
            Value::Object(object) => self.write_object(object)?,
            Value::Array(array) => self.write_array(array)?,
            Value::String(s) => self.write_string(s)?,
            Value::Boolean(v) => self.sink.write_bool(*v)?,
            Value::Int8(v) => self.sink.write_i8(*v)?,
            Value::Int16(v) => self.sink.write_i16(*v)?,
            Value::Int32(v) => self.sink.write_i32(*v)?,
            Value::Int64(v) => self.sink.write_i64(*v)?,
            Value::UInt8(v) => self.sink.write_u8(*v)?,
            Value::UInt16(v) => self.sink.write_u16(*v)?,
            Value::UInt32(v) => self.sink.write_u32(*v)?,
            Value::UInt64(v) => self.sink.write_u64(*v)?,
            Value::Float32(v) => self.sink.write_f32(*v)?,
            Value::Float64(v) => self.sink.write_f64(*v)?,
        }
        Ok(())
    }

    fn write_object(&mut self, object: &Object) -> Result<(), CodecError> {
        tracing::trace!(len = object.len(), "encoding object");
        self.write_len(object.len())?;
        for (key, value) in object {
            self.write_string(key)?;
            self.write_node(value)?;
        }
        Ok(())
    }

    fn write_array(&mut self, array: &[Value]) -> Result<(), CodecError> {
        tracing::trace!(len = array.len(), "encoding array");
        self.write_len(array.len())?;
        for value in array {
            self.write_node(value)?;
        }
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<(), CodecError> {
        check_len(s.len())?;
        Ok(self.sink.write_length_prefixed_bytes(s.as_bytes())?)
    }

    fn write_len(&mut self, len: usize) -> Result<(), CodecError> {
        Ok(self.sink.write_i32(check_len(len)?)?)
    }
}

fn check_len(len: usize) -> Result<i32, CodecError> {
    i32::try_from(len).map_err(|_| CodecError::LengthOverflow(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value) -> Vec<u8> {
        let mut e = Encoder::new(Vec::new(), CodecConfig::default());
        e.encode_node(value).unwrap();
        e.into_inner().into_inner()
    }

    #[test]
    fn test_null_is_tag_only() {
        assert_eq!(encode(&Value::Null), vec![0]);
    }

    #[test]
    fn test_boolean_payload() {
        assert_eq!(encode(&Value::Boolean(true)), vec![4, 1]);
        assert_eq!(encode(&Value::Boolean(false)), vec![4, 0]);
    }

    #[test]
    fn test_string_is_length_prefixed() {
        assert_eq!(encode(&Value::from("ab")), vec![3, 2, 0, 0, 0, b'a', b'b']);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(encode(&Value::Array(vec![])), vec![2, 0, 0, 0, 0]);
        assert_eq!(encode(&Value::Object(Object::new())), vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_value_matching_tag_writes_payload_only() {
        let mut e = Encoder::new(Vec::new(), CodecConfig::default());
        e.encode_value(&Value::Int8(-1), TypeTag::Int8).unwrap();
        assert_eq!(e.into_inner().into_inner(), vec![0xff]);
    }

    #[test]
    fn test_encode_value_mismatched_tag_writes_nothing() {
        let mut e = Encoder::new(Vec::new(), CodecConfig::default());
        let err = e
            .encode_value(&Value::from("x"), TypeTag::Int32)
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnsupportedValueKind {
                expected: TypeTag::Int32,
                found: TypeTag::String,
            }
        ));
        assert!(e.into_inner().into_inner().is_empty());
    }

    #[test]
    fn test_check_len_overflow() {
        assert_eq!(check_len(5).unwrap(), 5);
        let too_long = i32::MAX as usize + 1;
        assert!(matches!(
            check_len(too_long),
            Err(CodecError::LengthOverflow(n)) if n == too_long
        ));
    }

    #[test]
    fn test_byte_order_accessor() {
        let e = Encoder::new(Vec::new(), CodecConfig::big_endian());
        assert_eq!(e.byte_order(), ByteOrder::Big);
        assert!(e.get_ref().get_ref().is_empty());
    }
}
