//! Primitive binary I/O layer for BJSON.
//!
//! Provides the [`BinaryRead`] and [`BinaryWrite`] traits that abstract over
//! fixed-width reads and writes, and [`BinaryReader`] / [`BinaryWriter`]
//! implementations on top of any [`std::io::Read`] / [`std::io::Write`].
//!
//! # Byte order
//!
//! Every reader and writer carries one [`ByteOrder`], chosen at
//! construction. It applies to every multi-byte integer, float and length
//! prefix. Single bytes and raw byte strings are never reordered.
//!
//! Failures are plain [`std::io::Error`]s. A short read surfaces as
//! [`std::io::ErrorKind::UnexpectedEof`].

mod reader;
mod writer;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// Order of bytes within a multi-byte field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first (network order).
    Big,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little-endian"),
            Self::Big => write!(f, "big-endian"),
        }
    }
}

/// A source of fixed-width binary values.
pub trait BinaryRead {
    /// The byte order used for multi-byte fields.
    fn byte_order(&self) -> ByteOrder;

    /// Reads one unsigned byte.
    fn read_u8(&mut self) -> io::Result<u8>;
    /// Reads one signed byte.
    fn read_i8(&mut self) -> io::Result<i8>;
    /// Reads a 2-byte signed integer.
    fn read_i16(&mut self) -> io::Result<i16>;
    /// Reads a 2-byte unsigned integer.
    fn read_u16(&mut self) -> io::Result<u16>;
    /// Reads a 4-byte signed integer.
    fn read_i32(&mut self) -> io::Result<i32>;
    /// Reads a 4-byte unsigned integer.
    fn read_u32(&mut self) -> io::Result<u32>;
    /// Reads an 8-byte signed integer.
    fn read_i64(&mut self) -> io::Result<i64>;
    /// Reads an 8-byte unsigned integer.
    fn read_u64(&mut self) -> io::Result<u64>;
    /// Reads a 4-byte IEEE-754 float.
    fn read_f32(&mut self) -> io::Result<f32>;
    /// Reads an 8-byte IEEE-754 float.
    fn read_f64(&mut self) -> io::Result<f64>;

    /// Reads exactly `len` raw bytes.
    fn read_bytes(&mut self, len: usize) -> io::Result<Vec<u8>>;

    /// Reads one byte; any non-zero value is `true`.
    fn read_bool(&mut self) -> io::Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a 4-byte signed length followed by that many raw bytes.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidData`] for a negative length.
    fn read_length_prefixed_bytes(&mut self) -> io::Result<Vec<u8>> {
        let len = self.read_i32()?;
        let len = usize::try_from(len).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("negative length prefix: {len}"),
            )
        })?;
        self.read_bytes(len)
    }
}

/// A sink for fixed-width binary values.
pub trait BinaryWrite {
    /// The byte order used for multi-byte fields.
    fn byte_order(&self) -> ByteOrder;

    /// Writes one unsigned byte.
    fn write_u8(&mut self, v: u8) -> io::Result<()>;
    /// Writes one signed byte.
    fn write_i8(&mut self, v: i8) -> io::Result<()>;
    /// Writes a 2-byte signed integer.
    fn write_i16(&mut self, v: i16) -> io::Result<()>;
    /// Writes a 2-byte unsigned integer.
    fn write_u16(&mut self, v: u16) -> io::Result<()>;
    /// Writes a 4-byte signed integer.
    fn write_i32(&mut self, v: i32) -> io::Result<()>;
    /// Writes a 4-byte unsigned integer.
    fn write_u32(&mut self, v: u32) -> io::Result<()>;
    /// Writes an 8-byte signed integer.
    fn write_i64(&mut self, v: i64) -> io::Result<()>;
    /// Writes an 8-byte unsigned integer.
    fn write_u64(&mut self, v: u64) -> io::Result<()>;
    /// Writes a 4-byte IEEE-754 float.
    fn write_f32(&mut self, v: f32) -> io::Result<()>;
    /// Writes an 8-byte IEEE-754 float.
    fn write_f64(&mut self, v: f64) -> io::Result<()>;

    /// Writes raw bytes with no prefix.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Flushes any buffered output to the underlying sink.
    fn flush(&mut self) -> io::Result<()>;

    /// Writes `1` for `true` and `0` for `false`.
    fn write_bool(&mut self, v: bool) -> io::Result<()> {
        self.write_u8(u8::from(v))
    }

    /// Writes a 4-byte signed length followed by the raw bytes.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] if `bytes` is longer than
    /// `i32::MAX`.
    fn write_length_prefixed_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        let len = i32::try_from(bytes.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("byte string too long for length prefix: {}", bytes.len()),
            )
        })?;
        self.write_i32(len)?;
        self.write_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_default_is_little() {
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
    }

    #[test]
    fn test_byte_order_display() {
        assert_eq!(ByteOrder::Little.to_string(), "little-endian");
        assert_eq!(ByteOrder::Big.to_string(), "big-endian");
    }

    #[test]
    fn test_byte_order_comes_only_from_construction() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let mut writer = BinaryWriter::new(Vec::new(), order);
            assert_eq!(writer.byte_order(), order);
            writer.write_u32(0x0102_0304).unwrap();
            let bytes = writer.into_inner();
            let expected = match order {
                ByteOrder::Little => [4, 3, 2, 1],
                ByteOrder::Big => [1, 2, 3, 4],
            };
            assert_eq!(bytes, expected);

            let mut reader = BinaryReader::new(&bytes[..], order);
            assert_eq!(reader.byte_order(), order);
            assert_eq!(reader.read_u32().unwrap(), 0x0102_0304);
        }
    }
}
