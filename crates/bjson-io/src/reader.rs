use std::io::{self, Read};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::{BinaryRead, ByteOrder};

/// Upper bound on the up-front allocation for a raw byte read. Larger
/// reads grow the buffer as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Reads one multi-byte field from `inner` in the reader's byte order.
macro_rules! read_ordered {
    ($self:ident, $method:ident) => {
        match $self.order {
            ByteOrder::Little => $self.inner.$method::<LittleEndian>(),
            ByteOrder::Big => $self.inner.$method::<BigEndian>(),
        }
    };
}

/// A [`BinaryRead`] implementation over any [`Read`] source.
///
/// Reads are unbuffered; wrap the source in a [`std::io::BufReader`] when
/// it is a file or socket.
#[derive(Debug)]
pub struct BinaryReader<R> {
    inner: R,
    order: ByteOrder,
}

impl<R: Read> BinaryReader<R> {
    /// Creates a reader that decodes multi-byte fields in `order`.
    pub fn new(inner: R, order: ByteOrder) -> Self {
        Self { inner, order }
    }

    /// Returns a shared reference to the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the reader and returns the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> BinaryRead for BinaryReader<R> {
    fn byte_order(&self) -> ByteOrder {
        self.order
    }

    fn read_u8(&mut self) -> io::Result<u8> {
        self.inner.read_u8()
    }

    fn read_i8(&mut self) -> io::Result<i8> {
        self.inner.read_i8()
    }

    fn read_i16(&mut self) -> io::Result<i16> {
        read_ordered!(self, read_i16)
    }

    fn read_u16(&mut self) -> io::Result<u16> {
        read_ordered!(self, read_u16)
    }

    fn read_i32(&mut self) -> io::Result<i32> {
        read_ordered!(self, read_i32)
    }

    fn read_u32(&mut self) -> io::Result<u32> {
        read_ordered!(self, read_u32)
    }

    fn read_i64(&mut self) -> io::Result<i64> {
        read_ordered!(self, read_i64)
    }

    fn read_u64(&mut self) -> io::Result<u64> {
        read_ordered!(self, read_u64)
    }

    fn read_f32(&mut self) -> io::Result<f32> {
        read_ordered!(self, read_f32)
    }

    fn read_f64(&mut self) -> io::Result<f64> {
        read_ordered!(self, read_f64)
    }

    fn read_bytes(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        (&mut self.inner).take(len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            tracing::trace!(expected = len, got = buf.len(), "short byte string read");
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {len} bytes, stream ended after {}", buf.len()),
            ));
        }
        Ok(buf)
    }
}
