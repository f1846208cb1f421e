use std::io::{self, Write};

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::{BinaryWrite, ByteOrder};

/// Writes one multi-byte field to `inner` in the writer's byte order.
macro_rules! write_ordered {
    ($self:ident, $method:ident, $v:expr) => {
        match $self.order {
            ByteOrder::Little => $self.inner.$method::<LittleEndian>($v),
            ByteOrder::Big => $self.inner.$method::<BigEndian>($v),
        }
    };
}

/// A [`BinaryWrite`] implementation over any [`Write`] sink.
#[derive(Debug)]
pub struct BinaryWriter<W> {
    inner: W,
    order: ByteOrder,
}

impl<W: Write> BinaryWriter<W> {
    /// Creates a writer that encodes multi-byte fields in `order`.
    pub fn new(inner: W, order: ByteOrder) -> Self {
        Self { inner, order }
    }

    /// Returns a shared reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consumes the writer and returns the underlying sink.
    ///
    /// Does not flush; call [`BinaryWrite::flush`] first if the sink
    /// buffers.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> BinaryWrite for BinaryWriter<W> {
    fn byte_order(&self) -> ByteOrder {
        self.order
    }

    fn write_u8(&mut self, v: u8) -> io::Result<()> {
        self.inner.write_u8(v)
    }

    fn write_i8(&mut self, v: i8) -> io::Result<()> {
        self.inner.write_i8(v)
    }

    fn write_i16(&mut self, v: i16) -> io::Result<()> {
        write_ordered!(self, write_i16, v)
    }

    fn write_u16(&mut self, v: u16) -> io::Result<()> {
        write_ordered!(self, write_u16, v)
    }

    fn write_i32(&mut self, v: i32) -> io::Result<()> {
        write_ordered!(self, write_i32, v)
    }

    fn write_u32(&mut self, v: u32) -> io::Result<()> {
        write_ordered!(self, write_u32, v)
    }

    fn write_i64(&mut self, v: i64) -> io::Result<()> {
        write_ordered!(self, write_i64, v)
    }

    fn write_u64(&mut self, v: u64) -> io::Result<()> {
        write_ordered!(self, write_u64, v)
    }

    fn write_f32(&mut self, v: f32) -> io::Result<()> {
        write_ordered!(self, write_f32, v)
    }

    fn write_f64(&mut self, v: f64) -> io::Result<()> {
        write_ordered!(self, write_f64, v)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
