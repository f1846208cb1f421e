//! BJSON codec core.
//!
//! This crate turns [`Value`] trees into a compact, self-describing byte
//! stream and back:
//!
//! - **Tags** ([`TypeTag`]) — the closed set of value kinds and their
//!   one-byte wire codes.
//! - **Values** ([`Value`], [`Object`], [`Array`]) — the document model.
//! - **Codec** ([`Encoder`], [`Decoder`]) — recursive writers and readers
//!   over the fixed-width primitives in `bjson-io`.
//! - **Config** ([`CodecConfig`], [`DecodeLimits`]) — per-stream byte
//!   order and decoder bounds.
//! - **Errors** ([`CodecError`]).
//!
//! # Wire format
//!
//! ```text
//! value  = tag payload
//! Object = count (key tag payload)*      key    = len utf8-bytes
//! Array  = count (tag payload)*          count  = i32
//! String = len utf8-bytes                len    = i32
//! scalar = fixed-width bytes in the stream's byte order
//! ```

mod config;
mod decoder;
mod encoder;
mod error;
mod tag;
mod value;

pub use bjson_io::ByteOrder;
pub use config::{CodecConfig, DecodeLimits};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::CodecError;
pub use tag::TypeTag;
pub use value::{Array, Object, Value};
