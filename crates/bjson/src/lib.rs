//! # BJSON
//!
//! Compact, self-describing binary encoding for JSON-like documents.
//!
//! Every value is written as a one-byte type tag followed by its payload,
//! so a reader can rebuild the tree without a schema. Integers keep their
//! exact width and signedness (8 to 64 bits), floats keep their precision,
//! and object keys keep their insertion order.
//!
//! ## Quick Start
//!
//! ```rust
//! use bjson::prelude::*;
//!
//! let doc: Value = [
//!     ("name", Value::from("sensor-7")),
//!     ("reading", Value::Float32(21.5)),
//!     ("tags", Value::Array(vec![Value::from("indoor")])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = CodecConfig::default();
//! let bytes = bjson::to_vec(&doc, config)?;
//! assert_eq!(bjson::from_slice(&bytes, config)?, doc);
//! # Ok::<(), bjson::BjsonError>(())
//! ```
//!
//! ## Crates
//!
//! - `bjson-io` — fixed-width binary reader/writer with a byte order.
//! - `bjson-codec` — tags, values, encoder and decoder.
//! - `bjson` (this crate) — re-exports, [`BjsonError`] and helpers.

mod error;
mod helpers;

pub use bjson_codec::{
    Array, ByteOrder, CodecConfig, CodecError, DecodeLimits, Decoder, Encoder,
    Object, TypeTag, Value,
};
pub use bjson_io::{BinaryRead, BinaryReader, BinaryWrite, BinaryWriter};
pub use error::BjsonError;
pub use helpers::{from_slice, read_file, to_vec, write_file};

/// The types most callers need.
pub mod prelude {
    pub use crate::{
        BjsonError, ByteOrder, CodecConfig, DecodeLimits, Decoder, Encoder,
        Object, TypeTag, Value,
    };
}
