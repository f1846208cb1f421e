//! The type-tag registry.
//!
//! Every encoded value starts with one tag byte naming its kind. The
//! table below is the wire contract: codes are stable and never reused.
//!
//! | Code | Tag     | Payload width |
//! |------|---------|---------------|
//! | 0    | Null    | 0             |
//! | 1    | Object  | count + entries |
//! | 2    | Array   | count + elements |
//! | 3    | String  | length + UTF-8 |
//! | 4    | Boolean | 1             |
//! | 5    | Int8    | 1             |
//! | 6    | Int16   | 2             |
//! | 7    | Int32   | 4             |
//! | 8    | Int64   | 8             |
//! | 9    | UInt8   | 1             |
//! | 10   | UInt16  | 2             |
//! | 11   | UInt32  | 4             |
//! | 12   | UInt64  | 8             |
//! | 13   | Float32 | 4             |
//! | 14   | Float64 | 8             |

use std::fmt;

use crate::CodecError;

/// The kind of a BJSON value, as written in its tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeTag {
    Null = 0,
    Object = 1,
    Array = 2,
    String = 3,
    Boolean = 4,
    Int8 = 5,
    Int16 = 6,
    Int32 = 7,
    Int64 = 8,
    UInt8 = 9,
    UInt16 = 10,
    UInt32 = 11,
    UInt64 = 12,
    Float32 = 13,
    Float64 = 14,
}

impl TypeTag {
    /// Every tag, in code order.
    pub const ALL: [TypeTag; 15] = [
        Self::Null,
        Self::Object,
        Self::Array,
        Self::String,
        Self::Boolean,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Float32,
        Self::Float64,
    ];

    /// The byte written on the wire for this tag.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Payload width in bytes for fixed-width kinds.
    ///
    /// Returns `None` for Object, Array and String, whose payloads are
    /// self-delimited by a count or length prefix.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Null => Some(0),
            Self::Boolean | Self::Int8 | Self::UInt8 => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Float32 => Some(4),
            Self::Int64 | Self::UInt64 | Self::Float64 => Some(8),
            Self::Object | Self::Array | Self::String => None,
        }
    }

    /// Returns `true` for Object and Array.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    /// The wire name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
        }
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(CodecError::UnknownTypeTag(code))
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
