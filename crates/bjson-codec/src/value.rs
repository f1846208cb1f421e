//! The in-memory BJSON document model.
//!
//! A [`Value`] is a closed sum type: exactly one variant is active, and
//! each variant maps to exactly one [`TypeTag`]. The encoder derives the
//! tag from the variant, so there is no way to hand it a value it does
//! not know how to write.

use std::ops::Index;

use indexmap::IndexMap;

use crate::TypeTag;

/// An ordered, string-keyed map of values.
///
/// Insertion order is part of the round-trip contract: entries are
/// encoded in the order they are stored. Inserting an existing key
/// replaces its value and keeps its original position.
pub type Object = IndexMap<String, Value>;

/// An ordered sequence of values.
pub type Array = Vec<Value>;

static NULL: Value = Value::Null;

/// A single BJSON value.
///
/// Containers own their children by value. `Null` carries no state.
///
/// Equality is order-sensitive for objects: two objects with the same
/// entries in a different order are not equal, since they encode to
/// different bytes. Floats compare with IEEE semantics.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Object(Object),
    Array(Array),
    String(String),
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
}

impl Value {
    /// Returns the tag this value is encoded under.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Object(_) => TypeTag::Object,
            Self::Array(_) => TypeTag::Array,
            Self::String(_) => TypeTag::String,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Int8(_) => TypeTag::Int8,
            Self::Int16(_) => TypeTag::Int16,
            Self::Int32(_) => TypeTag::Int32,
            Self::Int64(_) => TypeTag::Int64,
            Self::UInt8(_) => TypeTag::UInt8,
            Self::UInt16(_) => TypeTag::UInt16,
            Self::UInt32(_) => TypeTag::UInt32,
            Self::UInt64(_) => TypeTag::UInt64,
            Self::Float32(_) => TypeTag::Float32,
            Self::Float64(_) => TypeTag::Float64,
        }
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the elements mutably if this is an `Array`.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the entries if this is an `Object`.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the entries mutably if this is an `Object`.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Any signed integer, widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int8(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::Int64(v) => Some(v),
            _ => None,
        }
    }

    /// Any unsigned integer, widened to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::UInt8(v) => Some(v.into()),
            Self::UInt16(v) => Some(v.into()),
            Self::UInt32(v) => Some(v.into()),
            Self::UInt64(v) => Some(v),
            _ => None,
        }
    }

    /// Either float, widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float32(v) => Some(v.into()),
            Self::Float64(v) => Some(v),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            // `IndexMap`'s own equality ignores order.
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len() && a.iter().eq(b.iter())
            }
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::UInt8(a), Self::UInt8(b)) => a == b,
            (Self::UInt16(a), Self::UInt16(b)) => a == b,
            (Self::UInt32(a), Self::UInt32(b)) => a == b,
            (Self::UInt64(a), Self::UInt64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a == b,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Boolean,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    Array => Array,
    Object => Object,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

/// Looks up an object entry. Missing keys and non-objects yield `Null`.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.as_object()
            .and_then(|o| o.get(key))
            .unwrap_or(&NULL)
    }
}

/// Looks up an array element. Out-of-range indices and non-arrays yield
/// `Null`.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, i: usize) -> &Value {
        self.as_array().and_then(|a| a.get(i)).unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Value::default().is_null());
        assert_eq!(Value::from(()), Value::Null);
    }

    #[test]
    fn test_tag_follows_variant() {
        assert_eq!(Value::Null.tag(), TypeTag::Null);
        assert_eq!(Value::from("x").tag(), TypeTag::String);
        assert_eq!(Value::from(1u16).tag(), TypeTag::UInt16);
        assert_eq!(Value::from(-1i64).tag(), TypeTag::Int64);
        assert_eq!(Value::from(1.0f32).tag(), TypeTag::Float32);
        assert_eq!(Value::Array(vec![]).tag(), TypeTag::Array);
        assert_eq!(Value::Object(Object::new()).tag(), TypeTag::Object);
    }

    #[test]
    fn test_numeric_accessors_widen() {
        assert_eq!(Value::Int8(-3).as_i64(), Some(-3));
        assert_eq!(Value::UInt32(7).as_u64(), Some(7));
        assert_eq!(Value::Float32(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::UInt8(1).as_i64(), None);
        assert_eq!(Value::Int8(1).as_u64(), None);
    }

    #[test]
    fn test_from_iterator_builds_ordered_object() {
        let v: Value = [("b", 1i32), ("a", 2i32)].into_iter().collect();
        let keys: Vec<&str> =
            v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_object_reinsert_keeps_position() {
        let mut o = Object::new();
        o.insert("a".into(), Value::Int32(1));
        o.insert("b".into(), Value::Int32(2));
        o.insert("a".into(), Value::Int32(3));
        let entries: Vec<_> = o.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (&"a".to_string(), &Value::Int32(3)));
    }

    #[test]
    fn test_object_equality_is_order_sensitive() {
        let ab: Value = [("a", 1i32), ("b", 2i32)].into_iter().collect();
        let ba: Value = [("b", 2i32), ("a", 1i32)].into_iter().collect();
        let ab_again: Value = [("a", 1i32), ("b", 2i32)].into_iter().collect();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab_again);

        // Nested objects are compared the same way.
        let outer_ab = Value::Array(vec![ab.clone()]);
        let outer_ba = Value::Array(vec![ba]);
        assert_ne!(outer_ab, outer_ba);
    }

    #[test]
    fn test_equality_distinguishes_kinds() {
        assert_ne!(Value::Int32(1), Value::Int64(1));
        assert_ne!(Value::UInt8(0), Value::Boolean(false));
        assert_ne!(Value::Null, Value::Array(vec![]));
        assert!(Value::Float64(f64::NAN) != Value::Float64(f64::NAN));
    }

    #[test]
    fn test_object_with_extra_entry_is_unequal() {
        let a: Value = [("a", 1i32)].into_iter().collect();
        let ab: Value = [("a", 1i32), ("b", 2i32)].into_iter().collect();
        assert_ne!(a, ab);
        assert_ne!(ab, a);
    }

    #[test]
    fn test_index_missing_is_null() {
        let v: Value = [("a", true)].into_iter().collect();
        assert_eq!(v["a"], Value::Boolean(true));
        assert!(v["missing"].is_null());
        assert!(v[0].is_null());

        let arr = Value::Array(vec![Value::from("x")]);
        assert_eq!(arr[0].as_str(), Some("x"));
        assert!(arr[5].is_null());
    }

    #[test]
    fn test_mutable_container_accessors() {
        let mut v = Value::Array(vec![]);
        v.as_array_mut().unwrap().push(Value::Boolean(false));
        assert_eq!(v.as_array().unwrap().len(), 1);
        assert!(v.as_object_mut().is_none());
    }
}
