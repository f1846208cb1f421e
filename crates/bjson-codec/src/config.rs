//! Codec configuration.

use bjson_io::ByteOrder;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DecodeLimits
// ---------------------------------------------------------------------------

/// Bounds the decoder enforces on untrusted input.
///
/// The wire format itself does not bound container counts, string
/// lengths or nesting. Without limits, a corrupt count only surfaces as
/// an I/O error once the stream runs out, and very deep nesting is only
/// bounded by the call stack.
///
/// A negative count or string length is rejected whatever the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Deepest container nesting accepted. The top-level node is depth 0.
    pub max_depth: Option<usize>,

    /// Largest container count or string byte length accepted.
    pub max_len: Option<usize>,
}

impl DecodeLimits {
    /// Depth cap used by [`Self::strict`].
    pub const STRICT_MAX_DEPTH: usize = 128;

    /// Length cap used by [`Self::strict`] (16 MiB).
    pub const STRICT_MAX_LEN: usize = 16 * 1024 * 1024;

    /// No limits at all.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Limits suitable for input from an untrusted peer.
    pub fn strict() -> Self {
        Self {
            max_depth: Some(Self::STRICT_MAX_DEPTH),
            max_len: Some(Self::STRICT_MAX_LEN),
        }
    }

    /// Sets the deepest nesting accepted.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the largest count or string length accepted.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

// ---------------------------------------------------------------------------
// CodecConfig
// ---------------------------------------------------------------------------

/// Per-stream codec settings.
///
/// The byte order is not recorded in the encoded bytes, so both ends of a
/// stream must agree on it out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Byte order of every multi-byte field.
    pub byte_order: ByteOrder,

    /// Decoder bounds. Ignored by the encoder.
    pub limits: DecodeLimits,
}

impl CodecConfig {
    /// Little-endian, no limits.
    pub fn little_endian() -> Self {
        Self::default()
    }

    /// Big-endian, no limits.
    pub fn big_endian() -> Self {
        Self::default().with_byte_order(ByteOrder::Big)
    }

    /// Sets the byte order used by both directions.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Sets the decoder bounds.
    pub fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.byte_order, ByteOrder::Little);
        assert_eq!(config.limits, DecodeLimits::unlimited());
        assert_eq!(config.limits.max_depth, None);
        assert_eq!(config.limits.max_len, None);
    }

    #[test]
    fn test_strict_limits() {
        let limits = DecodeLimits::strict();
        assert_eq!(limits.max_depth, Some(128));
        assert_eq!(limits.max_len, Some(16 * 1024 * 1024));
    }

    #[test]
    fn test_builders() {
        let config = CodecConfig::big_endian()
            .with_limits(DecodeLimits::default().with_max_depth(4).with_max_len(10));
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert_eq!(config.limits.max_depth, Some(4));
        assert_eq!(config.limits.max_len, Some(10));
    }

    #[test]
    fn test_builders_override_earlier_values() {
        let limits = DecodeLimits::strict().with_max_depth(2);
        assert_eq!(limits.max_depth, Some(2));
        assert_eq!(limits.max_len, Some(DecodeLimits::STRICT_MAX_LEN));

        let config = CodecConfig::big_endian().with_byte_order(ByteOrder::Little);
        assert_eq!(config, CodecConfig::little_endian());
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        // Host applications may only set the fields they care about.
        let config: CodecConfig =
            serde_json::from_str(r#"{ "byte_order": "big" }"#).unwrap();
        assert_eq!(config.byte_order, ByteOrder::Big);
        assert_eq!(config.limits, DecodeLimits::default());

        let config: CodecConfig =
            serde_json::from_str(r#"{ "limits": { "max_depth": 8 } }"#).unwrap();
        assert_eq!(config.byte_order, ByteOrder::Little);
        assert_eq!(config.limits.max_depth, Some(8));
        assert_eq!(config.limits.max_len, None);
    }

    #[test]
    fn test_config_serializes_byte_order_lowercase() {
        let json = serde_json::to_value(CodecConfig::big_endian()).unwrap();
        assert_eq!(json["byte_order"], "big");
        assert!(json["limits"]["max_len"].is_null());
    }
}
