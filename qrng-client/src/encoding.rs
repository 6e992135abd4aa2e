//! Payload encodings for served entropy
//!
//! The service returns entropy as text in the encoding selected by
//! [`GenerateOptions::format`](crate::GenerateOptions::format). This module
//! turns the known encodings back into raw bytes.

use serde::{Deserialize, Serialize};

/// Errors from decoding an encoded entropy payload
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// Payload is not valid hexadecimal
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Payload is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Known encodings for entropy payloads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    /// Hexadecimal, the service default
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl EncodingFormat {
    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hex" | "hexadecimal" => Some(Self::Hex),
            "base64" | "b64" => Some(Self::Base64),
            _ => None,
        }
    }

    /// Wire value understood by the service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Decode an encoded payload into raw bytes
    pub fn decode(&self, data: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Self::Hex => Ok(hex::decode(data)?),
            Self::Base64 => {
                use base64::Engine;
                Ok(base64::engine::general_purpose::STANDARD.decode(data)?)
            }
        }
    }

    /// Encode raw bytes into this format
    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(data),
            Self::Base64 => {
                use base64::Engine;
                base64::engine::general_purpose::STANDARD.encode(data)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encoding() {
        assert_eq!(EncodingFormat::Hex.encode(b"hello"), "68656c6c6f");
        let decoded = EncodingFormat::Hex.decode("68656c6c6f").unwrap();
        assert_eq!(decoded, b"hello".to_vec());
    }

    #[test]
    fn test_base64_encoding() {
        let encoded = EncodingFormat::Base64.encode(b"hello world");
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
        let decoded = EncodingFormat::Base64.decode(&encoded).unwrap();
        assert_eq!(decoded, b"hello world".to_vec());
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(EncodingFormat::Hex.as_str(), "hex");
        assert_eq!(EncodingFormat::Base64.as_str(), "base64");

        // Wire values round-trip through parse.
        for format in [EncodingFormat::Hex, EncodingFormat::Base64] {
            assert_eq!(EncodingFormat::parse(format.as_str()), Some(format));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(EncodingFormat::parse("hex"), Some(EncodingFormat::Hex));
        assert_eq!(EncodingFormat::parse("HEX"), Some(EncodingFormat::Hex));
        assert_eq!(
            EncodingFormat::parse("hexadecimal"),
            Some(EncodingFormat::Hex)
        );
        assert_eq!(EncodingFormat::parse("b64"), Some(EncodingFormat::Base64));
        assert_eq!(EncodingFormat::parse("Base64"), Some(EncodingFormat::Base64));
        assert_eq!(EncodingFormat::parse("binary"), None);
    }

    #[test]
    fn test_invalid_payloads() {
        assert!(EncodingFormat::Hex.decode("zz").is_err());
        assert!(EncodingFormat::Hex.decode("abc").is_err());
        assert!(EncodingFormat::Base64.decode("!!!").is_err());
    }
}
