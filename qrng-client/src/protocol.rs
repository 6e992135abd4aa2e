// SPDX-License-Identifier: MIT
//
// qrng-rs: Rust client for the qrngapi.com quantum entropy service
//
// https://github.com/qrngapi/qrng-rs

//! Request options and response shapes for the QRNG API
//!
//! Response structs decode leniently: unknown keys are ignored and absent
//! fields fall back to their empty values, so additive service-side changes
//! never break older clients. Field presence is checked by comparing against
//! the empty value, not by optionality.

use crate::encoding::{EncodingError, EncodingFormat};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Per-call options for [`Client::generate`](crate::Client::generate)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Number of random bytes requested; bounds are enforced by the service
    pub bytes: usize,
    /// Payload encoding, e.g. `"hex"` or `"base64"`
    pub format: String,
    /// Entropy-generation method selector, omitted from the request when unset
    pub method: Option<String>,
    /// Signature-algorithm selector, omitted from the request when unset
    pub signature_type: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            bytes: crate::DEFAULT_BYTES,
            format: crate::DEFAULT_FORMAT.to_string(),
            method: None,
            signature_type: None,
        }
    }
}

impl GenerateOptions {
    /// Options for the service defaults: 32 hex-encoded bytes
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of random bytes to request
    pub fn bytes(mut self, bytes: usize) -> Self {
        self.bytes = bytes;
        self
    }

    /// Set the payload encoding
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Select an entropy-generation method
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Select a signature algorithm
    pub fn signature_type(mut self, signature_type: impl Into<String>) -> Self {
        self.signature_type = Some(signature_type.into());
        self
    }
}

/// Signed entropy returned by `/api/random`
///
/// All fields are pass-through: the client performs no signature
/// verification and no payload decoding unless asked via [`decode_data`].
///
/// [`decode_data`]: EntropyResult::decode_data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntropyResult {
    /// Entropy payload, encoded in the requested format
    pub data: String,
    /// Identifier of the proof record held by the service
    pub proof_id: String,
    /// Signature over the payload, opaque to the client
    pub signature: String,
    /// Verification key corresponding to `signature`
    pub public_key: String,
    /// Signature algorithm the service applied
    pub signature_type: String,
    /// Open extension mapping, passed through verbatim
    #[serde(deserialize_with = "null_as_empty_map")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl EntropyResult {
    /// Decode the payload into raw bytes under the given encoding
    pub fn decode_data(&self, format: EncodingFormat) -> Result<Vec<u8>, EncodingError> {
        format.decode(&self.data)
    }
}

/// Service health report returned by `/api/health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    /// Service-reported health state, e.g. `"ok"`
    pub status: String,
    /// Open mapping of diagnostic values, passed through verbatim
    #[serde(deserialize_with = "null_as_empty_map")]
    pub metrics: HashMap<String, serde_json::Value>,
    /// Service-reported observation time, not parsed by the client
    pub timestamp: String,
}

/// Decode an open mapping, treating JSON `null` like an absent field
fn null_as_empty_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<HashMap<String, serde_json::Value>>::deserialize(deserializer)?;
    Ok(map.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_request_32_hex_bytes() {
        let options = GenerateOptions::default();
        assert_eq!(options.bytes, 32);
        assert_eq!(options.format, "hex");
        assert!(options.method.is_none());
        assert!(options.signature_type.is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let options = GenerateOptions::new()
            .bytes(64)
            .format("base64")
            .method("vacuum")
            .signature_type("ml-dsa-87");
        assert_eq!(options.bytes, 64);
        assert_eq!(options.format, "base64");
        assert_eq!(options.method.as_deref(), Some("vacuum"));
        assert_eq!(options.signature_type.as_deref(), Some("ml-dsa-87"));
    }

    #[test]
    fn entropy_result_round_trips() {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), json!("optical"));
        metadata.insert("chain".to_string(), json!({"height": 42, "refs": ["a", "b"]}));
        let result = EntropyResult {
            data: "00ff10ab".to_string(),
            proof_id: "proof-123".to_string(),
            signature: "sig".to_string(),
            public_key: "pk".to_string(),
            signature_type: "ml-dsa-87".to_string(),
            metadata,
        };

        let encoded = serde_json::to_string(&result).unwrap();
        let decoded: EntropyResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn health_status_round_trips() {
        let mut metrics = HashMap::new();
        metrics.insert("uptime".to_string(), json!(99.95));
        metrics.insert("pool".to_string(), json!("full"));
        let health = HealthStatus {
            status: "ok".to_string(),
            metrics,
            timestamp: "2025-06-01T12:00:00Z".to_string(),
        };

        let encoded = serde_json::to_string(&health).unwrap();
        let decoded: HealthStatus = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, health);
    }

    #[test]
    fn empty_results_round_trip() {
        let result = EntropyResult::default();
        let encoded = serde_json::to_string(&result).unwrap();
        let decoded: EntropyResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let value = serde_json::to_value(EntropyResult::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("proofId"));
        assert!(object.contains_key("publicKey"));
        assert!(object.contains_key("signatureType"));
    }

    #[test]
    fn unknown_keys_and_missing_fields_are_tolerated() {
        let decoded: EntropyResult =
            serde_json::from_str(r#"{"data":"ab","futureField":3}"#).unwrap();
        assert_eq!(decoded.data, "ab");
        assert_eq!(decoded.proof_id, "");
        assert!(decoded.metadata.is_empty());
    }

    #[test]
    fn null_mappings_decode_to_empty_maps() {
        let decoded: EntropyResult =
            serde_json::from_str(r#"{"data":"ab","metadata":null}"#).unwrap();
        assert!(decoded.metadata.is_empty());

        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"ok","metrics":null}"#).unwrap();
        assert!(health.metrics.is_empty());
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        assert!(serde_json::from_str::<EntropyResult>(r#"{"data":5}"#).is_err());
        assert!(serde_json::from_str::<HealthStatus>(r#"{"status":["ok"]}"#).is_err());
    }

    #[test]
    fn decode_data_honors_the_encoding() {
        let result = EntropyResult {
            data: "68656c6c6f".to_string(),
            ..Default::default()
        };
        assert_eq!(
            result.decode_data(EncodingFormat::Hex).unwrap(),
            b"hello".to_vec()
        );
        assert!(result.decode_data(EncodingFormat::Base64).is_err());
    }
}
