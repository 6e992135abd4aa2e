// SPDX-License-Identifier: MIT
//
// qrng-rs: Rust client for the qrngapi.com quantum entropy service
//
// https://github.com/qrngapi/qrng-rs

//! QRNG API Client Library
//!
//! This crate provides an async client for the qrngapi.com quantum random
//! number generation service. Entropy is produced by quantum hardware on the
//! service side and served with a proof record and a signature; the client is
//! a thin pass-through that performs no generation, mixing, or verification
//! of its own.
//!
//! # Architecture
//!
//! The library is organized into modules representing core concerns:
//! - `client`: Request construction, dispatch, and response handling
//! - `protocol`: Request options and response shapes
//! - `encoding`: Payload encodings (hex, base64)
//! - `error`: Unified error taxonomy
//!
//! # Design Principles
//!
//! 1. **Pass-through semantics**: Entropy, proofs, and signatures are handed
//!    to the caller untouched
//! 2. **Forward compatibility**: Response decoding tolerates unknown fields
//!    and open mappings
//! 3. **Distinct failures**: Each failure point maps to its own error kind
//! 4. **No hidden behavior**: No retries, no caching, no global state
//!
//! # Example
//!
//! ```no_run
//! use qrng_client::{Client, GenerateOptions};
//!
//! # async fn run() -> qrng_client::Result<()> {
//! let client = Client::new("my-api-key")?;
//!
//! let result = client.generate(GenerateOptions::new().bytes(64)).await?;
//! println!("entropy: {} (proof {})", result.data, result.proof_id);
//!
//! let health = client.health().await?;
//! println!("service is {}", health.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod encoding;
pub mod error;
pub mod protocol;

pub use client::{Client, ClientConfig, API_KEY_HEADER};
pub use encoding::{EncodingError, EncodingFormat};
pub use error::{Error, Result};
pub use protocol::{EntropyResult, GenerateOptions, HealthStatus};

/// Library version for diagnostics
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Production service origin
pub const DEFAULT_BASE_URL: &str = "https://qrngapi.com";

/// Default number of random bytes per request
pub const DEFAULT_BYTES: usize = 32;

/// Default payload encoding
pub const DEFAULT_FORMAT: &str = "hex";

/// Default round-trip timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
