// SPDX-License-Identifier: MIT
//
// qrng-rs: Rust client for the qrngapi.com quantum entropy service
//
// https://github.com/qrngapi/qrng-rs

//! Command-line interface for the QRNG API
//!
//! Fetches signed quantum entropy or the service health report and prints
//! the outcome. Logs go to stderr so the payload on stdout stays clean for
//! piping, including raw binary output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qrng_client::{Client, ClientConfig, EncodingFormat, GenerateOptions};
use std::io::Write;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "qrng-cli")]
#[command(about = "Fetch signed quantum entropy from the QRNG API", long_about = None)]
struct Args {
    /// API key (falls back to the QRNG_API_KEY environment variable)
    #[arg(short, long)]
    api_key: Option<String>,

    /// Service origin
    #[arg(short, long, default_value = qrng_client::DEFAULT_BASE_URL)]
    base_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request signed entropy
    Generate {
        /// Number of random bytes
        #[arg(short, long, default_value_t = qrng_client::DEFAULT_BYTES)]
        bytes: usize,

        /// Payload encoding (hex, base64)
        #[arg(short, long, default_value = qrng_client::DEFAULT_FORMAT)]
        format: String,

        /// Entropy-generation method selector
        #[arg(short, long)]
        method: Option<String>,

        /// Signature-algorithm selector
        #[arg(short, long)]
        signature_type: Option<String>,

        /// Print the full result as JSON instead of just the payload
        #[arg(short, long, conflicts_with = "raw")]
        json: bool,

        /// Decode the payload and write raw bytes to stdout
        #[arg(short, long)]
        raw: bool,
    },
    /// Query service health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    let log_level = args
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("QRNG CLI v{}", env!("CARGO_PKG_VERSION"));

    let api_key = args
        .api_key
        .or_else(|| std::env::var("QRNG_API_KEY").ok())
        .context("API key required: pass --api-key or set QRNG_API_KEY")?;

    let mut config = ClientConfig::new(api_key);
    config.base_url = args.base_url;
    let client = Client::with_config(config).context("Failed to build HTTP client")?;

    match args.command {
        Command::Generate {
            bytes,
            format,
            method,
            signature_type,
            json,
            raw,
        } => {
            // Known aliases normalize to the wire values; anything else
            // passes through for the service to validate.
            let wire_format = match EncodingFormat::parse(&format) {
                Some(encoding) => encoding.as_str().to_string(),
                None => format.clone(),
            };

            let mut options = GenerateOptions::new().bytes(bytes).format(wire_format);
            if let Some(method) = method {
                options = options.method(method);
            }
            if let Some(signature_type) = signature_type {
                options = options.signature_type(signature_type);
            }

            let result = client.generate(options).await?;
            info!(
                "Received {}-char payload (proof {})",
                result.data.len(),
                result.proof_id
            );

            if raw {
                let encoding = EncodingFormat::parse(&format)
                    .with_context(|| format!("Cannot decode '{}' payloads", format))?;
                let data = result.decode_data(encoding)?;
                std::io::stdout().write_all(&data)?;
            } else if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.data);
            }
        }
        Command::Health => {
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }
    }

    Ok(())
}
