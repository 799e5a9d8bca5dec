//! # dalle-client
//!
//! Async Rust client for a DALL-E style image generation backend.
//!
//! The backend accepts `POST {"prompt": "<text>"}` and answers with a JSON
//! object whose `photo` field holds a base64-encoded image. This crate
//! performs that exchange, validates the response step by step (status,
//! JSON, `photo` field, base64), and persists the decoded bytes to a file.
//! A single attempt per call: no retries, no streaming, no authentication.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dalle_client::{DalleClient, DEFAULT_OUTPUT_FILENAME};
//!
//! # async fn example() -> dalle_client::Result<()> {
//! let client = DalleClient::new("https://example.com/api/v1/dalle");
//!
//! let image = client.generate("a red apple on a wooden table").await?;
//! let path = image.save_to(DEFAULT_OUTPUT_FILENAME)?;
//! println!("saved {} bytes to {}", image.len(), path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The output file is only opened once every validation step has passed, so
//! a failed call never leaves a partial or truncated image behind.

pub mod client;
pub mod error;
pub mod types;

pub use client::DalleClient;
pub use error::{DalleError, Result};
pub use types::{GeneratedImage, GenerationRequest, DEFAULT_OUTPUT_FILENAME};
