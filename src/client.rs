use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DalleError, Result};
use crate::types::{GeneratedImage, GenerationRequest};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

fn normalize(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// Async client for a DALL-E style image generation backend.
///
/// One operation: POST a text prompt as JSON, receive a base64-encoded
/// image in the `photo` field of the response, decode it. A single attempt
/// per call, no retries.
///
/// # Example
/// ```no_run
/// use dalle_client::DalleClient;
///
/// # async fn example() -> dalle_client::Result<()> {
/// let client = DalleClient::new("https://example.com/api/v1/dalle");
/// let path = client.generate_to_file("A red apple", "generated_image.jpeg").await?;
/// println!("saved to {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DalleClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl DalleClient {
    /// Create a new client pointing at the given backend endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: normalize(endpoint.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a custom `reqwest::Client` (for connection pooling, proxies, TLS).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Override the per-request timeout (default 60s).
    ///
    /// The upstream backend can be slow to spin up, so the default is
    /// generous, but requests are never left unbounded.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Generate an image from a text prompt.
    ///
    /// Sends `{"prompt": "<text>"}` and validates the response step by
    /// step: HTTP status, JSON body, `photo` field, base64 content. The
    /// first failed step returns its error; nothing is written anywhere.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        if prompt.trim().is_empty() {
            return Err(DalleError::EmptyPrompt);
        }

        let request = GenerationRequest::new(prompt);
        let resp = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| DalleError::Network {
                context: format!(
                    "Cannot reach image backend at {}, is the service running?",
                    self.endpoint
                ),
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DalleError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(|e| DalleError::Network {
            context: "Failed to read response body".into(),
            source: e,
        })?;

        let json: Value = serde_json::from_str(&body)?;
        let photo = extract_photo(&json)?;
        let bytes = decode_photo(photo)?;

        Ok(GeneratedImage::new(bytes))
    }

    /// Generate an image and write it to `path`, truncating any existing
    /// file. Returns the absolute path written. The file is not touched
    /// unless generation fully succeeds.
    pub async fn generate_to_file(
        &self,
        prompt: &str,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let image = self.generate(prompt).await?;
        image.save_to(path)
    }
}

/// Pull the `photo` field out of a parsed response. A missing key or a
/// non-string value both count as missing; the error carries the full
/// object so the caller can see what the backend actually sent.
fn extract_photo(json: &Value) -> Result<&str> {
    json.get("photo")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DalleError::MissingPhoto(json.to_string()))
}

/// Decode the `photo` value as standard base64.
fn decode_photo(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}
