use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default output path, relative to the working directory. Overwritten on
/// each successful run; callers wanting per-prompt files supply their own.
pub const DEFAULT_OUTPUT_FILENAME: &str = "generated_image.jpeg";

/// JSON body sent to the backend: `{"prompt": "<text>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Decoded image bytes returned by a successful generation.
///
/// The bytes are whatever the backend produced (commonly JPEG); no format
/// inspection or validation is performed.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
}

impl GeneratedImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the image to `path`, truncating any existing file, and return
    /// the absolute path written. The file is only touched here, after all
    /// validation and decoding have already succeeded.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes)?;
        Ok(path.canonicalize()?)
    }
}
