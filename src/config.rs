use crate::models::{GenerationRequest, ImageQuality, ImageSize};
use std::env;
use std::path::PathBuf;

/// Default creation endpoint. Overridable through [`ApiConfig`] so tests and
/// gateways can point the client elsewhere.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/images/generations";

/// Connection settings for the creation endpoint.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint = env::var("RIMGEN_ENDPOINT").ok();
        let api_key = env::var("OPENAI_API_KEY").ok();

        ApiConfig { endpoint, api_key }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The endpoint to use, falling back to the fixed default.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Per-run generation options.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub count: u32,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            size: ImageSize::default(),
            quality: ImageQuality::default(),
            count: 1,
            output_dir: PathBuf::from("img"),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let size = env::var("RIMGEN_SIZE").ok().and_then(|s| s.parse().ok());
        let quality = env::var("RIMGEN_QUALITY").ok().and_then(|s| s.parse().ok());
        let count = env::var("RIMGEN_COUNT").ok().and_then(|s| s.parse().ok());
        let output_dir = env::var("RIMGEN_OUTPUT_DIR").ok().map(PathBuf::from);

        let defaults = Self::default();
        GeneratorConfig {
            size: size.unwrap_or(defaults.size),
            quality: quality.unwrap_or(defaults.quality),
            count: count.unwrap_or(defaults.count),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
        }
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builds a [`GenerationRequest`] carrying these options.
    pub fn request(
        &self,
        prompt: impl Into<String>,
        credential: impl Into<String>,
    ) -> GenerationRequest {
        GenerationRequest::new(prompt, credential)
            .with_size(self.size)
            .with_quality(self.quality)
            .with_count(self.count)
    }
}
