use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image dimensions accepted by the creation endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1024x1024")]
    Square1024,
    #[serde(rename = "1792x1024")]
    Landscape1792,
    #[serde(rename = "1024x1792")]
    Portrait1792,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square1024 => "1024x1024",
            ImageSize::Landscape1792 => "1792x1024",
            ImageSize::Portrait1792 => "1024x1792",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported image size: {0}")]
pub struct ParseSizeError(String);

impl FromStr for ImageSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1024x1024" => Ok(ImageSize::Square1024),
            "1792x1024" => Ok(ImageSize::Landscape1792),
            "1024x1792" => Ok(ImageSize::Portrait1792),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}

/// Rendering quality accepted by the creation endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Standard,
    Hd,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::Hd => "hd",
        }
    }
}

impl fmt::Display for ImageQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported image quality: {0}")]
pub struct ParseQualityError(String);

impl FromStr for ImageQuality {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ImageQuality::Standard),
            "hd" => Ok(ImageQuality::Hd),
            other => Err(ParseQualityError(other.to_string())),
        }
    }
}

/// Everything needed for one creation request. The credential is carried
/// through to the authorization header and is never logged or persisted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub count: u32,
    pub credential: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: ImageSize::default(),
            quality: ImageQuality::default(),
            count: 1,
            credential: credential.into(),
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

    /// Structural precondition check, run before submission is attempted.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.prompt.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        if self.credential.trim().is_empty() {
            return Err(RequestError::EmptyCredential);
        }
        if self.count == 0 {
            return Err(RequestError::ZeroCount);
        }
        Ok(())
    }
}

/// Outcome of a successful creation request. Immutable once constructed;
/// only [`GenerationClient::submit`](crate::openai::GenerationClient::submit)
/// produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Creation timestamp reported by the endpoint (unix seconds).
    pub created_at: i64,
    /// Remote URL of the produced asset, syntactically validated.
    pub asset_reference: String,
}

#[derive(Debug, Serialize)]
pub struct CreateImageRequest {
    pub model: &'static str,
    pub prompt: String,
    pub n: u32,
    pub quality: &'static str,
    pub size: &'static str,
}

impl CreateImageRequest {
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            model: "dall-e-3",
            prompt: request.prompt.clone(),
            n: request.count,
            quality: request.quality.as_str(),
            size: request.size.as_str(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateImageResponse {
    pub created: i64,
    pub data: Vec<CreateImageData>,
}

#[derive(Debug, Deserialize)]
pub struct CreateImageData {
    #[serde(default)]
    pub url: Option<String>,
}
