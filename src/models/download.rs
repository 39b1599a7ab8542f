use std::path::{Path, PathBuf};

/// Where a downloaded asset lands. The file name itself is derived from the
/// creation timestamp so repeated runs in one process never collide.
#[derive(Debug, Clone)]
pub struct DownloadTarget {
    pub output_dir: PathBuf,
    /// Optional size hint, used only when the response carries no
    /// `content-length` header.
    pub expected_size: Option<u64>,
}

impl DownloadTarget {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            expected_size: None,
        }
    }

    pub fn with_expected_size(mut self, bytes: u64) -> Self {
        self.expected_size = Some(bytes);
        self
    }

    /// Destination file for an asset created at `created_at` (unix seconds).
    pub fn file_path(&self, created_at: i64) -> PathBuf {
        self.output_dir
            .join(format!("generated_image_{}.png", created_at))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
