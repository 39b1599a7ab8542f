use crate::error::DownloadError;
use crate::models::ProgressEvent;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Streams a remote asset to local storage, reporting progress as bytes
/// arrive. The destination file is owned exclusively by the running
/// download until it returns; partial files are left in place on failure.
#[derive(Clone)]
pub struct AssetClient {
    client: Client,
}

impl AssetClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Downloads `reference` to `path`, creating missing parent directories.
    ///
    /// `on_progress` fires after chunk writes once the total size is known
    /// (from `content-length`, falling back to `expected_size`); with no
    /// usable total, no progress events are emitted and callers rely on the
    /// return value alone. Consecutive events with an unchanged percent are
    /// suppressed.
    pub async fn download<F>(
        &self,
        reference: &str,
        path: &Path,
        expected_size: Option<u64>,
        mut on_progress: F,
    ) -> Result<PathBuf, DownloadError>
    where
        F: FnMut(ProgressEvent),
    {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DownloadError::Filesystem(e.to_string()))?;
            }
        }

        let mut response = self
            .client
            .get(reference)
            .send()
            .await
            .map_err(|e| DownloadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Transport(format!(
                "asset endpoint returned status {}",
                status
            )));
        }

        let total = response.content_length().or(expected_size);
        log::debug!(
            "downloading asset to {} (total size: {})",
            path.display(),
            total.map_or("unknown".to_string(), |t| t.to_string())
        );

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| DownloadError::Filesystem(e.to_string()))?;

        let mut written: u64 = 0;
        let mut last_percent: Option<u8> = None;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DownloadError::Transport(e.to_string()))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::Filesystem(e.to_string()))?;
            written += chunk.len() as u64;

            if let Some(total) = total.filter(|t| *t > 0) {
                let percent = (written.saturating_mul(100) / total).min(100) as u8;
                if last_percent != Some(percent) {
                    last_percent = Some(percent);
                    on_progress(ProgressEvent {
                        percent,
                        bytes_written: written,
                    });
                }
            }
        }

        file.flush()
            .await
            .map_err(|e| DownloadError::Filesystem(e.to_string()))?;
        drop(file);

        log::info!("asset saved to {} ({} bytes)", path.display(), written);
        Ok(path.to_path_buf())
    }
}
