use crate::error::SubmitError;
use crate::models::{CreateImageRequest, CreateImageResponse, GenerationRequest, GenerationResult};
use reqwest::Client;

/// Sends creation requests to the images endpoint and extracts the asset
/// reference from the response. Never touches the filesystem.
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits the creation request. Callers are expected to have validated
    /// the request; only the response contract is checked here.
    pub async fn submit(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, SubmitError> {
        let body = CreateImageRequest::from_request(request);

        log::info!("submitting generation request ({} image(s), {})", body.n, body.size);
        log::debug!("creation endpoint: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", request.credential))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("creation endpoint returned {}: {}", status, body);
            return Err(SubmitError::RemoteRejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CreateImageResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;

        let first = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| SubmitError::MalformedResponse("response contained no images".into()))?;

        let url = first.url.ok_or_else(|| {
            SubmitError::MalformedResponse("first image entry carries no url".into())
        })?;

        reqwest::Url::parse(&url)
            .map_err(|e| SubmitError::MalformedResponse(format!("asset url is invalid: {}", e)))?;

        log::info!("generation created at {}", parsed.created);

        Ok(GenerationResult {
            created_at: parsed.created,
            asset_reference: url,
        })
    }
}
