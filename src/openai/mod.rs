pub mod asset_client;
pub mod generation_client;

use crate::config::ApiConfig;
use reqwest::Client;

pub use asset_client::AssetClient;
pub use generation_client::GenerationClient;

/// Facade over the two leaf clients, sharing one HTTP transport.
#[derive(Clone)]
pub struct OpenAiClient {
    generation_client: GenerationClient,
    asset_client: AssetClient,
}

impl OpenAiClient {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::new();
        let endpoint = config.endpoint().to_string();

        Self {
            generation_client: GenerationClient::new(client.clone(), endpoint),
            asset_client: AssetClient::new(client),
        }
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation_client
    }

    pub fn asset(&self) -> &AssetClient {
        &self.asset_client
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}
