//! Prompt-to-image client for the OpenAI images API.
//!
//! The core is the generation-and-download orchestrator: submit a creation
//! request, extract the asset reference, stream the binary to disk and
//! surface the whole run as an ordered [`OrchestrationEvent`] stream that
//! any consumer (CLI, GUI, test harness) can render.
//!
//! ```no_run
//! use rimgen::{ApiConfig, DownloadTarget, GeneratorConfig, OpenAiClient, Orchestrator};
//! use tokio_stream::StreamExt;
//!
//! # async fn demo() {
//! let api = ApiConfig::from_env();
//! let config = GeneratorConfig::from_env();
//! let request = config.request("a red cube", api.api_key.clone().unwrap_or_default());
//!
//! let orchestrator = Orchestrator::new(OpenAiClient::new(api));
//! let mut events = orchestrator.run(request, DownloadTarget::new(config.output_dir));
//! while let Some(event) = events.next().await {
//!     println!("{:?}", event);
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod openai;
pub mod orchestrator;

pub use config::{ApiConfig, GeneratorConfig, DEFAULT_ENDPOINT};
pub use error::{DownloadError, ErrorKind, RequestError, SubmitError};
pub use models::*;
pub use openai::{AssetClient, GenerationClient, OpenAiClient};
pub use orchestrator::{EventStream, Orchestrator, RunState};
