use futures::StreamExt;
use rimgen::{
    ApiConfig, DownloadTarget, GeneratorConfig, OpenAiClient, Orchestrator, OrchestrationEvent,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(_) => eprintln!("no .env file found, using system environment variables"),
    }

    rimgen::logger::init_with_config(rimgen::logger::LoggerConfig::development())?;

    let prompt: String = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.trim().is_empty() {
        log::error!("usage: rimgen <prompt>");
        std::process::exit(2);
    }

    let api = ApiConfig::from_env();
    let api_key = match &api.api_key {
        Some(key) => {
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
            key.clone()
        }
        None => {
            log::error!("OPENAI_API_KEY is not set");
            std::process::exit(2);
        }
    };

    let config = GeneratorConfig::from_env();
    log::info!(
        "generating: size={} quality={} count={} output_dir={}",
        config.size,
        config.quality,
        config.count,
        config.output_dir.display()
    );

    let request = config.request(prompt, api_key);
    let target = DownloadTarget::new(config.output_dir.clone());

    let orchestrator = Orchestrator::new(OpenAiClient::new(api));
    let mut events = orchestrator.run(request, target);

    let mut exit_code = 0;
    while let Some(event) = events.next().await {
        match event {
            OrchestrationEvent::Started => log::info!("run started"),
            OrchestrationEvent::Submitting => log::info!("submitting creation request..."),
            OrchestrationEvent::Downloading(progress) => {
                log::info!(
                    "downloading: {}% ({} bytes)",
                    progress.percent,
                    progress.bytes_written
                );
            }
            OrchestrationEvent::Completed(path) => {
                log::info!("image saved to {}", path.display());
            }
            OrchestrationEvent::Failed { kind, message } => {
                log::error!("generation failed ({}): {}", kind, message);
                exit_code = 1;
            }
        }
    }

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
