use anyhow::Result;
use log::{info, warn};
use tokio::io::BufReader;

pub mod chart;
pub mod config;
pub mod controller;
pub mod personality;
pub mod prediction;
pub mod quiz;
pub mod result_view;
pub mod terminal;

use config::{log_environment_status, AppConfig};
use controller::RootController;
use prediction::PredictionClient;
use terminal::TerminalApp;

pub async fn run() -> Result<()> {
    info!("Kişilik Analizi starting...");

    let config = AppConfig::from_env();
    log_environment_status(&config);

    let client = PredictionClient::new(config.api_url.clone());
    check_service(&client).await;

    let mut app = TerminalApp::new(
        RootController::new(client),
        config.api_url,
        std::io::stdout(),
    );
    app.run(BufReader::new(tokio::io::stdin())).await
}

/// Log what the service reports about its model. The questionnaire works
/// without it; a failure here only means the first submission will likely
/// fail too.
async fn check_service(client: &PredictionClient) {
    match client.model_info().await {
        Ok(model) => info!(
            "✅ {} hazır: {} özellik, {} sınıf ({})",
            model.model_type,
            model.features,
            model.classes,
            model.personality_types.join(", ")
        ),
        Err(e) => warn!("❌ Model bilgisi alınamadı ({}): {}", client.base_url(), e),
    }
}
