//! Tarot table API server.

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tarot_table::reading::GenerativeClient;
use tarot_table::{
    router, AppState, DeckStore, DrawRng, ReadingOrchestrator, ServerConfig, SpreadCatalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::parse();

    let decks = DeckStore::open(&config.data_dir)?;
    let spreads = match SpreadCatalog::load(config.spreads_path()) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "no spread catalog loaded, starting with none");
            SpreadCatalog::default()
        }
    };

    if config.genai_api_key.is_empty() {
        warn!("GENAI_API_KEY is not set; reading generation will fail");
    }
    let interpreter = GenerativeClient::new(
        config.genai_base_url.as_str(),
        config.genai_model.as_str(),
        config.genai_api_key.as_str(),
    );
    let orchestrator = ReadingOrchestrator::new(Arc::new(interpreter));

    let rng = match config.seed {
        Some(seed) => DrawRng::new(seed),
        None => DrawRng::from_entropy(),
    };

    let state = AppState::new(decks, spreads, orchestrator, rng);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, data_dir = %config.data_dir.display(), "tarot server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
