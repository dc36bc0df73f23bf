use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info, warn};

use plantbot_api::application::services::plant_bot::RuleBasedPlantBot;
use plantbot_api::bootstrap::app_context::{AppContext, AppServices};
use plantbot_api::bootstrap::assembler::Assembler;
use plantbot_api::bootstrap::config::Config;
use plantbot_api::bootstrap::env::EnvSource;
use plantbot_api::bootstrap::shutdown::shutdown_signal;
use plantbot_api::infrastructure::knowledge;
use plantbot_api::presentation::http::ApiRoutes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = EnvSource::load(".env")?;
    let cfg = Config::from_source(&env)?;

    tracing_subscriber::fmt()
        .with_env_filter(cfg.log_filter.as_str())
        .init();

    info!(?cfg, "Starting Tree Plantation chatbot backend");
    match env.dotenv_path() {
        Some(path) => info!(path = %path.display(), "dotenv_loaded"),
        None => debug!("dotenv_file_absent"),
    }
    if !env.skipped().is_empty() {
        warn!(vars = ?env.skipped(), "non_unicode_env_vars_ignored");
    }

    let source = knowledge::source_for(cfg.knowledge_path.as_deref());
    let plants = source
        .load()
        .with_context(|| format!("failed to load plant knowledge from {}", source.describe()))?;
    info!(source = %source.describe(), plants = plants.len(), "plant_knowledge_loaded");

    let bot = RuleBasedPlantBot::new(cfg.bot_name.clone(), plants);
    let ctx = AppContext::new(cfg.clone(), AppServices::new(Arc::new(bot)));

    let app = Assembler::new(cfg)
        .allow_any_origin()
        .mount("/api", &ApiRoutes::new(ctx))?
        .register_landing()
        .build();

    app.bind().await?.serve(shutdown_signal()).await
}
