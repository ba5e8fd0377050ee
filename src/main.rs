use std::env;
use std::sync::Arc;

use urs_matcher::domain::catalog::{CFR_PART_11, EU_ANNEX_11};
use urs_matcher::models::config::ServerConfig;
use urs_matcher::processing::embedding::FastembedEncoder;
use urs_matcher::processing::matcher::CatalogIndex;
use urs_matcher::routes::{AppState, app};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_file = env::var("CONFIG_FILE").ok();
    let config = match ServerConfig::load(config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let encoder = match FastembedEncoder::new() {
        Ok(encoder) => Arc::new(encoder),
        Err(e) => {
            log::error!("Failed to load embedding model: {e}");
            std::process::exit(1);
        }
    };

    let cfr = match CatalogIndex::build(CFR_PART_11, encoder.as_ref()) {
        Ok(index) => Arc::new(index),
        Err(e) => {
            log::error!("Failed to embed CFR catalog: {e}");
            std::process::exit(1);
        }
    };
    let eu = match CatalogIndex::build(EU_ANNEX_11, encoder.as_ref()) {
        Ok(index) => Arc::new(index),
        Err(e) => {
            log::error!("Failed to embed EU Annex catalog: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Catalog indexes ready: {} CFR points, {} EU Annex points",
        cfr.len(),
        eu.len()
    );

    let state = AppState { encoder, cfr, eu };

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Cannot bind to {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };
    log::info!("Listening on {}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }
}
