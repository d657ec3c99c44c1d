mod aggregator;
mod config;
mod extractor;
mod model;
mod normalizer;
mod scraper;
mod server;

use aggregator::Aggregator;
use axum::body::Bytes;
use config::load_config;
use extractor::query::QueryBuilder;
use scraper::FetcherImpl;
use server::{AppState, start_server};
use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // The page is read once and served verbatim for every request to `/`
    let index_page = match fs::read(&config.index_html) {
        Ok(bytes) => Bytes::from(bytes),
        Err(e) => {
            error!("Failed to read {}: {}", config.index_html, e);
            return;
        }
    };

    let fetcher = match FetcherImpl::new(&config.user_agent) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid listen address {}:{}: {}", config.host, config.port, e);
            return;
        }
    };

    info!(
        "Extraction endpoint: {} (window html({},{}))",
        config.extraction_endpoint, config.result_offset, config.result_limit
    );

    let state = AppState {
        aggregator: Arc::new(Aggregator::new(
            Arc::new(fetcher),
            QueryBuilder::from_config(&config),
        )),
        index_page,
    };

    if let Err(e) = start_server(addr, state).await {
        error!("Server error: {}", e);
    }
}
