mod analysis;
mod config;
mod errors;
mod models;
mod parser;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::parser::extract::{DocxExtractor, ExtractorRegistry, PdfExtractor};
use crate::parser::fetch::HttpFetcher;
use crate::parser::ResumeParser;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Parser API v{}", env!("CARGO_PKG_VERSION"));

    let fetcher = HttpFetcher::new(config.fetch_timeout, config.max_document_bytes)
        .context("Failed to build HTTP client")?;
    info!(
        "Document fetcher initialized (timeout: {:?}, max size: {} bytes)",
        config.fetch_timeout, config.max_document_bytes
    );

    let extractors = ExtractorRegistry::new()
        .with(Arc::new(PdfExtractor))
        .with(Arc::new(DocxExtractor::new(config.max_extracted_bytes)));
    let parser = ResumeParser::new(Arc::new(fetcher), extractors);

    let state = AppState {
        parser: Arc::new(parser),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
