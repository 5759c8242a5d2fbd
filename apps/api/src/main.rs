mod config;
mod errors;
mod extraction;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{FixedLevels, ResumeExtractor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Upload limit: {} bytes, permissive CORS: {}",
        config.max_upload_bytes, config.cors_permissive
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let cors_permissive = config.cors_permissive;

    let extractor = match config.fixed_skill_level {
        Some(level) => {
            info!("Skill levels pinned to {level}");
            ResumeExtractor::with_level_policy(Arc::new(FixedLevels(level)))
        }
        None => ResumeExtractor::new(),
    };

    let state = AppState::new(config, extractor);

    let mut app = build_router(state).layer(TraceLayer::new_for_http());
    if cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
