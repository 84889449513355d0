use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use atscore::config::Config;
use atscore::routes::build_router;
use atscore::scoring::taxonomy::Taxonomy;
use atscore::scoring::LexicalAtsScorer;
use atscore::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS scoring API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill taxonomy (custom file or the embedded default)
    let taxonomy = match &config.taxonomy_path {
        Some(path) => Taxonomy::from_path(path)
            .with_context(|| format!("Failed to load taxonomy from {}", path.display()))?,
        None => {
            let builtin = Taxonomy::builtin().clone();
            info!(
                "Using built-in taxonomy: {} hard skills, {} soft skills",
                builtin.hard_skills.len(),
                builtin.soft_skills.len()
            );
            builtin
        }
    };

    let scorer = Arc::new(LexicalAtsScorer::new(Arc::new(taxonomy)));

    let state = AppState {
        config: config.clone(),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
