mod config;
mod errors;
mod loader;
mod models;
mod page;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Url;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::loader::{HttpFetcher, Loader};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting resume viewer v{}", env!("CARGO_PKG_VERSION"));

    let base_url = Url::parse(&config.site_origin)
        .with_context(|| format!("SITE_ORIGIN '{}' is not a valid URL", config.site_origin))?;

    let fetcher = HttpFetcher::new(config.fetch_timeout).context("Failed to build HTTP client")?;
    let mut loader = Loader::new(Arc::new(fetcher));
    if let Some(candidates) = &config.candidates {
        loader = loader.with_candidates(candidates.iter().cloned());
    }
    info!(
        "Loader ready: base {base_url}, candidates {:?}",
        loader.candidates()
    );
    info!(
        "Serving site files from {} (default theme {})",
        config.site_dir.display(),
        config.default_theme
    );

    let state = AppState {
        loader,
        base_url,
        config: config.clone(),
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
