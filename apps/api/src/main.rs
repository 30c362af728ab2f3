mod config;
mod errors;
mod layout;
mod models;
mod resolver;
mod routes;
mod sections;
mod state;
mod themes;

use anyhow::{bail, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::themes::ThemeRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Built-in themes; the configured default must be one of them
    let themes = ThemeRegistry::builtin();
    if themes.get(&config.default_theme).is_none() {
        let known: Vec<&str> = themes.names().collect();
        bail!(
            "DEFAULT_THEME '{}' is not a built-in theme (known: {})",
            config.default_theme,
            known.join(", ")
        );
    }
    info!(
        "Theme registry loaded: {} themes, default '{}'",
        themes.names().count(),
        config.default_theme
    );

    let state = AppState::new(config.clone(), themes);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
