use std::sync::Arc;

use crate::config::Config;
use crate::themes::ThemeRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built-in themes. Read-only after startup.
    pub themes: Arc<ThemeRegistry>,
}

impl AppState {
    pub fn new(config: Config, themes: ThemeRegistry) -> Self {
        Self {
            config,
            themes: Arc::new(themes),
        }
    }
}
