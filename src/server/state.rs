use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state accessible to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }
}
