//! HTTP front end for the scorer.
//!
//! - [`router`] — axum routes with permissive CORS and request tracing.
//! - [`handlers`] — `/analyze`, `/summary` and `/health`.
//! - [`state`] — shared configuration handed to every handler.

pub mod handlers;
pub mod router;
pub mod state;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::ServerConfig;

/// Bind the configured address and serve until the process is stopped.
pub async fn start(config: ServerConfig) -> Result<()> {
    let bind_addr = config.bind_address();
    let app = router::build(state::AppState::new(Arc::new(config)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    tracing::info!("Server listening on {bind_addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
