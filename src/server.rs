//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared state holding prompts-file
//! metadata, render stats, and uptime), [`build_router`] for
//! constructing the Axum router with the correlation middleware and
//! Tower layers, and [`shutdown_signal`] for SIGTERM / Ctrl+C
//! handling.

use std::path::PathBuf;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::health::health_handler;
use crate::middleware;

/// Prompts-file metadata captured once at startup.
///
/// The serving path re-reads the file on every render, so this is
/// diagnostic only and may lag behind on-disk edits.
#[derive(Debug)]
pub struct LoadedPrompts {
    pub path: PathBuf,
    /// SHA-256 hash of the file content at startup.
    pub version: String,
    pub prompt_count: usize,
    pub loaded_at: Instant,
}

#[derive(Debug)]
pub struct Stats {
    pub rendered: AtomicU64,
    pub failed: AtomicU64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rendered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }
}

pub struct AppState {
    pub prompts: LoadedPrompts,
    pub start_time: Instant,
    pub stats: Stats,
}

pub fn build_router(state: Arc<AppState>, max_body: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/prompts", get(api::list_prompts))
        .route("/prompts/{name}/render", post(api::render_prompt))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body)),
        )
        .layer(axum::middleware::from_fn(
            middleware::request_id::request_id,
        ))
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
