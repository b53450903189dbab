//! `GET /health` endpoint handler.
//!
//! Returns a [`HealthResponse`] JSON payload containing the server
//! version, uptime, prompts-file metadata, and cumulative render
//! statistics.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub prompts: PromptsHealth,
    pub stats: StatsResponse,
}

#[derive(Serialize, Deserialize)]
pub struct PromptsHealth {
    pub file: String,
    /// First 8 hex chars of the startup content hash.
    pub version: String,
    pub loaded_ago_seconds: u64,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub requests_rendered: u64,
    pub requests_failed: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let loaded = &state.prompts;
    let version_str = loaded.version.get(..8).unwrap_or(&loaded.version).to_string();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        prompts: PromptsHealth {
            file: loaded.path.display().to_string(),
            version: version_str,
            loaded_ago_seconds: loaded.loaded_at.elapsed().as_secs(),
            count: loaded.prompt_count,
        },
        stats: StatsResponse {
            requests_rendered: state.stats.rendered.load(Ordering::Relaxed),
            requests_failed: state.stats.failed.load(Ordering::Relaxed),
        },
    })
}
