//! HTTP handlers for the prompt surface.
//!
//! [`list_prompts`] serves `GET /prompts`; [`render_prompt`] serves
//! `POST /prompts/{name}/render`, loading the named template fresh
//! from disk, compiling it, and filling in the JSON variable bindings
//! from the request body. The blocking loader runs on the blocking
//! pool. Errors map to bare status codes; the details go to the log,
//! tagged with the request id.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::error::PromptdError;
use crate::middleware::RequestId;
use crate::prompts::loader;
use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct PromptList {
    pub prompts: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RenderResponse {
    pub name: String,
    pub rendered: String,
}

pub async fn list_prompts(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> Response {
    let path = state.prompts.path.clone();
    let result = tokio::task::spawn_blocking(move || loader::list_prompts(&path)).await;

    match result {
        Ok(Ok(prompts)) => Json(PromptList { prompts }).into_response(),
        Ok(Err(e)) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "failed to list prompts"
            );
            status_for(&e).into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "prompt listing task failed"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn render_prompt(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
    Json(vars): Json<serde_json::Map<String, serde_json::Value>>,
) -> Response {
    let path = state.prompts.path.clone();
    let template_name = name.clone();
    let result = tokio::task::spawn_blocking(move || {
        let template = loader::load_template(&path, &template_name)?;
        template.render(&vars)
    })
    .await;

    match result {
        Ok(Ok(rendered)) => {
            state.stats.rendered.fetch_add(1, Ordering::Relaxed);
            Json(RenderResponse { name, rendered }).into_response()
        }
        Ok(Err(e)) => {
            state.stats.failed.fetch_add(1, Ordering::Relaxed);
            let status = status_for(&e);
            if status == StatusCode::NOT_FOUND {
                tracing::warn!(
                    request_id = %request_id,
                    prompt = %name,
                    error = %e,
                    "prompt not found"
                );
            } else {
                tracing::error!(
                    request_id = %request_id,
                    prompt = %name,
                    error = %e,
                    "render failed"
                );
            }
            status.into_response()
        }
        Err(e) => {
            state.stats.failed.fetch_add(1, Ordering::Relaxed);
            tracing::error!(
                request_id = %request_id,
                prompt = %name,
                error = %e,
                "render task failed"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Map loader failures onto response status codes.
fn status_for(e: &PromptdError) -> StatusCode {
    match e {
        PromptdError::KeyNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
