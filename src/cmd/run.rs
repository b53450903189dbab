//! `promptd run` — start the prompt server.
//!
//! Resolves the prompts file (flag, env, or auto-detection), loads and
//! validates it once so a broken file fails startup, then serves the
//! HTTP surface with graceful shutdown. The render path re-reads the
//! file on every request, so edits take effect without a restart.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::RunArgs;
use crate::error::PromptdError;
use crate::logging;
use crate::prompts::{loader, validation};
use crate::server::{self, AppState, LoadedPrompts, Stats};

pub async fn execute(args: RunArgs) -> Result<(), PromptdError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let path = resolve_prompts_file(args.prompts.as_deref()).await?;

    let (file, version) = loader::load_prompts_versioned(&path)?;
    if let Err(errors) = validation::validate(&file) {
        return Err(PromptdError::PromptsValidation { errors });
    }
    let prompt_count = file.count();

    let state = Arc::new(AppState {
        prompts: LoadedPrompts {
            path: path.clone(),
            version,
            prompt_count,
            loaded_at: Instant::now(),
        },
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let router = server::build_router(state, args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        file = %path.display(),
        prompts = prompt_count,
        "promptd started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("promptd stopped");
    Ok(())
}

async fn resolve_prompts_file(explicit: Option<&Path>) -> Result<PathBuf, PromptdError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    // Auto-detect in current directory
    for name in ["prompts.yaml", "prompts.yml"] {
        let path = PathBuf::from(name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::info!(path = %path.display(), "auto-detected prompts file");
            return Ok(path);
        }
    }

    Err(PromptdError::NoPromptsFile {
        hint: "Provide --prompts <file> or create ./prompts.yaml.\n  \
               Run 'promptd init' to create a starter file."
            .into(),
    })
}
