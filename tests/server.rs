//! Integration tests for the HTTP server, health endpoint, and graceful shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use promptd::health::HealthResponse;
use promptd::prompts::loader;
use promptd::server::{self, AppState, LoadedPrompts, Stats};
use tempfile::TempDir;

const PROMPTS: &str = "prompts:\n  greeting: \"Hello, {{ name }}!\"\n";

fn write_prompts(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("prompts.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

async fn start_test_server(content: &str) -> (SocketAddr, tokio::sync::oneshot::Sender<()>, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = write_prompts(&dir, content);

    let (file, version) = loader::load_prompts_versioned(&path).unwrap();
    let state = Arc::new(AppState {
        prompts: LoadedPrompts {
            path,
            version,
            prompt_count: file.count(),
            loaded_at: Instant::now(),
        },
        start_time: Instant::now(),
        stats: Stats::new(),
    });

    let router = server::build_router(state, 1_048_576);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx, dir)
}

#[tokio::test]
async fn health_endpoint_returns_healthy() {
    let (addr, shutdown, _dir) = start_test_server(PROMPTS).await;

    let url = format!("http://{addr}/health");
    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 200);

    let health: HealthResponse = resp.json().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.prompts.count, 1);
    assert_eq!(health.prompts.version.len(), 8);
    assert_eq!(health.stats.requests_rendered, 0);
    assert_eq!(health.stats.requests_failed, 0);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn health_version_matches_crate() {
    let (addr, shutdown, _dir) = start_test_server(PROMPTS).await;

    let url = format!("http://{addr}/health");
    let health: HealthResponse = reqwest::get(&url).await.unwrap().json().await.unwrap();
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (addr, shutdown, _dir) = start_test_server(PROMPTS).await;

    let url = format!("http://{addr}/nonexistent");
    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 404);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn graceful_shutdown_works() {
    let (addr, shutdown, _dir) = start_test_server(PROMPTS).await;

    // Verify server is running
    let url = format!("http://{addr}/health");
    assert!(reqwest::get(&url).await.is_ok());

    // Send shutdown
    let _ = shutdown.send(());

    // Give it a moment to shut down
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Server should no longer accept connections
    let result = reqwest::get(&url).await;
    assert!(result.is_err());
}
