//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own catalog file.

use super::constants::*;
use super::fixtures::create_test_catalog;
use movie_feaster::input::InputProcessor;
use movie_feaster::server::{make_app, RequestsLoggingLevel, ServerConfig};
use movie_feaster::session::CatalogSession;
use movie_feaster::source::{CatalogSource, JsonFileCatalogSource};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance backed by a JSON catalog file
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Catalog file the server reads on refresh, tests may rewrite it
    pub catalog_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_catalog_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port, serving the test catalog
    ///
    /// # Panics
    ///
    /// Panics if the catalog cannot be written or loaded, or if the server
    /// doesn't become ready within timeout.
    pub async fn spawn() -> Self {
        let (temp_catalog_dir, catalog_path) =
            create_test_catalog().expect("Failed to create test catalog");
        let source = Arc::new(JsonFileCatalogSource::new(&catalog_path));

        let (base_url, port, shutdown_tx) = Self::serve(source).await;

        let server = Self {
            base_url,
            port,
            catalog_path,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Spawns a test server over an arbitrary catalog source.
    ///
    /// The catalog file at `catalog_path` still holds the test catalog but
    /// is not read by this server.
    pub async fn spawn_with_source(source: Arc<dyn CatalogSource>) -> Self {
        let (temp_catalog_dir, catalog_path) =
            create_test_catalog().expect("Failed to create test catalog");

        let (base_url, port, shutdown_tx) = Self::serve(source).await;

        let server = Self {
            base_url,
            port,
            catalog_path,
            _temp_catalog_dir: temp_catalog_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    async fn serve(
        source: Arc<dyn CatalogSource>,
    ) -> (String, u16, tokio::sync::oneshot::Sender<()>) {
        // Sources may block, load the session off the runtime
        let session = tokio::task::spawn_blocking(move || CatalogSession::open(source))
            .await
            .expect("Catalog loading task panicked")
            .expect("Failed to load test catalog");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            frontend_dir_path: None,
            cors_origin: None,
        };

        let app = make_app(
            config,
            Arc::new(Mutex::new(session)),
            InputProcessor::new(TEST_MAX_YEAR, TEST_MAX_COMMUNITY_RATING),
        )
        .expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        (base_url, port, shutdown_tx)
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => {
                    return;
                }
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        // TempDir will be cleaned up automatically
    }
}
