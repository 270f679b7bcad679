//! End-to-end tests for the vehicle telemetry gateway
//!
//! The tests exercise the full stack over real sockets:
//! - HTTP API layer (`vtg-api`)
//! - Resolver and adapter selector (`vtg-core`, `vtg-gateway`)
//! - GM adapter and client (`vtg-gm`)
//! - A fake GM API (`vtg_gm::testing::MockGmServer`)
//!
//! # Running Tests
//!
//! No external services are needed; everything binds to `127.0.0.1:0`.
//!
//! ```bash
//! cargo test -p vtg-tests
//! ```
//!
//! # Test Structure
//!
//! - `e2e_test.rs` - REST API scenarios against the GM fixtures

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use vtg_api::{create_router, AppState};
use vtg_core::{StaticBrandSource, VehicleResolver};
use vtg_gateway::AdapterSelector;
use vtg_gm::testing::MockGmServer;
use vtg_gm::GmAdapter;

/// Full gateway stack in front of a fake GM API; shuts down when dropped
pub struct GatewayHarness {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub upstream: MockGmServer,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl GatewayHarness {
    /// Start with the default directory (vehicles 1234 and 1235 on GM)
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_directory(
            StaticBrandSource::new()
                .with("1234", "gm")
                .with("1235", "gm"),
        )
        .await
    }

    /// Start with a custom vehicle directory
    pub async fn with_directory(
        directory: StaticBrandSource,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let upstream = MockGmServer::start().await?;

        let mut selector = AdapterSelector::new();
        selector.register_adapter(Arc::new(GmAdapter::from_config(&upstream.config())?));
        let state = AppState::new(VehicleResolver::from_static(directory), selector);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let router = create_router(state);
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            upstream,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Absolute URL for a gateway path
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for GatewayHarness {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
