//! HTTP server implementation for the Statuswatch API.

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use statuswatch_core::StatuswatchConfig;

use crate::error::ApiError;
use crate::router::build_router;
use crate::state::AppState;

/// HTTP server for the Statuswatch webhook receiver.
pub struct ApiServer {
    config: Arc<StatuswatchConfig>,
    router: Router,
}

impl ApiServer {
    /// Create a new server from handler state.
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        let router = build_router(state);

        Self { config, router }
    }

    /// Run the server until shutdown signal.
    pub async fn run(self) -> Result<(), ApiError> {
        let addr: SocketAddr = format!("{}:{}", self.config.http.host, self.config.http.port)
            .parse()
            .map_err(|e| ApiError::Internal(format!("invalid bind address: {}", e)))?;

        info!("Starting Statuswatch webhook receiver");
        if self.config.allowed_ips.is_empty() {
            info!("Source allow-list: disabled");
        } else {
            info!("Source allow-list: {} entries", self.config.allowed_ips.len());
        }

        let router = self.build_router_with_middleware();
        let shutdown = shutdown_signal();

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            ApiError::Io(std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("Failed to bind to {}: {}", addr, e),
            ))
        })?;

        info!("Server listening on {}", addr);

        // ConnectInfo carries the peer address into the allow-list check.
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Build router with all middleware layers.
    fn build_router_with_middleware(&self) -> Router {
        let mut router = self.router.clone();

        if self.config.http.request_timeout > 0 {
            router = router.layer(tower_http::timeout::TimeoutLayer::new(
                Duration::from_secs(self.config.http.request_timeout),
            ));
        }

        if self.config.http.enable_request_logging {
            router = router.layer(tower_http::trace::TraceLayer::new_for_http());
        }

        router.layer(tower_http::limit::RequestBodyLimitLayer::new(
            self.config.http.max_body_size,
        ))
    }
}

/// Create a shutdown signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C signal, shutting down...");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
        info!("Received SIGTERM signal, shutting down...");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Utility function to start a server from handler state.
pub async fn start_server(state: AppState) -> Result<(), ApiError> {
    let server = ApiServer::new(state);
    server.run().await
}
