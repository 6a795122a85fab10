//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, HttpServerConfig};
use crate::version::VersionLabel;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the listening socket for the configured host and port.
pub async fn bind(http: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = SocketAddr::new(http.host, http.port);
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Announce the bound port and the deployment label.
fn log_startup(port: u16, version: &VersionLabel) {
    tracing::info!(
        port,
        version = %version,
        "Server running on port {} - Version: {}",
        port,
        version
    );
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(&config.http).await?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(config.http.port);

    log_startup(port, &config.version);

    serve(listener, app, shutdown::shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
