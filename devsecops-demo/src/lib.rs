use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod https_redirect;

pub use config::ServerConfig;
pub use error::{Error, Result};

/// Route table for the API, without any transport policies applied.
pub fn api_router() -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/suma", post(handlers::suma))
}

/// Builds the full application: API routes, HTTPS redirection, and request tracing.
pub fn build_router(config: &ServerConfig) -> Router {
    let router = match config.https_port {
        Some(https_port) => api_router().layer(middleware::from_fn_with_state(
            https_port,
            https_redirect::redirect_to_https,
        )),
        None => {
            tracing::warn!("HTTPS_PORT is not set; requests will not be redirected to https");
            api_router()
        }
    };

    router.layer(TraceLayer::new_for_http())
}

/// Binds `config.address()` and serves until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let app = build_router(&config);
    let address = config.address();

    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
