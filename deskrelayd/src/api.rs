use axum::{routing::get, Router};
use deskrelay_server::StartupError;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config;

pub(crate) async fn start(cancel: CancellationToken) -> anyhow::Result<()> {
    let config = config::deskrelay_config();

    let app = Router::new()
        .route("/healthz", get(|| async { "UP" }))
        .merge(deskrelay_server::routers())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.api_port))
        .await
        .map_err(StartupError::Listen)?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("api server shutdown");
                },
            }
        })
        .await
        .map_err(|e| e.into())
}
