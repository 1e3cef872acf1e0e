use axum::Router;
use deskrelay_core::constants::STATIC_PREFIX_PATH;
use tracing::info;

pub mod config;
mod error;
mod server;
mod store;
mod views;

pub use error::StartupError;

pub fn routers() -> Router {
    Router::new()
        .merge(server::routers())
        .merge(deskrelay_assets::static_router(STATIC_PREFIX_PATH))
}

/// ordered startup: credentials, client, templates, view engine, then the
/// optional user-directory prefetch; the listener must not bind unless this
/// returned Ok
pub async fn init() -> Result<(), StartupError> {
    store::init_stores().await?;
    views::init_view_engine();
    info!("deskrelay server init success");
    Ok(())
}
