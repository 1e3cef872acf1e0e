use axum::Router;
use axum_embed::ServeEmbed;
use rust_embed::RustEmbed;

#[derive(RustEmbed, Clone)]
#[folder = "static/"]
struct StaticAssets;

/// form assets embedded at build time, served under the given prefix
pub fn static_router(prefix: &str) -> Router {
    Router::new().nest_service(prefix, ServeEmbed::<StaticAssets>::new())
}
