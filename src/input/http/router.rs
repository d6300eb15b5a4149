use std::path::Path;

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeader;
use tower_http::trace::TraceLayer;

use crate::controllers::tile::TileController;
use crate::input::http::handlers::{health_handler, tile_handler};
use crate::input::http::STATIC_CACHE_CONTROL;

#[derive(Debug, Clone)]
pub struct AppState {
    pub controller: TileController,
}

impl AppState {
    #[must_use]
    pub fn new(controller: TileController) -> Self {
        Self { controller }
    }
}

/// Tile and health routes, with every other path served from `frontend_dir`.
pub fn router(state: AppState, frontend_dir: impl AsRef<Path>) -> Router {
    let static_files = SetResponseHeader::overriding(
        ServeDir::new(frontend_dir.as_ref()),
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_CACHE_CONTROL),
    );

    Router::new()
        .route("/tiles/:z/:x/:y", get(tile_handler))
        .route("/health", get(health_handler))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
