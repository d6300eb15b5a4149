use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::data::tile_address::TileAddress;
use crate::input::http::errors::TileServiceError;
use crate::input::http::router::AppState;
use crate::input::http::TILE_CACHE_CONTROL;
use crate::presenters::http::png_stream::stream_png;

/// Optional render parameters. Kept as raw strings so that bad values fall
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct TileParams {
    pub max_iterations: Option<String>,
    pub palette: Option<String>,
}

/// `GET /tiles/{z}/{x}/{y}`
#[instrument(skip(state))]
pub async fn tile_handler(
    State(state): State<AppState>,
    Path((z, x, y)): Path<(String, String, String)>,
    Query(params): Query<TileParams>,
) -> Result<Response, TileServiceError> {
    let tile = TileAddress::from_segments(&z, &x, &y)?;

    if !tile.is_in_range() {
        debug!(%tile, "tile lies outside the map pyramid");
    }

    let controller = state.controller;
    let max_iterations = controller.config().resolve_max_iterations(params.max_iterations.as_deref());
    let colour_map = controller.config().resolve_colour_map(params.palette.as_deref());

    let raster =
        tokio::task::spawn_blocking(move || controller.render_tile(tile, max_iterations, colour_map)).await??;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, TILE_CACHE_CONTROL),
        ],
        stream_png(raster, tile.to_string()),
    )
        .into_response())
}

/// `GET /health`
pub async fn health_handler() -> &'static str {
    "ok"
}
