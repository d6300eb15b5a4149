use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::controllers::tile::RenderError;
use crate::core::data::tile_address::TileAddressError;

#[derive(Debug, Error)]
pub enum TileServiceError {
    #[error(transparent)]
    Address(#[from] TileAddressError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for TileServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Address(err) => {
                warn!(error = %err, "rejecting malformed tile address");
                StatusCode::BAD_REQUEST
            }
            Self::Render(_) | Self::Join(_) => {
                error!(error = %self, "tile request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
