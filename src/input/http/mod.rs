//! Tile HTTP surface.
//!
//! Parses tile addresses and render parameters from requests, hands them to
//! the [`TileController`](crate::controllers::tile::TileController) and
//! streams the PNG back. Everything else is served from a static directory.

pub mod errors;
pub mod handlers;
pub mod router;

pub use router::{router, AppState};

/// Tiles are pure functions of their address and parameters.
pub const TILE_CACHE_CONTROL: &str = "immutable, max-age=86400, no-transform, public";
pub const STATIC_CACHE_CONTROL: &str = "immutable, max-age=3600, no-transform, public";
