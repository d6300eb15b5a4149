use crate::core::data::tile_address::TileAddress;
use crate::core::data::viewport::Viewport;

/// Edge length of the zoom 0 tile; the tile spans [-2, 2] on both axes.
pub const BASE_WIDTH: f64 = 4.0;

/// Maps a tile address onto the complex plane.
///
/// Each zoom level halves the edge length. Both origin components share the
/// `-base_width / 2` offset so that the zoom 0 tile is centred on 0 + 0i.
/// Components that overflow `f64` are saturated to `±f64::MAX` and a zoom
/// deep enough to underflow yields a zero-width viewport.
#[must_use]
pub fn tile_to_viewport(tile: TileAddress, base_width: f64) -> Viewport {
    let edge_length = saturate(base_width / 2f64.powi(tile.z));
    let offset = base_width / 2.0;

    Viewport::new(
        saturate(edge_length * tile.x as f64 - offset),
        saturate(edge_length * tile.y as f64 - offset),
        edge_length,
    )
}

fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}
