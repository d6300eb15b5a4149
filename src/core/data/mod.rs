pub mod colour;
pub mod complex;
pub mod pixel_rect;
pub mod pixel_result;
pub mod raster;
pub mod render_request;
pub mod tile_address;
pub mod viewport;
