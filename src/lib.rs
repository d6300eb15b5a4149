pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use config::EngineConfig;
pub use controllers::cli::render::CliRenderController;
pub use controllers::tile::{render, RenderError, TileController};
pub use crate::core::data::raster::Raster;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::tile_address::TileAddress;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
pub use input::http::{router, AppState};
pub use presenters::file::png::PngFilePresenter;
pub use storage::write_png::{write_png, EncodeError};
