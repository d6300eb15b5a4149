use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::config::EngineConfig;
use crate::core::actions::generate_fractal::generate_fractal_parallel_scoped_threads::{
    generate_fractal_parallel_scoped_threads, GenerateFractalParallelError,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::render_request::{RenderRequest, RenderRequestError};
use crate::core::data::tile_address::TileAddress;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use crate::core::util::tile_to_viewport::tile_to_viewport;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Request(#[from] RenderRequestError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Generate(#[from] GenerateFractalParallelError<PixelToComplexCoordsError>),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Renders one request to an RGBA raster.
///
/// Escape times are computed across `request.worker_count()` row bands and
/// joined before colouring, so the call returns only a complete raster.
pub fn render(request: &RenderRequest, colour_map: &dyn ColourMap) -> Result<Raster, RenderError> {
    let pixel_rect = request.pixel_rect();
    let algorithm = MandelbrotAlgorithm::new(request);

    let start = Instant::now();
    let results = generate_fractal_parallel_scoped_threads(pixel_rect, request.worker_count(), &algorithm)?;
    let escape_duration = start.elapsed();

    let raster = generate_pixel_buffer(&results, colour_map, pixel_rect)?;

    debug!(
        width = pixel_rect.width(),
        height = pixel_rect.height(),
        max_iterations = request.max_iterations(),
        workers = request.worker_count(),
        palette = colour_map.display_name(),
        escape_ms = escape_duration.as_millis() as u64,
        total_ms = start.elapsed().as_millis() as u64,
        "rendered raster"
    );

    Ok(raster)
}

/// Tile pipeline bound to the process configuration.
#[derive(Debug, Clone, Copy)]
pub struct TileController {
    config: EngineConfig,
}

impl TileController {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the render request for `tile` at the configured tile size and
    /// worker count.
    pub fn request_for(&self, tile: TileAddress, max_iterations: u32) -> Result<RenderRequest, RenderError> {
        let viewport = tile_to_viewport(tile, self.config.base_width);
        let pixel_rect = PixelRect::square(self.config.tile_size)?;

        Ok(RenderRequest::new(viewport, pixel_rect, max_iterations, self.config.worker_count)?)
    }

    pub fn render_tile(
        &self,
        tile: TileAddress,
        max_iterations: u32,
        colour_map: ColourMapKind,
    ) -> Result<Raster, RenderError> {
        let request = self.request_for(tile, max_iterations)?;
        let colour_map = mandelbrot_colour_map_factory(colour_map, request.max_iterations());

        debug!(%tile, viewport = ?request.viewport(), "rendering tile");
        render(&request, colour_map.as_ref())
    }
}
