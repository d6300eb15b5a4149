pub mod factory;
pub mod kinds;
pub mod maps;
pub mod smoothing;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;
use maps::fire_gradient::MandelbrotFireGradient;

/// Colours one pixel with the default palette.
#[must_use]
pub fn colorize(result: PixelResult, max_iterations: u32) -> Colour {
    MandelbrotFireGradient::new(max_iterations).map(result)
}
