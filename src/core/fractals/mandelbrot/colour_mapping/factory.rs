use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::maps::blue_white_gradient::MandelbrotBlueWhiteGradient;
use crate::core::fractals::mandelbrot::colour_mapping::maps::fire_gradient::MandelbrotFireGradient;

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::FireGradient => Box::new(MandelbrotFireGradient::new(max_iterations)),
        ColourMapKind::BlueWhiteGradient => Box::new(MandelbrotBlueWhiteGradient::new(max_iterations)),
    }
}
