use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::smoothing::palette_position;

#[derive(Debug)]
pub struct MandelbrotBlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap for MandelbrotBlueWhiteGradient {
    fn map(&self, result: PixelResult) -> Colour {
        match palette_position(result, self.max_iterations) {
            Some(t) => blue_white(t),
            None => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        ColourMapKind::BlueWhiteGradient.display_name()
    }
}

impl MandelbrotBlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

// Bernstein-style polynomials: deep blue near the edge, warm white near the set.
fn blue_white(t: f64) -> Colour {
    let u = 1.0 - t;
    let r = (9.0 * u * t * t * t * 255.0) as u8;
    let g = (15.0 * u * u * t * t * 255.0) as u8;
    let b = (8.5 * u * u * u * t * 255.0) as u8;

    Colour::opaque(r, g, b)
}
