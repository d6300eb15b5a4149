use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::smoothing::palette_position;

/// Black -> red -> orange -> yellow -> white, in four equal segments.
#[derive(Debug)]
pub struct MandelbrotFireGradient {
    max_iterations: u32,
}

impl ColourMap for MandelbrotFireGradient {
    fn map(&self, result: PixelResult) -> Colour {
        match palette_position(result, self.max_iterations) {
            Some(t) => fire(t),
            None => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        ColourMapKind::FireGradient.display_name()
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

fn fire(t: f64) -> Colour {
    let (r, g, b) = if t < 0.25 {
        let local_t = t / 0.25;
        ((local_t * 255.0) as u8, 0, 0)
    } else if t < 0.5 {
        let local_t = (t - 0.25) / 0.25;
        (255, (local_t * 165.0) as u8, 0)
    } else if t < 0.75 {
        let local_t = (t - 0.5) / 0.25;
        (255, (165.0 + local_t * 90.0) as u8, 0)
    } else {
        let local_t = (t - 0.75) / 0.25;
        (255, 255, (local_t * 255.0) as u8)
    };

    Colour::opaque(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_opaque_black() {
        let mapper = MandelbrotFireGradient::new(100);
        let colour = mapper.map(PixelResult {
            iterations: 100,
            magnitude_squared: 0.1,
        });

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_escaped_pixels_are_opaque() {
        let mapper = MandelbrotFireGradient::new(100);

        for iterations in 0..100 {
            let colour = mapper.map(PixelResult {
                iterations,
                magnitude_squared: 5.0,
            });

            assert_eq!(colour.a, 255);
        }
    }

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(fire(0.0), Colour::opaque(0, 0, 0));
        assert_eq!(fire(0.25), Colour::opaque(255, 0, 0));
        assert_eq!(fire(0.5), Colour::opaque(255, 165, 0));
        assert_eq!(fire(0.75), Colour::opaque(255, 255, 0));
        assert_eq!(fire(1.0), Colour::opaque(255, 255, 255));
    }

    #[test]
    fn test_late_escape_is_brighter_than_early_escape() {
        let mapper = MandelbrotFireGradient::new(800);
        let early = mapper.map(PixelResult {
            iterations: 2,
            magnitude_squared: 5.0,
        });
        let late = mapper.map(PixelResult {
            iterations: 400,
            magnitude_squared: 5.0,
        });

        let brightness = |c: Colour| u32::from(c.r) + u32::from(c.g) + u32::from(c.b);
        assert!(brightness(late) > brightness(early));
    }
}
