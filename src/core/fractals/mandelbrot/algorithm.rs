use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::pixel_result::PixelResult;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PixelToComplexCoordsError};

/// Squared escape radius; an orbit with `|z| > 2` is unbounded.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z = z^2 + c` from `z = 0`.
///
/// Returns the index of the first iterate outside the escape radius, or
/// `max_iterations` if none is found. A point with `|c| > 2` therefore
/// reports 1 for any `max_iterations >= 2`.
#[must_use]
pub fn escape(c: Complex, max_iterations: u32) -> PixelResult {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        let magnitude_squared = z.magnitude_squared();

        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            return PixelResult {
                iterations: iteration,
                magnitude_squared,
            };
        }
        z = z.square() + c;
    }

    PixelResult {
        iterations: max_iterations,
        magnitude_squared: z.magnitude_squared(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = PixelResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, x: u32, y: u32) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(x, y, self.pixel_rect, self.viewport)?;

        Ok(escape(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(request: &RenderRequest) -> Self {
        Self {
            pixel_rect: request.pixel_rect(),
            viewport: request.viewport(),
            max_iterations: request.max_iterations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 10, 800] {
            let result = escape(Complex::ZERO, max_iterations);

            assert_eq!(result.iterations, max_iterations);
            assert_eq!(result.magnitude_squared, 0.0);
        }
    }

    #[test]
    fn test_points_outside_radius_escape_immediately() {
        for c in [
            Complex::new(-2.0, -2.0),
            Complex::new(2.1, 0.0),
            Complex::new(0.0, -3.0),
            Complex::new(100.0, 100.0),
        ] {
            for max_iterations in [2, 3, 50, 800] {
                let result = escape(c, max_iterations);

                assert!(result.iterations <= 1, "{:?}", c);
                assert_ne!(result.iterations, max_iterations);
                assert!(result.magnitude_squared > ESCAPE_RADIUS_SQUARED);
            }
        }
    }

    #[test]
    fn test_base_tile_corner_escapes_in_one_iteration() {
        let result = escape(Complex::new(-2.0, -2.0), 800);

        assert_eq!(result.iterations, 1);
        assert_eq!(result.magnitude_squared, 8.0);
    }

    #[test]
    fn test_period_two_bulb_is_interior() {
        assert_eq!(escape(Complex::new(-1.0, 0.0), 500).iterations, 500);
    }

    #[test]
    fn test_boundary_adjacent_point_takes_several_iterations() {
        // c = 0.5: 0, 0.5, 0.75, 1.0625, 1.6289, 3.1533 -> escapes on the fifth iterate
        let result = escape(Complex::new(0.5, 0.0), 100);

        assert_eq!(result.iterations, 5);
    }

    #[test]
    fn test_algorithm_maps_pixels_through_viewport() {
        let request = RenderRequest::new(
            Viewport::new(-2.0, -2.0, 4.0),
            PixelRect::square(400).unwrap(),
            800,
            4,
        )
        .unwrap();
        let algorithm = MandelbrotAlgorithm::new(&request);

        assert_eq!(algorithm.compute(0, 0).unwrap().iterations, 1);
        assert_eq!(algorithm.compute(200, 200).unwrap().iterations, 800);
        assert!(algorithm.compute(400, 0).is_err());
    }
}
