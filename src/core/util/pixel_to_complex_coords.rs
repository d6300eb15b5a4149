use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error("pixel (x: {x}, y: {y}) is outside the {width}x{height} pixel rect")]
    PointOutsideRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Maps device pixel `(x, y)` to the complex plane.
///
/// Pixel (0, 0) lands exactly on the viewport origin; the far edge
/// (`x == width`) is never sampled, so adjacent tiles do not overlap.
pub fn pixel_to_complex_coords(
    x: u32,
    y: u32,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains(x, y) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            x,
            y,
            width: pixel_rect.width(),
            height: pixel_rect.height(),
        });
    }

    let real = viewport.real_origin()
        + (f64::from(x) / f64::from(pixel_rect.width())) * viewport.edge_length();
    let imag = viewport.imaginary_origin()
        + (f64::from(y) / f64::from(pixel_rect.height())) * viewport.edge_length();

    Ok(Complex { real, imag })
}
