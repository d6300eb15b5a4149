use std::ops::Range;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;

/// Computes every pixel of `pixel_rect` on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..pixel_rect.height())
        .flat_map(|y| (0..pixel_rect.width()).map(move |x| (x, y)))
        .map(|(x, y)| algorithm.compute(x, y))
        .collect()
}

/// Fills `out` with the results for `rows`, which must hold exactly
/// `rows.len() * width` slots.
pub fn generate_rows_into<Alg: FractalAlgorithm>(
    rows: Range<usize>,
    width: u32,
    algorithm: &Alg,
    out: &mut [Alg::Success],
) -> Result<(), Alg::Failure> {
    let width = width as usize;
    debug_assert_eq!(out.len(), rows.len() * width);

    for (row, y) in out.chunks_exact_mut(width).zip(rows) {
        for (x, slot) in row.iter_mut().enumerate() {
            *slot = algorithm.compute(x as u32, y as u32)?;
        }
    }

    Ok(())
}
