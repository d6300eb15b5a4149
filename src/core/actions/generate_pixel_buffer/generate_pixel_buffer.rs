use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::pixel_result::PixelResult;
use crate::core::data::raster::{Raster, RasterData, RasterError, BYTES_PER_PIXEL};

/// Colours row-major escape-time results into an RGBA raster.
///
/// Rows are mapped in parallel on the rayon pool. Each output row is written
/// only from its own input row, so the raster does not depend on scheduling.
pub fn generate_pixel_buffer<CMap>(
    input: &[PixelResult],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<Raster, RasterError>
where
    CMap: ColourMap + ?Sized,
{
    if input.len() != pixel_rect.size() {
        return Err(RasterError::BoundsMismatch {
            pixel_rect_size: pixel_rect.size() * BYTES_PER_PIXEL,
            buffer_size: input.len() * BYTES_PER_PIXEL,
        });
    }

    let width = pixel_rect.width() as usize;
    let mut buffer: RasterData = vec![0; pixel_rect.size() * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(width * BYTES_PER_PIXEL)
        .zip(input.par_chunks(width))
        .for_each(|(out_row, in_row)| {
            for (pixel, result) in out_row.chunks_exact_mut(BYTES_PER_PIXEL).zip(in_row) {
                pixel.copy_from_slice(&mapper.map(*result).to_rgba());
            }
        });

    Raster::from_data(pixel_rect, buffer)
}
