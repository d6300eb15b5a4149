use crate::core::data::pixel_rect::PixelRect;
use std::ops::Range;

/// Number of row bands to split `pixel_rect` into.
///
/// Never zero and never more than one band per row, so every band owns at
/// least one row.
#[must_use]
pub fn calculate_bands_in_pixel_rect(worker_count: usize, pixel_rect: PixelRect) -> usize {
    worker_count.clamp(1, pixel_rect.height() as usize)
}

/// Row range owned by band `band_num` out of `total_bands`.
///
/// Bands are contiguous and equally tall; the last band absorbs the
/// remainder when the height does not divide evenly.
#[must_use]
pub fn band_rows(band_num: usize, total_bands: usize, pixel_rect: PixelRect) -> Range<usize> {
    let height = pixel_rect.height() as usize;
    let band_height = height / total_bands;
    let start = band_num * band_height;

    let end = if band_num == total_bands - 1 {
        height
    } else {
        start + band_height
    };

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(height: u32) -> PixelRect {
        PixelRect::new(5, height).unwrap()
    }

    #[test]
    fn test_zero_workers_gives_1_band() {
        assert_eq!(calculate_bands_in_pixel_rect(0, rect(10)), 1);
    }

    #[test]
    fn test_height_1_gives_1_band() {
        assert_eq!(calculate_bands_in_pixel_rect(10, rect(1)), 1);
    }

    #[test]
    fn test_bands_do_not_exceed_height() {
        assert_eq!(calculate_bands_in_pixel_rect(10, rect(3)), 3);
    }

    #[test]
    fn test_bands_match_worker_count_when_rows_allow() {
        assert_eq!(calculate_bands_in_pixel_rect(4, rect(400)), 4);
    }

    #[test]
    fn test_band_rows_even_split() {
        let rows: Vec<_> = (0..4).map(|band| band_rows(band, 4, rect(400))).collect();

        assert_eq!(rows, vec![0..100, 100..200, 200..300, 300..400]);
    }

    #[test]
    fn test_last_band_absorbs_remainder() {
        let rows: Vec<_> = (0..3).map(|band| band_rows(band, 3, rect(11))).collect();

        assert_eq!(rows, vec![0..3, 3..6, 6..11]);
    }

    #[test]
    fn test_bands_cover_every_row_exactly_once() {
        for height in 1..40 {
            for workers in 1..12 {
                let pixel_rect = rect(height);
                let bands = calculate_bands_in_pixel_rect(workers, pixel_rect);
                let rows: Vec<usize> = (0..bands)
                    .flat_map(|band| band_rows(band, bands, pixel_rect))
                    .collect();

                assert_eq!(rows, (0..height as usize).collect::<Vec<_>>());
            }
        }
    }
}
