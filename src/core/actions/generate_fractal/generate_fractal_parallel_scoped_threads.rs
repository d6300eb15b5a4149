use std::error::Error;
use std::thread;

use thiserror::Error;

use crate::core::actions::generate_fractal::generate_fractal_serial::generate_rows_into;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::util::calculate_bands_in_pixel_rect::{band_rows, calculate_bands_in_pixel_rect};

#[derive(Debug, Error)]
pub enum GenerateFractalParallelError<AlgFailure: Error + 'static> {
    #[error("fractal algorithm error: {0}")]
    Algorithm(#[source] AlgFailure),
    #[error("band worker {band} panicked")]
    WorkerPanicked { band: usize },
}

/// Computes `pixel_rect` across `worker_count` scoped threads.
///
/// The output buffer is allocated up front and split into disjoint row
/// bands, one per worker, so no two threads ever touch the same slot and no
/// locking is needed. Returns once every band has finished. The result is
/// identical to [`generate_fractal_serial`] for any worker count.
///
/// [`generate_fractal_serial`]: super::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_scoped_threads<Alg>(
    pixel_rect: PixelRect,
    worker_count: usize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, GenerateFractalParallelError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Default + Send,
    Alg::Failure: Send + 'static,
{
    let width = pixel_rect.width();
    let total_bands = calculate_bands_in_pixel_rect(worker_count, pixel_rect);
    let mut results = vec![Alg::Success::default(); pixel_rect.size()];

    thread::scope(|scope| -> Result<(), GenerateFractalParallelError<Alg::Failure>> {
        let mut remaining = results.as_mut_slice();

        let handles: Vec<_> = (0..total_bands)
            .map(|band| {
                let rows = band_rows(band, total_bands, pixel_rect);
                let (band_slots, rest) =
                    std::mem::take(&mut remaining).split_at_mut(rows.len() * width as usize);
                remaining = rest;

                scope.spawn(move || generate_rows_into(rows, width, algorithm, band_slots))
            })
            .collect();

        // Join every band before inspecting outcomes so no panicked thread is left unjoined.
        let outcomes: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();

        for (band, outcome) in outcomes.into_iter().enumerate() {
            outcome
                .map_err(|_| GenerateFractalParallelError::WorkerPanicked { band })?
                .map_err(GenerateFractalParallelError::Algorithm)?;
        }

        Ok(())
    })?;

    Ok(results)
}
