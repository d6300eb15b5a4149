use crate::core::data::pixel_result::PixelResult;

/// Position of an escaped pixel along a palette, in `[0, 1]`.
///
/// Uses the continuous escape count `n + 1 - log2(ln|z|)` and compresses it
/// logarithmically against `max_iterations`, so high iteration caps still
/// spread the common low counts across the palette. Interior pixels have no
/// position and return `None`.
#[must_use]
pub fn palette_position(result: PixelResult, max_iterations: u32) -> Option<f64> {
    if result.is_interior(max_iterations) {
        return None;
    }

    let max = f64::from(max_iterations);
    let smoothed = smoothed_iterations(result).clamp(0.0, max);

    Some(((1.0 + smoothed).ln() / (1.0 + max).ln()).clamp(0.0, 1.0))
}

#[must_use]
pub fn smoothed_iterations(result: PixelResult) -> f64 {
    let iterations = f64::from(result.iterations);
    let log_modulus = result.magnitude_squared.ln() / 2.0;

    if !log_modulus.is_finite() || log_modulus <= 0.0 {
        return iterations;
    }

    iterations + 1.0 - log_modulus.log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: u32, magnitude_squared: f64) -> PixelResult {
        PixelResult {
            iterations,
            magnitude_squared,
        }
    }

    #[test]
    fn test_interior_has_no_position() {
        assert_eq!(palette_position(escaped(100, 0.5), 100), None);
    }

    #[test]
    fn test_position_is_within_unit_interval() {
        for iterations in 0..100 {
            for magnitude_squared in [4.0001, 5.0, 16.0, 1e6, 1e300] {
                let t = palette_position(escaped(iterations, magnitude_squared), 100).unwrap();

                assert!((0.0..=1.0).contains(&t), "{} {}", iterations, magnitude_squared);
            }
        }
    }

    #[test]
    fn test_position_grows_with_iterations() {
        let low = palette_position(escaped(3, 5.0), 800).unwrap();
        let high = palette_position(escaped(30, 5.0), 800).unwrap();

        assert!(low < high);
    }

    #[test]
    fn test_smoothing_is_continuous_across_iteration_boundary() {
        // |z| just over 2 on step n squares to |z| ~ 4 on step n + 1.
        let just_escaped = smoothed_iterations(escaped(9, 4.0 + 1e-9));
        let one_step_later = smoothed_iterations(escaped(10, 16.0));

        assert!((just_escaped - one_step_later).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_magnitude_falls_back_to_raw_count() {
        assert_eq!(smoothed_iterations(escaped(7, 0.0)), 7.0);
        assert_eq!(smoothed_iterations(escaped(7, f64::INFINITY)), 7.0);
    }
}
