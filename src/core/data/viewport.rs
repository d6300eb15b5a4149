use crate::core::data::complex::Complex;

/// Square region of the complex plane covered by one tile.
///
/// `origin` is the corner with the smallest real and imaginary parts; the
/// region extends `edge_length` along both axes. A zero edge length is a
/// valid (degenerate) viewport and occurs at zoom levels beyond `f64` range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    edge_length: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(real_origin: f64, imaginary_origin: f64, edge_length: f64) -> Self {
        Self {
            origin: Complex::new(real_origin, imaginary_origin),
            edge_length,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn real_origin(&self) -> f64 {
        self.origin.real
    }

    #[must_use]
    pub fn imaginary_origin(&self) -> f64 {
        self.origin.imag
    }

    #[must_use]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.origin.real.is_finite() && self.origin.imag.is_finite() && self.edge_length.is_finite()
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.origin.real <= point.real
            && self.origin.imag <= point.imag
            && point.real <= self.origin.real + self.edge_length
            && point.imag <= self.origin.imag + self.edge_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let viewport = Viewport::new(-2.0, -1.5, 4.0);

        assert_eq!(viewport.real_origin(), -2.0);
        assert_eq!(viewport.imaginary_origin(), -1.5);
        assert_eq!(viewport.origin(), Complex::new(-2.0, -1.5));
        assert_eq!(viewport.edge_length(), 4.0);
    }

    #[test]
    fn test_contains_point_includes_edges() {
        let viewport = Viewport::new(-2.0, -2.0, 4.0);

        assert!(viewport.contains_point(Complex::ZERO));
        assert!(viewport.contains_point(Complex::new(-2.0, -2.0)));
        assert!(viewport.contains_point(Complex::new(2.0, 2.0)));
        assert!(!viewport.contains_point(Complex::new(2.1, 0.0)));
        assert!(!viewport.contains_point(Complex::new(0.0, -2.1)));
    }

    #[test]
    fn test_degenerate_viewport_is_finite() {
        let viewport = Viewport::new(-2.0, -2.0, 0.0);

        assert!(viewport.is_finite());
        assert!(viewport.contains_point(Complex::new(-2.0, -2.0)));
    }

    #[test]
    fn test_infinite_components_are_detected() {
        assert!(!Viewport::new(f64::INFINITY, 0.0, 1.0).is_finite());
        assert!(!Viewport::new(0.0, 0.0, f64::NAN).is_finite());
    }
}
