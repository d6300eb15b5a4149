/// Escape-time outcome for a single pixel.
///
/// `iterations` equals the render's `max_iterations` when the orbit never
/// left the escape radius. `magnitude_squared` is `|z|^2` at the point the
/// iteration stopped and feeds smooth colouring.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PixelResult {
    pub iterations: u32,
    pub magnitude_squared: f64,
}

impl PixelResult {
    #[must_use]
    pub fn is_interior(&self, max_iterations: u32) -> bool {
        self.iterations >= max_iterations
    }
}
