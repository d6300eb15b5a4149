use crate::core::data::colour::Colour;
use crate::core::data::pixel_result::PixelResult;

/// Pure mapping from an escape-time result to a colour.
///
/// Implementations must return the same colour for the same input so that
/// a tile is reproducible regardless of how its rows were scheduled.
pub trait ColourMap: Send + Sync {
    fn map(&self, result: PixelResult) -> Colour;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, result: PixelResult) -> Colour {
        (**self).map(result)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
