use std::path::Path;

use crate::core::data::raster::Raster;
use crate::storage::write_png::EncodeError;

pub trait FilePresenterPort {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> Result<(), EncodeError>;
}
