use std::io::{BufWriter, Write};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};
use thiserror::Error;

use crate::core::data::raster::Raster;

const SINK_BUFFER_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("png encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("png sink write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Streams `raster` to `sink` as an RGBA8 PNG.
///
/// Bytes are handed to the sink as the encoder produces them. Any write
/// failure is returned; the caller must treat whatever reached the sink as
/// garbage in that case.
pub fn write_png<W: Write>(raster: &Raster, sink: W) -> Result<(), EncodeError> {
    let mut writer = BufWriter::with_capacity(SINK_BUFFER_BYTES, sink);

    PngEncoder::new_with_quality(&mut writer, CompressionType::Default, FilterType::Adaptive).write_image(
        raster.buffer(),
        raster.width(),
        raster.height(),
        ColorType::Rgba8,
    )?;
    writer.flush()?;

    Ok(())
}
