use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} raster")]
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type RasterData = Vec<u8>;

/// Row-major RGBA8 image owned by a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pixel_rect: PixelRect,
    buffer: RasterData,
}

impl Raster {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(pixel_rect: PixelRect, buffer: RasterData) -> Result<Self, RasterError> {
        let expected = pixel_rect_to_buffer_size(pixel_rect);

        if expected != buffer.len() {
            return Err(RasterError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> RasterData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let index = self.index_of(x, y)?;
        let [r, g, b, a]: [u8; BYTES_PER_PIXEL] =
            self.buffer[index..index + BYTES_PER_PIXEL].try_into().ok()?;

        Some(Colour { r, g, b, a })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), RasterError> {
        let index = self.index_of(x, y).ok_or(RasterError::PixelOutsideBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());
        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if !self.pixel_rect.contains(x, y) {
            return None;
        }

        Some((y as usize * self.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }
}
