use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderRequestError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Everything needed for one render. Built per request and consumed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    viewport: Viewport,
    pixel_rect: PixelRect,
    max_iterations: u32,
    worker_count: usize,
}

impl RenderRequest {
    /// `worker_count` is clamped to at least one.
    pub fn new(
        viewport: Viewport,
        pixel_rect: PixelRect,
        max_iterations: u32,
        worker_count: usize,
    ) -> Result<Self, RenderRequestError> {
        if max_iterations == 0 {
            return Err(RenderRequestError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport,
            pixel_rect,
            max_iterations,
            worker_count: worker_count.max(1),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    #[must_use]
    pub fn with_worker_count(self, worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
            ..self
        }
    }
}
