//! Process-wide render defaults.
//!
//! Built once at startup and shared read-only with every render.

use tracing::warn;

use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::core::util::tile_to_viewport::BASE_WIDTH;

pub const DEFAULT_TILE_SIZE: u32 = 400;
pub const DEFAULT_MAX_ITERATIONS: u32 = 800;
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Environment variable overriding the per-render worker count.
pub const WORKER_COUNT_ENV: &str = "MW_THREAD_COUNT";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub tile_size: u32,
    pub base_width: f64,
    pub max_iterations: u32,
    pub worker_count: usize,
    pub colour_map: ColourMapKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            base_width: BASE_WIDTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            worker_count: DEFAULT_WORKER_COUNT,
            colour_map: ColourMapKind::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults with the worker count taken from [`WORKER_COUNT_ENV`] when it
    /// holds a positive integer.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = std::env::var(WORKER_COUNT_ENV).ok();
        Self::default().with_worker_count_override(raw.as_deref())
    }

    /// Applies a raw worker count. Unparseable or zero values are logged and
    /// leave the current value in place.
    #[must_use]
    pub fn with_worker_count_override(self, raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => self,
            Some(raw) => match parse_positive::<usize>(raw) {
                Some(worker_count) => Self { worker_count, ..self },
                None => {
                    warn!(value = raw, fallback = self.worker_count, "failed to convert worker count to int");
                    self
                }
            },
        }
    }

    /// Iteration cap for one request. Falls back to the configured default
    /// when the raw value is missing, unparseable or zero.
    #[must_use]
    pub fn resolve_max_iterations(&self, raw: Option<&str>) -> u32 {
        match raw.filter(|raw| !raw.is_empty()) {
            None => self.max_iterations,
            Some(raw) => parse_positive(raw).unwrap_or_else(|| {
                warn!(value = raw, fallback = self.max_iterations, "failed to convert max_iterations to int");
                self.max_iterations
            }),
        }
    }

    #[must_use]
    pub fn resolve_colour_map(&self, raw: Option<&str>) -> ColourMapKind {
        match raw.filter(|raw| !raw.is_empty()) {
            None => self.colour_map,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warn!(error = %err, fallback = %self.colour_map, "ignoring palette");
                self.colour_map
            }),
        }
    }
}

fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + Default + PartialEq,
{
    raw.parse::<T>().ok().filter(|value| *value != T::default())
}
