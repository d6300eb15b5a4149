use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::tile::{RenderError, TileController};
use crate::core::data::raster::Raster;
use crate::core::data::tile_address::TileAddress;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourMapKind;
use crate::storage::write_png::EncodeError;

/// Renders a single tile and hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    tiles: TileController,
    raster: Option<Raster>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, tiles: TileController) -> Self {
        Self {
            presenter,
            tiles,
            raster: None,
        }
    }

    pub fn generate(
        &mut self,
        tile: TileAddress,
        max_iterations: u32,
        colour_map: ColourMapKind,
    ) -> Result<&Raster, RenderError> {
        info!(
            %tile,
            size = self.tiles.config().tile_size,
            max_iterations,
            workers = self.tiles.config().worker_count,
            palette = %colour_map,
            "rendering tile"
        );

        let start = Instant::now();
        let raster = self.tiles.render_tile(tile, max_iterations, colour_map)?;
        info!(duration = ?start.elapsed(), "render complete");

        Ok(self.raster.insert(raster))
    }

    /// Writes the last generated tile. Does nothing if none was generated.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), EncodeError> {
        if let Some(raster) = &self.raster {
            self.presenter.present(raster, filepath.as_ref())?;
            info!(path = %filepath.as_ref().display(), "saved tile");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> Result<(), EncodeError> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), raster.buffer().len()));
            Ok(())
        }
    }

    fn tiles() -> TileController {
        TileController::new(EngineConfig {
            tile_size: 8,
            ..EngineConfig::default()
        })
    }

    #[test]
    fn test_write_without_generate_is_a_no_op() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter, tiles());

        controller.write("unused.png").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_raster() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter, tiles());

        let raster = controller
            .generate(TileAddress::new(1, 0, 1), 50, ColourMapKind::BlueWhiteGradient)
            .unwrap();
        assert_eq!(raster.width(), 8);
        controller.write("out/tile.png").unwrap();

        assert_eq!(
            presenter.written.borrow().as_slice(),
            &[(PathBuf::from("out/tile.png"), 8 * 8 * 4)]
        );
    }
}
