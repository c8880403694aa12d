//! End-to-end mosaic request pipeline
//!
//! Validates the grid, builds the palette, composites, and encodes.
//! Validation happens before any filesystem or pixel work so a bad
//! request never launches a task; any later failure aborts the whole
//! request with no retries.

use crate::io::error::Result;
use crate::io::image::encode_jpeg;
use crate::io::progress::ProgressManager;
use crate::mosaic::compositor;
use crate::palette::builder;
use crate::spatial::CellGrid;
use image::RgbImage;
use std::path::Path;

/// Generate a photomosaic of `source` from the tiles in `tiles_directory`
///
/// The palette is built fresh for this request and discarded once the
/// canvas is composited. Returns the finished mosaic encoded as JPEG
/// bytes, ready for transport or writing to disk by the caller.
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidGrid`] when `divisions` yields
/// a zero cell size, [`crate::MosaicError::DirectoryAccess`] /
/// [`crate::MosaicError::EmptyPalette`] from the palette build, and
/// [`crate::MosaicError::ImageEncode`] when JPEG encoding fails.
pub fn create_mosaic(
    source: &RgbImage,
    tiles_directory: &Path,
    divisions: u32,
    progress: Option<&ProgressManager>,
) -> Result<Vec<u8>> {
    let grid = CellGrid::new(source.width(), source.height(), divisions)?;

    let palette = builder::build(tiles_directory, grid.x_delta(), progress)?;

    let mut canvas = RgbImage::new(source.width(), source.height());
    compositor::compose(source, &palette, &grid, &mut canvas, progress)?;

    encode_jpeg(&canvas)
}
