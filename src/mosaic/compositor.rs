//! Concurrent compositing of matched tiles into the output canvas
//!
//! Every grid cell is its own parallel task: average the source over
//! the cell, find the nearest palette tile, draw it. The source image
//! and the palette are immutable during this phase and read without
//! synchronization; the canvas is the only shared mutable state.

use crate::color::average::region_average;
use crate::io::error::{Result, computation_error};
use crate::io::progress::ProgressManager;
use crate::palette::{Palette, PaletteTile, matcher};
use crate::spatial::{CellGrid, Region};
use image::{RgbImage, imageops};
use rayon::prelude::*;
use std::sync::{Mutex, PoisonError};

/// Composite the nearest-matching tile into every grid cell of `canvas`
///
/// All cell tasks run in parallel and the call returns only after every
/// one of them has completed. The first error aborts the phase.
///
/// # Errors
///
/// Propagates [`crate::MosaicError::DegenerateRegion`] from cell
/// averaging and returns a [`crate::MosaicError::Computation`] if the
/// palette turns out to be empty, which the builder guard makes
/// unreachable.
pub fn compose(
    source: &RgbImage,
    palette: &Palette,
    grid: &CellGrid,
    canvas: &mut RgbImage,
    progress: Option<&ProgressManager>,
) -> Result<()> {
    let cells = grid.cells();
    let bar = progress.map(|pm| pm.phase_bar("Placing tiles", cells.len() as u64));

    // Cell regions never overlap, but the pixel buffer itself is not
    // safe for concurrent writers; a single lock serializes the draws.
    let shared_canvas = Mutex::new(canvas);

    cells.par_iter().try_for_each(|cell| {
        let cell_average = region_average(source, cell)?;
        let tile = matcher::nearest(palette, &cell_average)
            .ok_or_else(|| computation_error("nearest tile search", &"palette is empty"))?;

        draw_tile(&shared_canvas, cell, tile);
        if let Some(ref bar) = bar {
            bar.inc(1);
        }
        Ok(())
    })?;

    if let Some(bar) = bar {
        bar.finish();
    }

    Ok(())
}

// Draws from the tile's top-left origin, cropped to the cell size and
// to the tile's own bounds (a wide tile can scale to fewer rows than
// the cell height).
fn draw_tile(canvas: &Mutex<&mut RgbImage>, cell: &Region, tile: &PaletteTile) {
    let width = cell.width().min(tile.image().width());
    let height = cell.height().min(tile.image().height());
    let view = imageops::crop_imm(tile.image(), 0, 0, width, height);

    let mut guard = canvas.lock().unwrap_or_else(PoisonError::into_inner);
    imageops::replace(
        &mut **guard,
        &*view,
        i64::from(cell.x_min),
        i64::from(cell.y_min),
    );
}
