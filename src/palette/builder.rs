//! Palette construction from a directory of candidate tile images
//!
//! Every candidate file is processed by its own parallel task: decode,
//! scale to the cell width, average the scaled pixels. The builder
//! waits for all tasks before returning, and tiles are keyed by file
//! name, so completion order never affects the palette contents.

use crate::color::ColorVector;
use crate::color::average::region_average;
use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use crate::io::progress::ProgressManager;
use crate::spatial::Region;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbImage};
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::hash_map;
use std::path::{Path, PathBuf};

/// A processed tile: its source file name, scaled image, and average color
#[derive(Debug, Clone)]
pub struct PaletteTile {
    name: String,
    image: RgbImage,
    average: ColorVector,
}

impl PaletteTile {
    /// Assemble a tile from its parts
    pub const fn new(name: String, image: RgbImage, average: ColorVector) -> Self {
        Self {
            name,
            image,
            average,
        }
    }

    /// Source file name, unique within the palette
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tile image scaled to the cell width
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Mean color of the scaled image
    pub const fn average(&self) -> &ColorVector {
        &self.average
    }
}

/// Processed tiles keyed by file name, read-only after construction
#[derive(Debug, Default)]
pub struct Palette {
    tiles: HashMap<String, PaletteTile>,
}

impl Palette {
    /// Build a palette directly from processed tiles
    ///
    /// Later tiles replace earlier ones sharing the same name.
    pub fn from_tiles(tiles: impl IntoIterator<Item = PaletteTile>) -> Self {
        Self {
            tiles: tiles
                .into_iter()
                .map(|tile| (tile.name.clone(), tile))
                .collect(),
        }
    }

    /// Number of tiles in the palette
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the palette holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by file name
    pub fn get(&self, name: &str) -> Option<&PaletteTile> {
        self.tiles.get(name)
    }

    /// Iterate over all tiles in unspecified order
    pub fn iter(&self) -> hash_map::Values<'_, String, PaletteTile> {
        self.tiles.values()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteTile;
    type IntoIter = hash_map::Values<'a, String, PaletteTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a palette from every recognized tile file in a directory
///
/// Candidates are filtered by extension (case-insensitive); each one is
/// decoded, scaled to `x_delta` wide with proportional height, and
/// averaged, one parallel task per file. A candidate that fails to
/// decode is skipped silently; the build continues with the rest.
///
/// # Errors
///
/// Returns [`MosaicError::DirectoryAccess`] when the directory cannot
/// be listed and [`MosaicError::EmptyPalette`] when no usable tiles
/// remain after filtering and decoding.
pub fn build(
    directory: &Path,
    x_delta: u32,
    progress: Option<&ProgressManager>,
) -> Result<Palette> {
    let candidates = collect_candidates(directory)?;

    let bar = progress.map(|pm| pm.phase_bar("Scanning tiles", candidates.len() as u64));

    let tiles: HashMap<String, PaletteTile> = candidates
        .par_iter()
        .filter_map(|path| {
            let tile = process_candidate(path, x_delta);
            if let Some(ref bar) = bar {
                bar.inc(1);
            }
            tile.map(|processed| (processed.name.clone(), processed))
        })
        .collect();

    if let Some(bar) = bar {
        bar.finish();
    }

    if tiles.is_empty() {
        return Err(MosaicError::EmptyPalette {
            directory: directory.to_path_buf(),
        });
    }

    Ok(Palette { tiles })
}

fn collect_candidates(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory).map_err(|e| MosaicError::DirectoryAccess {
        path: directory.to_path_buf(),
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::DirectoryAccess {
                path: directory.to_path_buf(),
                source: e,
            })?
            .path();
        if is_tile_candidate(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    Ok(candidates)
}

fn is_tile_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

// A failed decode is not an error for the whole build; the candidate
// is dropped and its siblings keep going.
fn process_candidate(path: &Path, x_delta: u32) -> Option<PaletteTile> {
    let name = path.file_name()?.to_str()?.to_string();
    let decoded = image::open(path).ok()?;
    let scaled = scale_to_cell_width(&decoded, x_delta);
    let full_bounds = Region::new(0, 0, scaled.width(), scaled.height());
    let average = region_average(&scaled, &full_bounds).ok()?;

    Some(PaletteTile {
        name,
        image: scaled,
        average,
    })
}

// Width is pinned to the cell size; height follows the aspect ratio
// and never collapses below one pixel.
fn scale_to_cell_width(decoded: &DynamicImage, x_delta: u32) -> RgbImage {
    let (width, height) = decoded.dimensions();
    let target_height =
        ((u64::from(height) * u64::from(x_delta)) / u64::from(width.max(1))).max(1) as u32;

    decoded
        .resize_exact(x_delta, target_height, FilterType::Lanczos3)
        .to_rgb8()
}
