//! Parallel photomosaic generation from a directory of tile images
//!
//! The engine partitions a source image into a grid, averages each cell's
//! color concurrently, matches it against a palette built from the tile
//! directory, and composites the matched tiles into a same-size output image.

#![forbid(unsafe_code)]

/// Per-region color averaging and distance measurement
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Grid compositing and mosaic request orchestration
pub mod mosaic;
/// Tile palette construction and nearest-color lookup
pub mod palette;
/// Pixel regions and grid partitioning
pub mod spatial;

pub use io::error::{MosaicError, Result};
