//! Tile palette construction and nearest-color lookup
//!
//! A palette is built fresh for every mosaic request from a directory
//! of candidate tile images and discarded after compositing.

/// Concurrent palette construction from a tile directory
pub mod builder;
/// Nearest-color tile search
pub mod matcher;

pub use builder::{Palette, PaletteTile};
