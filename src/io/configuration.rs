//! Runtime defaults and encoding constants

// Tile discovery settings
/// Recognized tile file extensions, matched case-insensitively
pub const TILE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

// Output settings
/// JPEG quality used when encoding the finished mosaic
pub const JPEG_QUALITY: u8 = 80;
/// Suffix added to derived output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

// Default values for configurable parameters
/// Default number of grid divisions along each axis
pub const DEFAULT_DIVISIONS: u32 = 32;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
