//! Source decoding, JPEG encoding, and mosaic export

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;

/// Load and decode the source image, discarding any alpha channel
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when the file cannot be opened
/// or is not a decodable image.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(decoded.to_rgb8())
}

/// Encode an image as JPEG bytes at the fixed mosaic quality
///
/// # Errors
///
/// Returns [`MosaicError::ImageEncode`] when the encoder fails.
pub fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);

    image
        .write_with_encoder(encoder)
        .map_err(|e| MosaicError::ImageEncode { source: e })?;

    Ok(buffer)
}

/// Write encoded mosaic bytes to disk, creating parent directories
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the parent directory
/// cannot be created or the file cannot be written.
pub fn export_mosaic(bytes: &[u8], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    std::fs::write(output_path, bytes).map_err(|e| MosaicError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
