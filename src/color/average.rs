//! Mean channel intensity over pixel regions
//!
//! Channel values stay in raw 8-bit units (0-255) rather than being
//! renormalized, so distance comparisons between averages are exact.

use crate::io::error::{MosaicError, Result};
use crate::spatial::Region;
use image::RgbImage;

/// Mean per-channel intensity over a pixel region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVector {
    /// Mean red intensity
    pub r: f64,
    /// Mean green intensity
    pub g: f64,
    /// Mean blue intensity
    pub b: f64,
}

impl ColorVector {
    /// Create a color vector from mean channel intensities
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance to another color vector
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Arithmetic mean of each channel over all pixels of a region
///
/// Pure function, safe to call concurrently on distinct or overlapping
/// regions of the same image. Pixels outside the image bounds are
/// ignored; the mean is taken over the pixels actually read.
///
/// # Errors
///
/// Returns [`MosaicError::DegenerateRegion`] when the region covers no
/// pixels, either by construction or because it lies entirely outside
/// the image.
pub fn region_average(image: &RgbImage, region: &Region) -> Result<ColorVector> {
    if region.is_degenerate() {
        return Err(degenerate(region));
    }

    let mut r_sum = 0.0_f64;
    let mut g_sum = 0.0_f64;
    let mut b_sum = 0.0_f64;
    let mut pixel_count = 0_u64;

    for y in region.y_min..region.y_max {
        for x in region.x_min..region.x_max {
            if let Some(pixel) = image.get_pixel_checked(x, y) {
                r_sum += f64::from(pixel.0[0]);
                g_sum += f64::from(pixel.0[1]);
                b_sum += f64::from(pixel.0[2]);
                pixel_count += 1;
            }
        }
    }

    if pixel_count == 0 {
        return Err(degenerate(region));
    }

    let count = pixel_count as f64;
    Ok(ColorVector::new(
        r_sum / count,
        g_sum / count,
        b_sum / count,
    ))
}

const fn degenerate(region: &Region) -> MosaicError {
    MosaicError::DegenerateRegion {
        x_min: region.x_min,
        y_min: region.y_min,
        x_max: region.x_max,
        y_max: region.y_max,
    }
}
