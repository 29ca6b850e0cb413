//! Aspect-preserving resampling of the dithered photo onto the card.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Height that keeps the source aspect ratio at `target_width`.
///
/// Rounded to the nearest pixel and never less than 1. Returns `None` when
/// the result does not fit in a `u32`.
pub fn scaled_height(source_width: u32, source_height: u32, target_width: u32) -> Option<u32> {
    let ratio = f64::from(target_width) / f64::from(source_width);
    let height = (ratio * f64::from(source_height)).round();
    if height > f64::from(u32::MAX) {
        return None;
    }
    Some((height as u32).max(1))
}

/// Resample an image to exactly `width x height`.
///
/// Returns a copy unchanged if it already matches the target size.
pub fn resize_exact(img: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Photo already at target size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        ?filter,
        "Resampling photo"
    );

    imageops::resize(img, width, height, filter)
}
