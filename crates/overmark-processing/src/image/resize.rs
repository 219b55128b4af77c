//! Width-fit resizing with quality-aware filter selection.

use image::{DynamicImage, GenericImageView};

/// Select appropriate filter type based on resize ratio
pub fn select_filter(
    orig_width: u32,
    orig_height: u32,
    new_width: u32,
    new_height: u32,
) -> image::imageops::FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        image::imageops::FilterType::Triangle
    } else if max_ratio > 1.5 {
        image::imageops::FilterType::CatmullRom
    } else {
        image::imageops::FilterType::Lanczos3
    }
}

/// Fit an image inside a target width, preserving aspect ratio and never
/// enlarging. If the image is already at or below `target_width`, it is
/// returned unchanged.
pub fn fit_width(img: &DynamicImage, target_width: u32) -> DynamicImage {
    let (orig_width, orig_height) = img.dimensions();
    let target_width = target_width.max(1);

    if target_width >= orig_width {
        return img.clone();
    }

    let aspect_ratio = orig_height as f32 / orig_width as f32;
    let new_height = ((target_width as f32 * aspect_ratio).round() as u32).max(1);

    let filter = select_filter(orig_width, orig_height, target_width, new_height);
    img.resize_exact(target_width, new_height, filter)
}
