//! Boundary I/O for RGB rasters.
//!
//! - `load_rgb_image`: decode a PNG/JPEG/etc. into an owned [`ImageRgb8`].
//! - `save_rgb_image`: encode an [`ImageRgb8`] back to disk.
//!
//! Container formats, row padding and alignment are the `image` crate's
//! problem; the filters only ever see logical pixels. Saving preserves
//! exact dimensions and per-pixel values.
use super::{ImageRgb8, Rgb8};
use image::RgbImage;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgb8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img
        .into_raw()
        .chunks_exact(3)
        .map(|c| Rgb8::new(c[0], c[1], c[2]))
        .collect();
    ImageRgb8::from_raw(width, height, pixels)
        .map_err(|e| format!("Decoded {} is malformed: {e}", path.display()))
}

/// Save an RGB raster to `path`, creating parent directories.
pub fn save_rgb_image(img: &ImageRgb8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut raw = Vec::with_capacity(img.w * img.h * 3);
    for row in img.rows() {
        for px in row {
            raw.extend_from_slice(&px.channels());
        }
    }
    let out = RgbImage::from_raw(img.w as u32, img.h as u32, raw)
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
