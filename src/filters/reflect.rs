//! Horizontal mirror via in-place column swaps.
use crate::image::ImageRgb8;
use log::debug;

/// Mirror the image left-to-right: the pixel at (x, y) moves to
/// (w - 1 - x, y).
///
/// Each row is reversed by swapping column `x` with column `w - 1 - x`
/// for `x` in `[0, w / 2)`; with odd width the middle column maps to
/// itself and is left alone. No auxiliary buffer. Applying reflect twice
/// restores the original image.
pub fn reflect(img: &mut ImageRgb8) {
    if img.w == 0 || img.h == 0 {
        return;
    }
    debug!("reflect {}x{}", img.w, img.h);
    let w = img.w;
    for row in img.rows_mut() {
        for x in 0..w / 2 {
            row.swap(x, w - 1 - x);
        }
    }
}
