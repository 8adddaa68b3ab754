//! Pointwise grayscale conversion.
use crate::image::{ImageRgb8, Rgb8};
use log::debug;

/// Convert to grayscale in place: every pixel becomes
/// `round((r + g + b) / 3.0)` on all three channels.
///
/// Rounding is half-away-from-zero (`f32::round`). One pass, no neighbor
/// access; idempotent. A degenerate image is a no-op.
pub fn grayscale(img: &mut ImageRgb8) {
    if img.w == 0 || img.h == 0 {
        return;
    }
    debug!("grayscale {}x{}", img.w, img.h);
    for px in img.as_mut_slice() {
        let mean = (px.r as f32 + px.g as f32 + px.b as f32) / 3.0;
        *px = Rgb8::splat(mean.round() as u8);
    }
}
