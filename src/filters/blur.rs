//! 3x3 box blur with in-bounds neighborhood averaging.
//!
//! Each output pixel is the per-channel mean of every in-bounds pixel in
//! the 3x3 window centered on it: 4 contributors at corners, 6 on
//! non-corner edges, 9 in the interior. Out-of-bounds taps are excluded
//! from both the sum and the divisor. This differs from the zero-padded
//! convolution in [`sobel`](crate::filters::sobel), which keeps a fixed
//! tap count; the two border policies are intentionally different.
//!
//! Every output is computed from the pre-blur image into a scratch buffer
//! which then replaces the image's storage, so a blurred pixel never reads
//! an already-blurred neighbor.
use crate::image::{ImageRgb8, Rgb8};
use log::debug;
use rayon::prelude::*;

/// Blur the image in place with a 3x3 box average.
///
/// Means are computed in `f32` and rounded half-away-from-zero; averages
/// of in-range channels stay in range, so no clamping is needed.
/// O(W·H) time, one extra full-size buffer. A degenerate image is a
/// no-op.
pub fn box_blur(img: &mut ImageRgb8) {
    if img.w == 0 || img.h == 0 {
        return;
    }
    debug!("box_blur {}x{}", img.w, img.h);
    let mut scratch = ImageRgb8::new(img.w, img.h);
    let src = &*img;
    scratch
        .data
        .par_chunks_mut(src.stride)
        .enumerate()
        .for_each(|(y, out_row)| blur_row(src, y, out_row));
    img.swap_data(&mut scratch);
}

fn blur_row(src: &ImageRgb8, y: usize, out_row: &mut [Rgb8]) {
    let y_lo = y.saturating_sub(1);
    let y_hi = (y + 2).min(src.h);
    for (x, out) in out_row.iter_mut().enumerate() {
        let x_lo = x.saturating_sub(1);
        let x_hi = (x + 2).min(src.w);
        let mut sum = [0.0f32; 3];
        let mut count = 0.0f32;
        for yy in y_lo..y_hi {
            for px in &src.row(yy)[x_lo..x_hi] {
                let c = px.channels();
                sum[0] += c[0] as f32;
                sum[1] += c[1] as f32;
                sum[2] += c[2] as f32;
                count += 1.0;
            }
        }
        *out = Rgb8::new(
            (sum[0] / count).round() as u8,
            (sum[1] / count).round() as u8,
            (sum[2] / count).round() as u8,
        );
    }
}
