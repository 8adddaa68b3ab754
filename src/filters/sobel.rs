//! Sobel edge detection over a zero-padded frame.
//!
//! Convolves the fixed 3x3 Sobel kernel pair per channel, treating
//! out-of-bounds neighbors as channel value 0. Zero padding, not border
//! replication: the tap count stays 9 everywhere, unlike
//! [`blur`](crate::filters::blur), which drops out-of-bounds taps from
//! its divisor. The output channel is the gradient magnitude
//! `round(sqrt(gx^2 + gy^2))`, clamped to 255.
//!
//! Same scratch-then-swap discipline as blur: the convolution reads only
//! pre-filter values.
use crate::image::{ImageRgb8, Rgb8};
use log::debug;
use rayon::prelude::*;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Replace the image with its per-channel Sobel gradient magnitude.
///
/// 18 multiply-adds per pixel per channel; O(W·H) time, one extra
/// full-size buffer. A degenerate image is a no-op.
pub fn sobel_edges(img: &mut ImageRgb8) {
    if img.w == 0 || img.h == 0 {
        return;
    }
    debug!("sobel_edges {}x{}", img.w, img.h);
    let mut scratch = ImageRgb8::new(img.w, img.h);
    let src = &*img;
    scratch
        .data
        .par_chunks_mut(src.stride)
        .enumerate()
        .for_each(|(y, out_row)| sobel_row(src, y, out_row));
    img.swap_data(&mut scratch);
}

fn sobel_row(src: &ImageRgb8, y: usize, out_row: &mut [Rgb8]) {
    let w = src.w as isize;
    let h = src.h as isize;
    for (x, out) in out_row.iter_mut().enumerate() {
        let mut gx = [0.0f32; 3];
        let mut gy = [0.0f32; 3];
        for (ky, (kx_row, ky_row)) in SOBEL_KERNEL_X.iter().zip(&SOBEL_KERNEL_Y).enumerate() {
            let yy = y as isize + ky as isize - 1;
            if yy < 0 || yy >= h {
                // zero-padded tap, contributes nothing
                continue;
            }
            let row = src.row(yy as usize);
            for kx in 0..3 {
                let xx = x as isize + kx as isize - 1;
                if xx < 0 || xx >= w {
                    continue;
                }
                let c = row[xx as usize].channels();
                for ch in 0..3 {
                    gx[ch] += kx_row[kx] * c[ch] as f32;
                    gy[ch] += ky_row[kx] * c[ch] as f32;
                }
            }
        }
        let mut mag = [0u8; 3];
        for ch in 0..3 {
            let m = (gx[ch] * gx[ch] + gy[ch] * gy[ch]).sqrt().round();
            mag[ch] = m.min(255.0) as u8;
        }
        *out = Rgb8::from(mag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_3x3_matches_zero_padding_table() {
        let mut img = ImageRgb8::from_raw(3, 3, vec![Rgb8::splat(10); 9]).unwrap();
        sobel_edges(&mut img);
        // Constant field: interior gradient is zero; the border ring sees
        // the zero padding. Corners: |gx| = |gy| = 3v -> sqrt(1800) = 42.
        // Edge centers: one component 4v, the other 0 -> 40.
        let expected = [
            [42u8, 40, 42], //
            [40, 0, 40],
            [42, 40, 42],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                assert_eq!(img.get(x, y), Rgb8::splat(v), "at ({x},{y})");
            }
        }
    }

    #[test]
    fn uniform_interior_is_zero() {
        let mut img = ImageRgb8::from_raw(5, 5, vec![Rgb8::new(30, 99, 180); 25]).unwrap();
        sobel_edges(&mut img);
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(img.get(x, y), Rgb8::BLACK, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn hand_computed_3x3_ramp() {
        let data = (1..=9).map(|v| Rgb8::splat(v * 10)).collect();
        let mut img = ImageRgb8::from_raw(3, 3, data).unwrap();
        sobel_edges(&mut img);
        // Corner (0,0): gx = 2*20 + 1*50 = 90, gy = 2*40 + 1*50 = 130,
        // sqrt(25000) = 158.1 -> 158.
        assert_eq!(img.get(0, 0), Rgb8::splat(158));
        // Top edge (1,0): gx = 60, gy = 200, sqrt(43600) = 208.8 -> 209.
        assert_eq!(img.get(1, 0), Rgb8::splat(209));
        // Center (1,1): gx = 80, gy = 240, sqrt(64000) = 253.0 -> 253.
        assert_eq!(img.get(1, 1), Rgb8::splat(253));
    }

    #[test]
    fn magnitude_clamps_at_255() {
        let mut img = ImageRgb8::from_raw(3, 3, vec![Rgb8::WHITE; 9]).unwrap();
        sobel_edges(&mut img);
        // Corner magnitude is sqrt(2) * 765 ~ 1082, far past the clamp.
        assert_eq!(img.get(0, 0), Rgb8::WHITE);
        assert_eq!(img.get(1, 1), Rgb8::BLACK);
    }

    #[test]
    fn channels_are_independent() {
        // Red varies left to right, blue is constant: only red responds
        // at the center.
        let data = vec![
            Rgb8::new(0, 0, 50),
            Rgb8::new(100, 0, 50),
            Rgb8::new(200, 0, 50),
            Rgb8::new(0, 0, 50),
            Rgb8::new(100, 0, 50),
            Rgb8::new(200, 0, 50),
            Rgb8::new(0, 0, 50),
            Rgb8::new(100, 0, 50),
            Rgb8::new(200, 0, 50),
        ];
        let mut img = ImageRgb8::from_raw(3, 3, data).unwrap();
        sobel_edges(&mut img);
        let center = img.get(1, 1);
        // Red: gx = 4*200 - 4*0 = 800 -> clamped; gy = 0.
        assert_eq!(center.r, 255);
        assert_eq!(center.g, 0);
        assert_eq!(center.b, 0);
    }

    #[test]
    fn degenerate_image_is_noop() {
        for (w, h) in [(0, 0), (0, 2), (2, 0)] {
            let mut img = ImageRgb8::new(w, h);
            sobel_edges(&mut img);
            assert_eq!(img, ImageRgb8::new(w, h));
        }
    }
}
