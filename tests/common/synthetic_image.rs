use pixel_filter::image::{ImageRgb8, Rgb8};

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> ImageRgb8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img.set(x, y, Rgb8::splat(val));
        }
    }
    img
}

/// Fills a grid with distinct per-pixel colors so positional mixups show up.
pub fn color_ramp_rgb(width: usize, height: usize) -> ImageRgb8 {
    let data = (0..width * height)
        .map(|i| {
            Rgb8::new(
                (i % 251) as u8,
                (i * 7 % 253) as u8,
                (i * 13 % 255) as u8,
            )
        })
        .collect();
    ImageRgb8::from_raw(width, height, data).expect("ramp buffer matches dimensions")
}
