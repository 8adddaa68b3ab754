#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod filters;
pub mod image;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::FilterError;
pub use crate::filters::{box_blur, grayscale, reflect, sobel_edges, FilterKind};
pub use crate::image::{ImageRgb8, Rgb8};

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_filter::prelude::*;
///
/// let mut img = ImageRgb8::from_raw(2, 2, vec![Rgb8::WHITE; 4]).unwrap();
/// box_blur(&mut img);
/// assert_eq!(img.get(0, 0), Rgb8::WHITE);
/// ```
pub mod prelude {
    pub use crate::filters::{box_blur, grayscale, reflect, sobel_edges, FilterKind};
    pub use crate::image::{ImageRgb8, Rgb8};
}
