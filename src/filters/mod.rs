//! The four raster transforms: grayscale, reflect, box blur, Sobel edges.
//!
//! Each is a pure function of the image it borrows: stateless between
//! calls, deterministic, total on any constructed [`ImageRgb8`], and a
//! no-op on degenerate (zero width or height) images. Exactly one
//! transform applies per call; they do not compose into any shared state.
//!
//! Border policies differ on purpose:
//!
//! - blur averages only in-bounds neighbors (variable divisor);
//! - edges convolves over a zero-padded frame (fixed 9-tap count).
//!
//! [`ImageRgb8`]: crate::image::ImageRgb8

pub mod blur;
pub mod grayscale;
pub mod reflect;
pub mod sobel;

pub use blur::box_blur;
pub use grayscale::grayscale;
pub use reflect::reflect;
pub use sobel::sobel_edges;

use crate::image::ImageRgb8;
use serde::Deserialize;

/// Selects exactly one transform per invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Grayscale,
    Reflect,
    Blur,
    Edges,
}

impl FilterKind {
    /// Apply the selected transform to `img`.
    pub fn apply(self, img: &mut ImageRgb8) {
        match self {
            FilterKind::Grayscale => grayscale(img),
            FilterKind::Reflect => reflect(img),
            FilterKind::Blur => box_blur(img),
            FilterKind::Edges => sobel_edges(img),
        }
    }
}
