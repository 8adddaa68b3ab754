//! Owned RGB image in row-major layout (stride == width).
//!
//! The single unit of mutation for the filter engine. One flat buffer of
//! `w * h` pixels addressed by `y * stride + x`; heap-backed so large
//! frames never land on the stack. Provides row access and a contiguous
//! slice when `stride == width`.
use crate::error::FilterError;

/// One 8-bit RGB pixel, no alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All three channels set to the same intensity.
    pub const fn splat(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    #[inline]
    /// Channels as an array, red first. Handy for per-channel accumulation.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
        }
    }
}

/// Owned RGB raster with row-major storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgb8>,
}

impl ImageRgb8 {
    /// Construct a black image of size `w × h`. `w == 0` or `h == 0`
    /// yields a valid degenerate image.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![Rgb8::BLACK; w * h],
        }
    }

    /// Take ownership of an existing row-major buffer.
    ///
    /// Rejects a buffer whose length does not match `w * h` before any
    /// processing can touch it.
    pub fn from_raw(w: usize, h: usize, data: Vec<Rgb8>) -> Result<Self, FilterError> {
        if data.len() != w * h {
            return Err(FilterError::InvalidDimensions {
                width: w,
                height: h,
                len: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgb8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: Rgb8) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    #[inline]
    /// Borrow row `y`.
    pub fn row(&self, y: usize) -> &[Rgb8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Mutably borrow row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [Rgb8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb8]> {
        self.data.chunks_exact(self.stride.max(1)).take(self.h)
    }

    /// Iterate rows top to bottom, mutably.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Rgb8]> {
        self.data.chunks_exact_mut(self.stride.max(1)).take(self.h)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Rgb8] {
        &mut self.data
    }

    /// Replace this image's storage with `scratch`'s, leaving `scratch`
    /// holding the old pixels. Both must have identical dimensions.
    /// Ownership swap instead of an element-wise copy-back pass.
    pub(crate) fn swap_data(&mut self, scratch: &mut ImageRgb8) {
        debug_assert_eq!((self.w, self.h), (scratch.w, scratch.h));
        std::mem::swap(&mut self.data, &mut scratch.data);
    }
}
