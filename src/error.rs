use thiserror::Error;

/// Errors surfaced by the filter engine.
///
/// The filters themselves are total on any constructed [`ImageRgb8`]
/// (channel values are already bounded), so the only failure point is
/// handing the container a buffer that does not match its declared
/// dimensions.
///
/// [`ImageRgb8`]: crate::image::ImageRgb8
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid dimensions: {width}x{height} grid does not match buffer of {len} pixels")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },
}
