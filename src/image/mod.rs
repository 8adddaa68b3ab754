pub mod io;
pub mod rgb;

pub use io::{load_rgb_image, save_rgb_image};
pub use rgb::{ImageRgb8, Rgb8};
