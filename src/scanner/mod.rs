//! Image scanning module.
//!
//! Loads the source image and renders it pixel by pixel into a WAV file.

pub mod render;
pub mod source;

// Re-export commonly used items
pub use render::{render_image, render_to_writer, RenderStats};
pub use source::ImageScanner;
