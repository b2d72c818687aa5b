//! pixel-noise: renders images as audio.
//!
//! Every pixel becomes a short sine tone. The blue channel picks a note
//! from a twelve-tone scale, green picks the octave, red sets the length
//! and the overall brightness sets the volume. Tones are written back to
//! back, in row-major order, into a 16-bit stereo 44.1 kHz WAV file.
//!
//! # Modules
//!
//! - [`types`]: Core data types (Pixel, Tone, ScaleTable)
//! - [`synthesis`]: Pixel to tone mapping and sine sample generation
//! - [`audio`]: Streaming WAV container writer
//! - [`scanner`]: Image loading and the render pipeline
//! - [`config`]: Runtime configuration (RenderConfig)
//! - [`error`]: Error types and codes (PixelNoiseError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use pixel_noise::{render_image, RenderConfig};
//!
//! let config = RenderConfig {
//!     input: "sunset.png".into(),
//!     output: "sunset.wav".into(),
//!     ..Default::default()
//! };
//!
//! let stats = render_image(&config, |row, total| {
//!     eprintln!("{} out of {}", row, total);
//! })?;
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
pub mod synthesis;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::RenderConfig;
pub use error::{ErrorCode, PixelNoiseError, Result};
pub use scanner::{render_image, ImageScanner, RenderStats};
pub use synthesis::{OverflowPolicy, PixelMapper};
pub use types::{Pixel, ScaleTable, Tone};
