//! Tone synthesis module.
//!
//! Maps pixels to tones and tones to 16-bit samples.

pub mod mapper;
pub mod waveform;

// Re-export commonly used items
pub use mapper::{PixelMapper, DEFAULT_GAIN};
pub use waveform::{OverflowPolicy, ToneSamples};
