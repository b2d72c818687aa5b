//! Audio output module.
//!
//! Provides the streaming WAV container writer and a reader-side check of
//! the written file.

pub mod wav;

// Re-export commonly used items
pub use wav::{inspect_wav, samples_to_duration, PcmWavWriter, WavSummary, CHANNELS, SAMPLE_RATE};
