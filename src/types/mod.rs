//! Core types for pixel-noise.
//!
//! This module re-exports the data types shared by the mapper, synthesizer
//! and renderer:
//! - [`Pixel`]: An RGB triple read from the source image
//! - [`Tone`]: Frequency, amplitude and duration of one note
//! - [`ScaleTable`]: The twelve base frequencies notes are picked from

mod pixel;
mod scale;
mod tone;

pub use pixel::Pixel;
pub use scale::{ScaleTable, CHROMATIC_C2, SCALE_LEN};
pub use tone::Tone;
