//! WAV container writer for rendered audio.
//!
//! Writes 16-bit stereo PCM as a RIFF/WAVE stream. Sizes are not known up
//! front, so the header goes out with zeroed size fields that
//! [`PcmWavWriter::finalize`] patches once every frame has been written.

use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{PixelNoiseError, Result};

/// Audio sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of audio channels (stereo, both carrying the same signal).
pub const CHANNELS: u16 = 2;

/// Bits per sample per channel.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per frame (one sample for each channel).
pub const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Bytes per second of audio.
pub const BYTE_RATE: u32 = SAMPLE_RATE * BLOCK_ALIGN as u32;

/// Size of the RIFF, fmt and data headers.
pub const HEADER_LEN: u64 = 44;

/// Offset of the RIFF chunk size field.
const RIFF_SIZE_OFFSET: u64 = 4;

/// Offset of the data chunk size field.
const DATA_SIZE_OFFSET: u64 = 40;

/// Largest data chunk whose RIFF size still fits in 32 bits.
pub const MAX_DATA_LEN: u64 = u32::MAX as u64 - (HEADER_LEN - 8);

/// Streaming PCM WAV writer over any seekable sink.
///
/// Every sample is written to both channels, left then right.
#[derive(Debug)]
pub struct PcmWavWriter<W: Write + Seek> {
    inner: W,
    data_len: u64,
}

impl<W: Write + Seek> PcmWavWriter<W> {
    /// Writes the header with placeholder sizes and returns the writer.
    pub fn new(mut inner: W) -> Result<Self> {
        write_header(&mut inner)
            .map_err(|e| PixelNoiseError::write("Failed to write WAV header", e))?;
        Ok(Self { inner, data_len: 0 })
    }

    /// Writes one sample to both channels.
    pub fn write_frame(&mut self, sample: i16) -> Result<()> {
        let next_len = self.data_len + u64::from(BLOCK_ALIGN);
        if next_len > MAX_DATA_LEN {
            return Err(PixelNoiseError::container_too_large(next_len));
        }

        let bytes = sample.to_le_bytes();
        let frame = [bytes[0], bytes[1], bytes[0], bytes[1]];
        self.inner
            .write_all(&frame)
            .map_err(|e| PixelNoiseError::write("Failed to write audio samples", e))?;
        self.data_len = next_len;
        Ok(())
    }

    /// Writes every sample of an iterator as a frame.
    ///
    /// Returns the number of frames written.
    pub fn write_samples<I>(&mut self, samples: I) -> Result<u64>
    where
        I: IntoIterator<Item = i16>,
    {
        let mut frames = 0;
        for sample in samples {
            self.write_frame(sample)?;
            frames += 1;
        }
        Ok(frames)
    }

    /// Bytes of sample data written so far.
    pub fn data_len(&self) -> u64 {
        self.data_len
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.data_len / u64::from(BLOCK_ALIGN)
    }

    /// Patches both size fields, flushes and returns the sink.
    pub fn finalize(mut self) -> Result<W> {
        self.patch_sizes()
            .map_err(|e| PixelNoiseError::write("Failed to patch WAV header sizes", e))?;
        Ok(self.inner)
    }

    fn patch_sizes(&mut self) -> std::io::Result<()> {
        let file_len = self.inner.seek(SeekFrom::End(0))?;
        // Both fields fit: write_frame refuses to grow data past MAX_DATA_LEN.
        let riff_size = (file_len - 8) as u32;
        let data_size = (file_len - HEADER_LEN) as u32;

        self.inner.seek(SeekFrom::Start(RIFF_SIZE_OFFSET))?;
        self.inner.write_all(&riff_size.to_le_bytes())?;
        self.inner.seek(SeekFrom::Start(DATA_SIZE_OFFSET))?;
        self.inner.write_all(&data_size.to_le_bytes())?;
        self.inner.seek(SeekFrom::End(0))?;
        self.inner.flush()
    }
}

fn write_header<W: Write>(writer: &mut W) -> std::io::Result<()> {
    // RIFF header (size patched on finalize)
    writer.write_all(b"RIFF")?;
    writer.write_all(&0u32.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&CHANNELS.to_le_bytes())?;
    writer.write_all(&SAMPLE_RATE.to_le_bytes())?;
    writer.write_all(&BYTE_RATE.to_le_bytes())?;
    writer.write_all(&BLOCK_ALIGN.to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk (size patched on finalize)
    writer.write_all(b"data")?;
    writer.write_all(&0u32.to_le_bytes())
}

/// Format and length of a WAV file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WavSummary {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample per channel.
    pub bits_per_sample: u16,
    /// Number of frames (samples per channel).
    pub frames: u32,
    /// Audio length in seconds.
    pub duration_sec: f64,
}

/// Reads the header of a WAV file and summarizes it.
///
/// Used to check a freshly rendered file with an independent parser.
pub fn inspect_wav(path: &Path) -> Result<WavSummary> {
    let reader = hound::WavReader::open(path).map_err(|e| {
        PixelNoiseError::with_source(
            crate::error::ErrorCode::WriteFailed,
            format!("Written file {} is not a readable WAV: {}", path.display(), e),
            e,
        )
    })?;

    let spec = reader.spec();
    let frames = reader.duration();
    Ok(WavSummary {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frames,
        duration_sec: samples_to_duration(frames as usize, spec.sample_rate),
    })
}

/// Calculates the duration of audio in seconds from a frame count.
pub fn samples_to_duration(frames: usize, sample_rate: u32) -> f64 {
    frames as f64 / f64::from(sample_rate)
}
