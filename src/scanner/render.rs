//! Render pipeline from image pixels to a WAV file.
//!
//! Drives every pixel through the mapper, the synthesizer and the container
//! writer in row-major order, reporting progress after each row.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use serde::Serialize;

use crate::audio::wav::{samples_to_duration, PcmWavWriter, BLOCK_ALIGN, HEADER_LEN, SAMPLE_RATE};
use crate::config::RenderConfig;
use crate::error::{PixelNoiseError, Result};
use crate::synthesis::{OverflowPolicy, PixelMapper, ToneSamples};

use super::source::ImageScanner;

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RenderStats {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels (rows scanned).
    pub rows: u32,
    /// Number of pixels turned into tones.
    pub pixels: u64,
    /// Frames written (one sample per channel).
    pub frames: u64,
    /// Bytes in the data chunk.
    pub data_bytes: u64,
    /// Samples that did not fit in 16 bits and were narrowed by policy.
    pub overflowed_samples: u64,
    /// Length of the rendered audio in seconds.
    pub duration_sec: f64,
}

impl RenderStats {
    /// Total size of the written file in bytes.
    pub fn file_bytes(&self) -> u64 {
        HEADER_LEN + self.data_bytes
    }
}

/// Renders a scanned image into any seekable sink.
///
/// `on_row` is called after each row with the 1-based row number and the
/// total number of rows. Returns the finalized sink with the statistics.
pub fn render_to_writer<W, F>(
    scanner: &ImageScanner,
    mapper: &PixelMapper,
    policy: OverflowPolicy,
    sink: W,
    mut on_row: F,
) -> Result<(W, RenderStats)>
where
    W: Write + Seek,
    F: FnMut(u32, u32),
{
    let total_rows = scanner.height();
    let mut writer = PcmWavWriter::new(sink)?;
    let mut stats = RenderStats {
        width: scanner.width(),
        rows: total_rows,
        ..RenderStats::default()
    };

    for (row_index, row) in scanner.rows().enumerate() {
        for pixel in row {
            let tone = mapper.map(pixel);
            let mut samples = ToneSamples::new(&tone, SAMPLE_RATE, policy);
            writer.write_samples(samples.by_ref())?;
            stats.overflowed_samples += samples.overflowed() as u64;
            stats.pixels += 1;
        }

        let row_number = row_index as u32 + 1;
        log::debug!(
            "Rendered row {}/{} ({} frames so far)",
            row_number,
            total_rows,
            writer.frames()
        );
        on_row(row_number, total_rows);
    }

    stats.frames = writer.frames();
    stats.data_bytes = writer.data_len();
    stats.duration_sec = samples_to_duration(stats.frames as usize, SAMPLE_RATE);

    let sink = writer.finalize()?;
    debug_assert_eq!(stats.data_bytes, stats.frames * u64::from(BLOCK_ALIGN));
    Ok((sink, stats))
}

/// Renders the configured input image to the configured output file.
///
/// The image is decoded before the output file is created, so a load
/// failure never leaves a file behind. A failure while writing removes the
/// partial output.
pub fn render_image<F>(config: &RenderConfig, on_row: F) -> Result<RenderStats>
where
    F: FnMut(u32, u32),
{
    if let Some(reason) = config.validate() {
        return Err(PixelNoiseError::invalid_config(reason));
    }

    let scanner = ImageScanner::open(&config.input)?;
    let mapper = config.mapper();

    let file = File::create(&config.output).map_err(|e| {
        PixelNoiseError::write(
            format!("Failed to create {}", config.output.display()),
            e,
        )
    })?;

    match render_to_writer(&scanner, &mapper, config.overflow, BufWriter::new(file), on_row) {
        Ok((_, stats)) => {
            log::info!(
                "Wrote {} ({} pixels, {} frames, {:.2}s)",
                config.output.display(),
                stats.pixels,
                stats.frames,
                stats.duration_sec
            );
            if stats.overflowed_samples > 0 {
                log::warn!(
                    "{} samples exceeded the 16-bit range and were narrowed with policy '{}'",
                    stats.overflowed_samples,
                    config.overflow
                );
            }
            Ok(stats)
        }
        Err(e) => {
            remove_partial_output(&config.output);
            Err(e)
        }
    }
}

fn remove_partial_output(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => log::info!("Removed partial output {}", path.display()),
        Err(e) => log::warn!(
            "Failed to remove partial output {}: {}",
            path.display(),
            e
        ),
    }
}
