//! Tone type describing one synthesized note.

/// A single note derived from one pixel.
///
/// Tones are ephemeral: the renderer creates one per pixel, synthesizes its
/// samples and drops it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in Hz. Always positive for mapped pixels.
    pub frequency: f64,

    /// Peak sample value before narrowing to 16 bits.
    pub amplitude: f64,

    /// Length of the note in seconds.
    pub duration: f64,
}

impl Tone {
    /// Creates a new tone.
    pub fn new(frequency: f64, amplitude: f64, duration: f64) -> Self {
        Self {
            frequency,
            amplitude,
            duration,
        }
    }

    /// Number of samples this tone occupies at the given sample rate.
    ///
    /// Partial samples are dropped (floor).
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        let count = (f64::from(sample_rate) * self.duration).floor();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_floors() {
        let tone = Tone::new(440.0, 1.0, 0.25 / 255.0);
        assert_eq!(tone.sample_count(44100), 43);
    }

    #[test]
    fn sample_count_exact_quarter_second() {
        let tone = Tone::new(440.0, 1.0, 0.25);
        assert_eq!(tone.sample_count(44100), 11025);
    }

    #[test]
    fn sample_count_degenerate_durations() {
        assert_eq!(Tone::new(440.0, 1.0, 0.0).sample_count(44100), 0);
        assert_eq!(Tone::new(440.0, 1.0, -1.0).sample_count(44100), 0);
        assert_eq!(Tone::new(440.0, 1.0, f64::NAN).sample_count(44100), 0);
    }
}
