//! Sine tone synthesis.
//!
//! Produces the 16-bit samples for one [`Tone`]. The phase restarts at zero
//! for every tone, so consecutive pixels are not phase-continuous.

use std::f64::consts::TAU;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::types::Tone;

/// How synthesized values outside the 16-bit range are narrowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Saturate to `i16::MIN..=i16::MAX`.
    #[default]
    Clamp,

    /// Keep the low 16 bits of the rounded value, so loud tones wrap
    /// around. Reproduces the raw integer narrowing of older renders.
    Wrap,
}

impl OverflowPolicy {
    /// Returns the string representation of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Clamp => "clamp",
            OverflowPolicy::Wrap => "wrap",
        }
    }

    /// Parses a policy from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clamp" | "saturate" => Some(OverflowPolicy::Clamp),
            "wrap" => Some(OverflowPolicy::Wrap),
            _ => None,
        }
    }

    /// Narrows a rounded sample value to 16 bits.
    ///
    /// Returns the narrowed sample and whether the input was out of range.
    pub fn narrow(&self, value: f64) -> (i16, bool) {
        let in_range = (f64::from(i16::MIN)..=f64::from(i16::MAX)).contains(&value);
        if in_range {
            return (value as i16, false);
        }

        let narrowed = match self {
            OverflowPolicy::Clamp => value as i16,
            OverflowPolicy::Wrap => value as i64 as i16,
        };
        (narrowed, true)
    }
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lazy sample sequence for one tone.
///
/// Yields `floor(sample_rate * duration)` samples. A clone continues from
/// the same position; call [`ToneSamples::new`] again to start over.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    amplitude: f64,
    phase_step: f64,
    policy: OverflowPolicy,
    index: usize,
    len: usize,
    overflowed: usize,
}

impl ToneSamples {
    /// Creates the sample sequence for `tone` at `sample_rate`.
    pub fn new(tone: &Tone, sample_rate: u32, policy: OverflowPolicy) -> Self {
        Self {
            amplitude: tone.amplitude,
            phase_step: TAU * tone.frequency / f64::from(sample_rate),
            policy,
            index: 0,
            len: tone.sample_count(sample_rate),
            overflowed: 0,
        }
    }

    /// Number of samples produced so far that did not fit in 16 bits.
    pub fn overflowed(&self) -> usize {
        self.overflowed
    }

    /// Unnarrowed value of sample `n`.
    fn raw(&self, n: usize) -> f64 {
        (self.amplitude * (self.phase_step * n as f64).sin()).round()
    }
}

impl Iterator for ToneSamples {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.index >= self.len {
            return None;
        }

        let (sample, overflowed) = self.policy.narrow(self.raw(self.index));
        if overflowed {
            self.overflowed += 1;
        }
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples {}

impl FusedIterator for ToneSamples {}
