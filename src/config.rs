//! Render configuration module.
//!
//! Contains the settings for one render: where the image comes from, where
//! the WAV goes, and how loud tones are.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::synthesis::{OverflowPolicy, PixelMapper, DEFAULT_GAIN};
use crate::types::ScaleTable;

/// Default source image path.
pub const DEFAULT_INPUT: &str = "test.png";

/// Default output WAV path.
pub const DEFAULT_OUTPUT: &str = "example.wav";

/// Runtime configuration for a render.
///
/// Built from defaults, then environment variables, then command-line
/// flags, each layer overriding the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Path of the image to read.
    pub input: PathBuf,

    /// Path of the WAV file to create or overwrite.
    pub output: PathBuf,

    /// Gain applied to pixel luma to get the tone amplitude.
    pub gain: f64,

    /// How samples outside the 16-bit range are narrowed.
    pub overflow: OverflowPolicy,

    /// Whether per-row progress is printed.
    pub progress: bool,
}

impl RenderConfig {
    /// Creates a new RenderConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a RenderConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `PIXEL_NOISE_INPUT` - Source image path
    /// - `PIXEL_NOISE_OUTPUT` - Output WAV path
    /// - `PIXEL_NOISE_GAIN` - Amplitude gain
    /// - `PIXEL_NOISE_OVERFLOW` - Narrowing policy (clamp, wrap)
    ///
    /// Falls back to defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PIXEL_NOISE_INPUT") {
            config.input = PathBuf::from(path);
        }

        if let Some(path) = lookup("PIXEL_NOISE_OUTPUT") {
            config.output = PathBuf::from(path);
        }

        if let Some(gain_str) = lookup("PIXEL_NOISE_GAIN") {
            match gain_str.parse::<f64>() {
                Ok(gain) if gain.is_finite() && gain >= 0.0 => config.gain = gain,
                _ => log::warn!("Ignoring PIXEL_NOISE_GAIN={:?}", gain_str),
            }
        }

        if let Some(policy_str) = lookup("PIXEL_NOISE_OVERFLOW") {
            match OverflowPolicy::parse(&policy_str) {
                Some(policy) => config.overflow = policy,
                None => log::warn!("Ignoring PIXEL_NOISE_OVERFLOW={:?}", policy_str),
            }
        }

        config
    }

    /// Returns the pixel mapper for this configuration.
    pub fn mapper(&self) -> PixelMapper {
        PixelMapper::new(ScaleTable::chromatic(), self.gain)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if !self.gain.is_finite() {
            return Some(format!("gain must be finite, got {}", self.gain));
        }

        if self.gain < 0.0 {
            return Some(format!("gain must be >= 0, got {}", self.gain));
        }

        if self.input.as_os_str().is_empty() {
            return Some("input path is empty".to_string());
        }

        if self.output.as_os_str().is_empty() {
            return Some("output path is empty".to_string());
        }

        if same_file(&self.input, &self.output) {
            return Some(format!(
                "input and output are the same file: {}",
                self.input.display()
            ));
        }

        None
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            gain: DEFAULT_GAIN,
            overflow: OverflowPolicy::Clamp,
            progress: true,
        }
    }
}

/// Returns true when both paths name the same file.
///
/// Paths that do not exist yet are compared as written.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = RenderConfig::new();
        assert_eq!(config.input, PathBuf::from("test.png"));
        assert_eq!(config.output, PathBuf::from("example.wav"));
        assert_eq!(config.gain, 50.0);
        assert_eq!(config.overflow, OverflowPolicy::Clamp);
        assert!(config.progress);
        assert!(config.validate().is_none());
    }

    #[test]
    fn env_overrides() {
        let config = RenderConfig::from_lookup(lookup_from(&[
            ("PIXEL_NOISE_INPUT", "in.png"),
            ("PIXEL_NOISE_OUTPUT", "out.wav"),
            ("PIXEL_NOISE_GAIN", "12.5"),
            ("PIXEL_NOISE_OVERFLOW", "wrap"),
        ]));
        assert_eq!(config.input, PathBuf::from("in.png"));
        assert_eq!(config.output, PathBuf::from("out.wav"));
        assert_eq!(config.gain, 12.5);
        assert_eq!(config.overflow, OverflowPolicy::Wrap);
    }

    #[test]
    fn env_ignores_bad_values() {
        let config = RenderConfig::from_lookup(lookup_from(&[
            ("PIXEL_NOISE_GAIN", "loud"),
            ("PIXEL_NOISE_OVERFLOW", "explode"),
        ]));
        assert_eq!(config.gain, DEFAULT_GAIN);
        assert_eq!(config.overflow, OverflowPolicy::Clamp);

        let negative = RenderConfig::from_lookup(lookup_from(&[("PIXEL_NOISE_GAIN", "-3")]));
        assert_eq!(negative.gain, DEFAULT_GAIN);
    }

    #[test]
    fn validation() {
        let mut config = RenderConfig::new();

        config.gain = f64::INFINITY;
        assert!(config.validate().is_some());

        config.gain = -1.0;
        assert!(config.validate().is_some());

        config.gain = 0.0;
        assert!(config.validate().is_none());

        config.output = config.input.clone();
        assert!(config.validate().unwrap().contains("same file"));
    }

    #[test]
    fn validation_catches_same_file_spelled_differently() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"png").unwrap();

        let config = RenderConfig {
            input: dir.path().join("a.png"),
            output: dir.path().join(".").join("a.png"),
            ..RenderConfig::default()
        };
        assert_ne!(config.input, config.output);
        assert!(config.validate().unwrap().contains("same file"));

        let distinct = RenderConfig {
            output: dir.path().join("a.wav"),
            ..config
        };
        assert!(distinct.validate().is_none());
    }

    #[test]
    fn mapper_uses_gain() {
        let config = RenderConfig {
            gain: 7.0,
            ..RenderConfig::default()
        };
        assert_eq!(config.mapper().gain(), 7.0);
    }

    #[test]
    fn serializes_overflow_lowercase() {
        let json = serde_json::to_string(&RenderConfig::default()).unwrap();
        assert!(json.contains("\"overflow\":\"clamp\""));
    }
}
