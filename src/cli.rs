//! Command-line argument parser.
//!
//! Every flag is optional. Unset flags fall back to environment variables
//! and then to the built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::RenderConfig;
use crate::synthesis::OverflowPolicy;

/// Narrowing policy for samples outside the 16-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Saturate at the 16-bit limits
    Clamp,
    /// Keep the low 16 bits, wrapping around
    Wrap,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Clamp => OverflowPolicy::Clamp,
            OverflowArg::Wrap => OverflowPolicy::Wrap,
        }
    }
}

/// pixel-noise: play an image as a sequence of sine tones
#[derive(Parser, Debug)]
#[command(name = "pixel-noise")]
#[command(about = "Renders an image to a WAV file, one sine tone per pixel")]
#[command(version)]
pub struct Cli {
    /// Source image (PNG, JPEG, BMP or GIF) [default: test.png]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output WAV file path [default: example.wav]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Amplitude gain applied to pixel luma [default: 50]
    #[arg(short, long)]
    pub gain: Option<f64>,

    /// How samples louder than 16 bits are narrowed [default: clamp]
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowArg>,

    /// Do not print per-row progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Print render statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies the flags that were given on top of `base`.
    pub fn apply(&self, base: RenderConfig) -> RenderConfig {
        let mut config = base;

        if let Some(ref input) = self.input {
            config.input = input.clone();
        }

        if let Some(ref output) = self.output {
            config.output = output.clone();
        }

        if let Some(gain) = self.gain {
            config.gain = gain;
        }

        if let Some(overflow) = self.overflow {
            config.overflow = overflow.into();
        }

        if self.quiet {
            config.progress = false;
        }

        config
    }

    /// Builds the effective configuration from the environment and flags.
    pub fn render_config(&self) -> RenderConfig {
        self.apply(RenderConfig::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pixel-noise").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keeps_base() {
        let cli = parse(&[]);
        let config = cli.apply(RenderConfig::default());
        assert_eq!(config, RenderConfig::default());
        assert!(!cli.json);
    }

    #[test]
    fn flags_override_base() {
        let cli = parse(&[
            "-i", "photo.jpg", "-o", "photo.wav", "--gain", "20", "--overflow", "wrap", "--quiet",
        ]);
        let config = cli.apply(RenderConfig::default());
        assert_eq!(config.input, PathBuf::from("photo.jpg"));
        assert_eq!(config.output, PathBuf::from("photo.wav"));
        assert_eq!(config.gain, 20.0);
        assert_eq!(config.overflow, OverflowPolicy::Wrap);
        assert!(!config.progress);
    }

    #[test]
    fn partial_flags_keep_other_base_values() {
        let base = RenderConfig {
            gain: 3.0,
            ..RenderConfig::default()
        };
        let config = parse(&["--output", "x.wav"]).apply(base);
        assert_eq!(config.gain, 3.0);
        assert_eq!(config.output, PathBuf::from("x.wav"));
        assert_eq!(config.input, PathBuf::from("test.png"));
    }

    #[test]
    fn rejects_unknown_overflow() {
        let result = Cli::try_parse_from(["pixel-noise", "--overflow", "explode"]);
        assert!(result.is_err());
    }

    #[test]
    fn json_flag() {
        assert!(parse(&["--json"]).json);
    }

    #[test]
    fn verify_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
