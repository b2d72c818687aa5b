//! Error types for pixel-noise.
//!
//! Defines the error codes and error type used by the renderer, the
//! container writer and the command-line front end.

use std::fmt;
use std::path::Path;

/// Error codes identifying the kind of failure.
///
/// Every code is fatal for the current render. Sample overflow during
/// narrowing is not an error; it is counted in the render statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The source image could not be opened or decoded.
    /// Trigger: Missing file, unreadable file, unsupported or corrupt format.
    ImageLoadFailed,

    /// Writing or patching the output container failed.
    /// Trigger: Disk full, permission denied, output larger than 4 GiB.
    WriteFailed,

    /// The render configuration is unusable.
    /// Trigger: Non-finite or negative gain, input and output are the same file.
    InvalidConfig,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ImageLoadFailed => "IMAGE_LOAD_FAILED",
            ErrorCode::WriteFailed => "WRITE_FAILED",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ImageLoadFailed => "Source image could not be loaded",
            ErrorCode::WriteFailed => "Output WAV file could not be written",
            ErrorCode::InvalidConfig => "Render configuration is invalid",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::ImageLoadFailed => {
                "Check that the input path exists and points to a PNG, JPEG, BMP or GIF image"
            }
            ErrorCode::WriteFailed => {
                "Check that the output directory exists and is writable, \
                 and that enough disk space is available"
            }
            ErrorCode::InvalidConfig => {
                "Use a finite, non-negative gain and distinct input and output paths"
            }
        }
    }

    /// Returns the process exit status used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::InvalidConfig => 2,
            ErrorCode::ImageLoadFailed => 3,
            ErrorCode::WriteFailed => 4,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for render operations.
#[derive(Debug)]
pub struct PixelNoiseError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PixelNoiseError {
    /// Creates a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new error with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an IMAGE_LOAD_FAILED error for the given path.
    pub fn image_load(
        path: &Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::ImageLoadFailed,
            format!("Failed to load image {}: {}", path.display(), source),
            source,
        )
    }

    /// Creates a WRITE_FAILED error from an I/O failure.
    pub fn write(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::WriteFailed,
            format!("{}: {}", context.into(), source),
            source,
        )
    }

    /// Creates a WRITE_FAILED error for a container that no longer fits
    /// the 32-bit RIFF size fields.
    pub fn container_too_large(bytes: u64) -> Self {
        Self::new(
            ErrorCode::WriteFailed,
            format!(
                "Audio data too large for a WAV container: {} bytes (maximum {})",
                bytes,
                u32::MAX - 36
            ),
        )
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }

    /// Returns the process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for PixelNoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for PixelNoiseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using PixelNoiseError.
pub type Result<T> = std::result::Result<T, PixelNoiseError>;
