//! Error types for the synthesis pipeline.

use thiserror::Error;

/// Result type for synthesis and encoding operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering a waveform.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The request contains no tones.
    #[error("at least one frequency is required")]
    NoFrequencies,

    /// Invalid tone frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Target level outside the supported range.
    #[error("invalid target level: {level_db} dBFS (maximum is {max_db} dBFS)")]
    InvalidLevel {
        /// The requested level.
        level_db: f64,
        /// Highest accepted level.
        max_db: f64,
    },

    /// Bit depth not supported by the sample format.
    #[error("{bits}-bit {format} PCM is invalid/unsupported")]
    UnsupportedEncoding {
        /// Requested bit depth.
        bits: u16,
        /// Requested sample format name.
        format: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A sample buffer could not be allocated.
    #[error("unable to allocate a buffer of {samples} samples")]
    Allocation {
        /// Requested number of elements.
        samples: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::NoFrequencies => "WAVGEN_001",
            SynthError::InvalidFrequency { .. } => "WAVGEN_002",
            SynthError::InvalidSampleRate { .. } => "WAVGEN_003",
            SynthError::InvalidDuration { .. } => "WAVGEN_004",
            SynthError::InvalidLevel { .. } => "WAVGEN_005",
            SynthError::UnsupportedEncoding { .. } => "WAVGEN_006",
            SynthError::InvalidParameter { .. } => "WAVGEN_007",
            SynthError::Allocation { .. } => "WAVGEN_008",
            SynthError::Io(_) => "WAVGEN_009",
        }
    }

    /// Whether the error stems from the configuration rather than from I/O
    /// or resources.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, SynthError::Allocation { .. } | SynthError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SynthError::invalid_param("wave_type", "unrecognized wave type 'noise'");
        assert!(err.to_string().contains("wave_type"));
        assert!(err.to_string().contains("noise"));
    }

    #[test]
    fn test_unsupported_encoding_message() {
        let err = SynthError::UnsupportedEncoding {
            bits: 12,
            format: "integer",
        };
        assert_eq!(err.to_string(), "12-bit integer PCM is invalid/unsupported");
        assert_eq!(err.code(), "WAVGEN_006");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_io_is_not_config_error() {
        let err = SynthError::from(std::io::Error::other("disk full"));
        assert!(!err.is_config_error());
        assert_eq!(err.code(), "WAVGEN_009");
    }
}
