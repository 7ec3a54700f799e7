//! Error types for the codec.

use thiserror::Error;

/// Result type for decode operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Common reporting interface for codec errors.
///
/// Codes are stable and can be used for programmatic error handling by hosts
/// that surface codec failures (the CLI puts them in its JSON output).
pub trait CodecError: std::error::Error {
    /// Stable error code like "WAV_001" or "PROC_002".
    fn code(&self) -> &'static str;

    /// Human-readable message; same as `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// Errors produced while decoding WAV bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input is shorter than the minimum the decoder can interpret.
    #[error("WAV data too small: need at least {minimum} bytes, got {actual}")]
    TooSmall {
        /// Minimum accepted length in bytes.
        minimum: usize,
        /// Actual input length in bytes.
        actual: usize,
    },

    /// The first four bytes are not "RIFF".
    #[error("invalid RIFF header")]
    InvalidRiffHeader,

    /// The RIFF form type is not "WAVE".
    #[error("invalid WAVE format tag")]
    InvalidWaveFormat,

    /// No "fmt " chunk was found.
    #[error("missing fmt chunk")]
    MissingFmtChunk,

    /// No "data" chunk was found.
    #[error("missing data chunk")]
    MissingDataChunk,

    /// Audio format tag other than 1 (integer PCM).
    #[error("unsupported audio format tag {format_code} (only PCM = 1 is supported)")]
    UnsupportedAudioFormat {
        /// Format tag read from the fmt chunk.
        format_code: u16,
    },

    /// Bit depth the decoder cannot interpret.
    #[error("unsupported bits per sample: {bits}")]
    UnsupportedBitsPerSample {
        /// Bit depth read from the fmt chunk.
        bits: u16,
    },

    /// A chunk is truncated or otherwise malformed.
    #[error("invalid chunk: {message}")]
    InvalidChunk {
        /// Description of the problem.
        message: String,
    },
}

impl FormatError {
    /// Creates an invalid chunk error.
    pub fn invalid_chunk(message: impl Into<String>) -> Self {
        Self::InvalidChunk {
            message: message.into(),
        }
    }
}

impl CodecError for FormatError {
    fn code(&self) -> &'static str {
        match self {
            FormatError::TooSmall { .. } => "WAV_001",
            FormatError::InvalidRiffHeader => "WAV_002",
            FormatError::InvalidWaveFormat => "WAV_003",
            FormatError::MissingFmtChunk => "WAV_004",
            FormatError::MissingDataChunk => "WAV_005",
            FormatError::UnsupportedAudioFormat { .. } => "WAV_006",
            FormatError::UnsupportedBitsPerSample { .. } => "WAV_007",
            FormatError::InvalidChunk { .. } => "WAV_008",
        }
    }

    fn category(&self) -> &'static str {
        "format"
    }
}

/// Errors produced by block processing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// Block size of zero.
    #[error("block size must be greater than zero")]
    InvalidBlockSize,

    /// Gain factor that is negative or not finite.
    #[error("invalid gain factor: {factor}")]
    InvalidGain {
        /// The rejected factor.
        factor: f32,
    },
}

impl CodecError for ProcessError {
    fn code(&self) -> &'static str {
        match self {
            ProcessError::InvalidBlockSize => "PROC_001",
            ProcessError::InvalidGain { .. } => "PROC_002",
        }
    }

    fn category(&self) -> &'static str {
        "process"
    }
}
