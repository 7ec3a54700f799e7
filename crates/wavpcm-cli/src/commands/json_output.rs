//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `inspect`, `process` and `hash`.

use serde::{Deserialize, Serialize};

use wavpcm_codec::{CodecError, WavFormat};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX. Codec failures additionally carry the codec's own code
/// (WAV_XXX, PROC_XXX) in [`JsonError::codec_code`].
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Config file missing, malformed or invalid
    pub const CONFIG: &str = "CLI_003";
    /// Input could not be decoded as WAV
    pub const DECODE: &str = "CLI_004";
    /// Block processing or encoding failed
    pub const PROCESS: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Code of the underlying codec error (e.g., "WAV_001")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_code: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            codec_code: None,
            file: None,
        }
    }

    /// Creates an error for a codec failure, keeping the codec's code.
    pub fn from_codec<E: CodecError>(code: &str, err: &E) -> Self {
        Self {
            codec_code: Some(err.code().to_string()),
            ..Self::new(code, err.message())
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "[{}] {}: {}", self.code, file, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for JsonError {}

/// Result body of the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Inspected file
    pub file: String,
    /// Format declared by the fmt chunk
    pub format: WavFormat,
    /// Byte rate derived from the format
    pub byte_rate: u32,
    /// Block align derived from the format
    pub block_align: u16,
    /// Data chunk payload size in bytes
    pub data_size: usize,
    /// Total samples across all channels
    pub num_samples: usize,
    /// Samples per channel
    pub num_frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Whether the file uses the canonical 44-byte header with consistent fields
    pub canonical_header: bool,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// BLAKE3 hash of the whole file
    pub file_hash: String,
}

/// Result body of the `process` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessResult {
    /// Input file
    pub input: String,
    /// Output file
    pub output: String,
    /// Decoder used ("legacy" or "strict")
    pub decode_mode: String,
    /// Format written to the output header
    pub format: WavFormat,
    /// Samples decoded from the input
    pub num_samples: usize,
    /// Block size used for processing
    pub block_size: usize,
    /// Gain factor applied
    pub gain: f32,
    /// Output duration in seconds
    pub duration_seconds: f64,
    /// Output file size in bytes
    pub output_size: usize,
    /// BLAKE3 hash of the output PCM payload
    pub pcm_hash: String,
}

/// Result body of the `hash` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashResult {
    /// Hashed file
    pub file: String,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// Envelope shared by all `--json` outputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

impl<T> From<Result<T, JsonError>> for CommandOutput<T> {
    fn from(result: Result<T, JsonError>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(vec![error]),
        }
    }
}
