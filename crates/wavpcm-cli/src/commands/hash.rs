//! Hash command implementation
//!
//! Prints the BLAKE3 hash of a WAV file's PCM payload, ignoring the header
//! and any non-data chunks.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use wavpcm_codec::wav::compute_pcm_hash;

use super::json_output::{error_codes, CommandOutput, HashResult, JsonError};

/// Run the hash command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if no data chunk can be found
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output: CommandOutput<HashResult> = hash_file(input).into();
        let code = if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(code);
    }

    let result = hash_file(input)?;
    println!("{}  {}", result.pcm_hash, input.dimmed());
    Ok(ExitCode::SUCCESS)
}

/// Reads a WAV file and hashes its PCM payload.
pub fn hash_file(input: &str) -> Result<HashResult, JsonError> {
    let data = fs::read(input).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(input)
    })?;

    let pcm_hash = compute_pcm_hash(&data).ok_or_else(|| {
        JsonError::new(error_codes::DECODE, "No PCM data chunk found").with_file(input)
    })?;

    Ok(HashResult {
        file: input.to_string(),
        pcm_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavpcm_codec::{encode_with_format, WavFormat};

    #[test]
    fn test_hash_ignores_header_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let mono = tmp.path().join("mono.wav");
        let stereo = tmp.path().join("stereo.wav");
        let samples = [0.1, -0.2, 0.3, -0.4];
        fs::write(&mono, encode_with_format(&samples, &WavFormat::mono(8000))).unwrap();
        fs::write(&stereo, encode_with_format(&samples, &WavFormat::stereo(48000))).unwrap();

        let a = hash_file(mono.to_str().unwrap()).unwrap();
        let b = hash_file(stereo.to_str().unwrap()).unwrap();
        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(a.pcm_hash.len(), 64);
    }

    #[test]
    fn test_hash_detects_payload_change() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.wav");
        let b = tmp.path().join("b.wav");
        fs::write(&a, encode_with_format(&[0.1, 0.2], &WavFormat::mono(8000))).unwrap();
        fs::write(&b, encode_with_format(&[0.1, 0.3], &WavFormat::mono(8000))).unwrap();

        assert_ne!(
            hash_file(a.to_str().unwrap()).unwrap().pcm_hash,
            hash_file(b.to_str().unwrap()).unwrap().pcm_hash
        );
    }

    #[test]
    fn test_hash_non_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("x.wav");
        fs::write(&path, b"definitely not riff").unwrap();

        let err = hash_file(path.to_str().unwrap()).unwrap_err();
        assert_eq!(err.code, error_codes::DECODE);

        let code = run(path.to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_hash_missing_file() {
        let err = hash_file("/nonexistent/x.wav").unwrap_err();
        assert_eq!(err.code, error_codes::FILE_READ);
        assert!(run("/nonexistent/x.wav", false).is_err());
    }
}
