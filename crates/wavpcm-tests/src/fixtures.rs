//! Test fixture utilities for WAV files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use wavpcm_codec::{encode_with_format, WavFormat, HEADER_SIZE};

/// A temporary directory holding WAV and config files for one test.
pub struct WavFixture {
    pub root: TempDir,
}

impl WavFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path of a file inside the fixture, as the `String` the CLI takes.
    pub fn file(&self, name: &str) -> String {
        self.root.path().join(name).to_string_lossy().into_owned()
    }

    /// Encode `samples` with `format` and write them to `name`.
    pub fn add_wav(&self, name: &str, samples: &[f32], format: &WavFormat) -> PathBuf {
        self.add_raw(name, &encode_with_format(samples, format))
    }

    /// Write arbitrary bytes to `name`.
    pub fn add_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    /// Write a JSON codec config to `name`.
    pub fn add_config(&self, name: &str, config: &serde_json::Value) -> PathBuf {
        let content = serde_json::to_string_pretty(config).expect("Failed to serialize config");
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// Read a file back from the fixture.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root.path().join(name)).expect("Failed to read fixture file")
    }
}

impl Default for WavFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Sine wave samples at the given amplitude.
pub fn sine(num_samples: usize, frequency: f32, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin()
        })
        .collect()
}

/// Builds a RIFF/WAVE file from raw chunks, padding odd-sized chunks.
///
/// Useful for files the 44-byte encoder cannot produce: extra chunks,
/// other bit depths, non-PCM format tags.
pub fn riff(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut body = b"WAVE".to_vec();
    for (id, data) in chunks {
        body.extend_from_slice(*id);
        body.extend_from_slice(&(data.len() as u32).to_le_bytes());
        body.extend_from_slice(data);
        if data.len() % 2 == 1 {
            body.push(0);
        }
    }
    let mut out = b"RIFF".to_vec();
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}

/// A 16-byte fmt chunk body.
pub fn fmt_chunk(audio_format: u16, channels: u16, sample_rate: u32, bits: u16) -> Vec<u8> {
    let block_align = channels * bits / 8;
    let byte_rate = sample_rate * block_align as u32;
    let mut out = Vec::with_capacity(16);
    out.extend_from_slice(&audio_format.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits.to_le_bytes());
    out
}

/// Interprets everything after the 44-byte header as little-endian `i16`.
pub fn payload_i16(wav: &[u8]) -> Vec<i16> {
    wav[HEADER_SIZE..]
        .chunks_exact(2)
        .map(|c| i16::from_le_bytes([c[0], c[1]]))
        .collect()
}

/// BLAKE3 hex digest of the bytes after the 44-byte header.
pub fn payload_hash(wav: &[u8]) -> String {
    blake3::hash(&wav[HEADER_SIZE..]).to_hex().to_string()
}
