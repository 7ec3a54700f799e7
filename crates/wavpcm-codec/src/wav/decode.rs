//! WAV decoding: legacy fixed-offset and strict chunk-walking modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

use super::chunk::{chunks, RiffChunk};
use super::format::WavFormat;
use super::pcm::pcm16_to_samples;
use super::{AUDIO_FORMAT_PCM, HEADER_SIZE};

/// Smallest input the legacy decoder accepts: a full header plus one byte.
const LEGACY_MIN_LEN: usize = HEADER_SIZE + 1;

/// Which decoder to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Fixed 44-byte header, everything after it read as 16-bit PCM.
    #[default]
    Legacy,
    /// Real RIFF chunk parser honouring the fmt chunk.
    Strict,
}

impl DecodeMode {
    /// Returns the lowercase name used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeMode::Legacy => "legacy",
            DecodeMode::Strict => "strict",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(DecodeMode::Legacy),
            "strict" => Ok(DecodeMode::Strict),
            other => Err(format!(
                "unknown decode mode '{}' (expected 'legacy' or 'strict')",
                other
            )),
        }
    }
}

/// Output of the strict decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Format declared by the fmt chunk.
    pub format: WavFormat,
    /// Normalized interleaved samples.
    pub samples: Vec<f32>,
}

impl DecodedWav {
    /// Number of sample frames (samples per channel).
    pub fn num_frames(&self) -> usize {
        match self.format.channels {
            0 => 0,
            channels => self.samples.len() / channels as usize,
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.format.duration_seconds(self.samples.len())
    }
}

/// Decodes a 16-bit PCM WAV buffer with the legacy fixed-offset layout.
///
/// The first 44 bytes are skipped without being parsed and every following
/// little-endian `i16` is divided by 32767. A trailing odd byte is dropped.
/// Files with extra chunks before "data" or other bit depths are mis-decoded
/// rather than rejected; use [`decode_strict`] for those.
///
/// # Errors
/// [`FormatError::TooSmall`] when `raw` is 44 bytes or shorter.
pub fn decode(raw: &[u8]) -> FormatResult<Vec<f32>> {
    if raw.len() < LEGACY_MIN_LEN {
        return Err(FormatError::TooSmall {
            minimum: LEGACY_MIN_LEN,
            actual: raw.len(),
        });
    }
    Ok(pcm16_to_samples(&raw[HEADER_SIZE..]))
}

/// Decodes a WAV buffer by walking its RIFF chunks.
///
/// Supports integer PCM at 8, 16, 24 and 32 bits. Each depth is normalized by
/// its positive maximum (127, 32767, 8388607, 2147483647). A bare 44-byte
/// header with an empty data chunk decodes to no samples.
pub fn decode_strict(raw: &[u8]) -> FormatResult<DecodedWav> {
    if raw.len() < HEADER_SIZE {
        return Err(FormatError::TooSmall {
            minimum: HEADER_SIZE,
            actual: raw.len(),
        });
    }

    if &raw[0..4] != b"RIFF" {
        return Err(FormatError::InvalidRiffHeader);
    }

    if &raw[8..12] != b"WAVE" {
        return Err(FormatError::InvalidWaveFormat);
    }

    let fmt = find_chunk(raw, b"fmt ").ok_or(FormatError::MissingFmtChunk)?;
    if fmt.size < 16 {
        return Err(FormatError::invalid_chunk("fmt chunk too short"));
    }
    let fmt_data = chunk_body(raw, &fmt, "fmt")?;

    let audio_format = u16::from_le_bytes([fmt_data[0], fmt_data[1]]);
    let channels = u16::from_le_bytes([fmt_data[2], fmt_data[3]]);
    let sample_rate = u32::from_le_bytes([fmt_data[4], fmt_data[5], fmt_data[6], fmt_data[7]]);
    let bits_per_sample = u16::from_le_bytes([fmt_data[14], fmt_data[15]]);

    if audio_format != AUDIO_FORMAT_PCM {
        return Err(FormatError::UnsupportedAudioFormat {
            format_code: audio_format,
        });
    }

    if channels == 0 {
        return Err(FormatError::invalid_chunk("fmt chunk declares zero channels"));
    }

    let data_chunk = find_chunk(raw, b"data").ok_or(FormatError::MissingDataChunk)?;
    let data = chunk_body(raw, &data_chunk, "data")?;

    let samples = match bits_per_sample {
        8 => data.iter().map(|&b| (b as f32 - 128.0) / 127.0).collect(),
        16 => pcm16_to_samples(data),
        24 => data
            .chunks_exact(3)
            .map(|chunk| {
                let sign = if chunk[2] & 0x80 != 0 { 0xFF } else { 0x00 };
                let sample = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], sign]);
                sample as f32 / 8_388_607.0
            })
            .collect(),
        32 => data
            .chunks_exact(4)
            .map(|chunk| {
                let sample = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                (sample as f64 / i32::MAX as f64) as f32
            })
            .collect(),
        bits => return Err(FormatError::UnsupportedBitsPerSample { bits }),
    };

    Ok(DecodedWav {
        format: WavFormat::new(sample_rate, channels, bits_per_sample),
        samples,
    })
}

/// Decodes with the selected mode, returning only the samples.
pub fn decode_with_mode(raw: &[u8], mode: DecodeMode) -> FormatResult<Vec<f32>> {
    match mode {
        DecodeMode::Legacy => decode(raw),
        DecodeMode::Strict => decode_strict(raw).map(|decoded| decoded.samples),
    }
}

fn find_chunk(raw: &[u8], id: &[u8; 4]) -> Option<RiffChunk> {
    chunks(raw).find(|chunk| &chunk.id == id)
}

fn chunk_body<'a>(raw: &'a [u8], chunk: &RiffChunk, name: &str) -> FormatResult<&'a [u8]> {
    chunk.body(raw).ok_or_else(|| {
        FormatError::invalid_chunk(format!(
            "{} chunk extends beyond file: offset {} + size {} > file length {}",
            name,
            chunk.offset,
            chunk.size,
            raw.len()
        ))
    })
}
