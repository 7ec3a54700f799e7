//! Reusable encoder bound to one output format.

use std::io::{self, Write};

use super::encode::{encode_with_format, write_wav};
use super::format::WavFormat;
use super::pcm::samples_to_pcm16;

/// Encoder with a fixed header format.
#[derive(Debug, Clone, Copy, Default)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a writer for the rate and channel count of `format`, at 16 bits.
    pub fn new(format: WavFormat) -> Self {
        Self {
            format: format.with_pcm16(),
        }
    }

    /// 16-bit mono at `sample_rate`.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(WavFormat::mono(sample_rate))
    }

    /// 16-bit stereo at `sample_rate`.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(WavFormat::stereo(sample_rate))
    }

    /// Returns the format written to the header.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Writes interleaved samples to a byte vector.
    pub fn write(&self, samples: &[f32]) -> Vec<u8> {
        encode_with_format(samples, &self.format)
    }

    /// Writes interleaved samples to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, samples: &[f32]) -> io::Result<()> {
        let pcm = samples_to_pcm16(samples);
        write_wav(writer, &self.format, &pcm)
    }

    /// BLAKE3 hash of the payload `write` would produce, header excluded.
    pub fn pcm_hash(&self, samples: &[f32]) -> String {
        let pcm = samples_to_pcm16(samples);
        blake3::hash(&pcm).to_hex().to_string()
    }
}
