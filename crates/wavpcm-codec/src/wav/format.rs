//! Header-level description of a PCM stream.

use serde::{Deserialize, Serialize};

/// Sample rate, channel count and bit depth of a PCM stream.
///
/// Byte rate and block align are always derived from these three fields so a
/// header can never declare inconsistent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WavFormat {
    /// Sample rate in Hz (samples per second per channel).
    pub sample_rate: u32,
    /// Number of interleaved channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Bits per sample (16 on the write path).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a format from explicit parameters.
    pub fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }

    /// Creates a 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1, 16)
    }

    /// Creates a 16-bit stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(sample_rate, 2, 16)
    }

    /// Same rate and channel count at 16 bits, the only depth the encoder writes.
    pub fn with_pcm16(&self) -> Self {
        Self::new(self.sample_rate, self.channels, 16)
    }

    /// Bytes per single-channel sample.
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame (one sample for every channel).
    ///
    /// `channels * bits_per_sample / 8`, truncated to the 16-bit header field.
    pub fn block_align(&self) -> u16 {
        (self.channels as u32 * self.bits_per_sample as u32 / 8) as u16
    }

    /// Bytes per second of audio.
    ///
    /// `sample_rate * channels * bits_per_sample / 8`, truncated to the 32-bit
    /// header field.
    pub fn byte_rate(&self) -> u32 {
        (self.sample_rate as u64 * self.channels as u64 * self.bits_per_sample as u64 / 8) as u32
    }

    /// Playback time of `num_samples` interleaved samples, in seconds.
    pub fn duration_seconds(&self, num_samples: usize) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        let frames = num_samples / self.channels as usize;
        frames as f64 / self.sample_rate as f64
    }
}

impl Default for WavFormat {
    /// 44.1 kHz, stereo, 16-bit.
    fn default() -> Self {
        Self::stereo(44100)
    }
}
