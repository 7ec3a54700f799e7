//! WAV encoding result type.

use super::format::WavFormat;
use super::pcm::samples_to_pcm16;
use super::write_wav_to_vec;

/// Encoded WAV bytes together with facts about them.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Header followed by the payload.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Format written to the header.
    pub format: WavFormat,
    /// Total number of samples across all channels.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes interleaved samples at the rate and channel count of `format`.
    pub fn from_samples(samples: &[f32], format: WavFormat) -> Self {
        let format = format.with_pcm16();
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            format,
            num_samples: samples.len(),
        }
    }

    /// Number of sample frames (samples per channel).
    pub fn num_frames(&self) -> usize {
        match self.format.channels {
            0 => 0,
            channels => self.num_samples / channels as usize,
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.format.duration_seconds(self.num_samples)
    }
}
