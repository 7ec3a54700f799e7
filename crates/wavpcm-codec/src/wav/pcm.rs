//! PCM conversion, extraction and hashing utilities.

use super::chunk::{chunks, is_riff_wave};
use super::PCM16_SCALE;

/// Quantizes one normalized sample to 16-bit PCM.
///
/// The sample is clamped to [-1.0, 1.0], scaled by 32767 and truncated toward
/// zero. NaN quantizes to 0; infinities clamp like any other out-of-range value.
#[inline]
pub fn quantize_sample(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * PCM16_SCALE) as i16
}

/// Converts normalized samples to little-endian 16-bit PCM bytes.
///
/// Output order matches input order; the conversion is channel-agnostic.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize_sample(sample).to_le_bytes());
    }
    pcm
}

/// Converts little-endian 16-bit PCM bytes to normalized samples.
///
/// Each value is divided by 32767, so -32768 decodes to about -1.0000305.
/// A trailing odd byte is ignored.
pub fn pcm16_to_samples(pcm: &[u8]) -> Vec<f32> {
    pcm.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / PCM16_SCALE)
        .collect()
}

/// Returns the body of the first "data" chunk in a RIFF/WAVE buffer.
///
/// Header fields are ignored, so two files with the same payload but
/// different formats or extra chunks yield the same slice. `None` if the
/// buffer is not RIFF/WAVE, has no data chunk, or the data chunk is truncated.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if !is_riff_wave(wav_data) {
        return None;
    }
    chunks(wav_data)
        .find(|chunk| &chunk.id == b"data")?
        .body(wav_data)
}

/// BLAKE3 hex digest of the data chunk payload, see [`extract_pcm_data`].
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    let pcm = extract_pcm_data(wav_data)?;
    Some(blake3::hash(pcm).to_hex().to_string())
}
