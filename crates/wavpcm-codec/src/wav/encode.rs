//! Core WAV writing functions.

use std::io::{self, Write};

use super::format::WavFormat;
use super::header::build_header;
use super::pcm::samples_to_pcm16;
use super::HEADER_SIZE;

/// Encodes normalized samples as a 44.1 kHz stereo 16-bit WAV file.
///
/// Equivalent to [`encode_with_format`] with [`WavFormat::default()`].
pub fn encode(samples: &[f32]) -> Vec<u8> {
    encode_with_format(samples, &WavFormat::default())
}

/// Encodes normalized samples as a 16-bit PCM WAV file.
///
/// Samples are clamped, scaled by 32767 and truncated toward zero, then
/// written in input order after the 44-byte header. Only the rate and channel
/// count are taken from `format`; the header always declares 16 bits because
/// that is how the payload is packed. The result is exactly
/// `44 + 2 * samples.len()` bytes.
pub fn encode_with_format(samples: &[f32], format: &WavFormat) -> Vec<u8> {
    let pcm = samples_to_pcm16(samples);
    write_wav_to_vec(&format.with_pcm16(), &pcm)
}

/// Writes a complete WAV file to a writer.
///
/// `pcm_data` must already be packed at `format.bits_per_sample`.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&build_header(format, pcm_data.len() as u32))?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    buffer.extend_from_slice(&build_header(format, pcm_data.len() as u32));
    buffer.extend_from_slice(pcm_data);
    buffer
}
