//! 16-bit PCM WAV encoding and decoding.
//!
//! The writer always produces the canonical 44-byte header layout:
//!
//! ```text
//! offset  size  field
//!      0     4  "RIFF"
//!      4     4  ChunkSize = 36 + data size
//!      8     4  "WAVE"
//!     12     4  "fmt "
//!     16     4  16 (PCM fmt body size)
//!     20     2  1 (PCM)
//!     22     2  channels
//!     24     4  sample rate
//!     28     4  byte rate
//!     32     2  block align
//!     34     2  bits per sample
//!     36     4  "data"
//!     40     4  data size
//! ```
//!
//! All multi-byte fields are little-endian.

mod builder;
mod chunk;
mod decode;
mod encode;
mod format;
mod header;
mod pcm;
mod result;


// Re-export public API
pub use builder::WavWriter;
pub use decode::{decode, decode_strict, decode_with_mode, DecodeMode, DecodedWav};
pub use encode::{encode, encode_with_format, write_wav, write_wav_to_vec};
pub use format::WavFormat;
pub use header::{build_header, WavHeader};
pub use pcm::{
    compute_pcm_hash, extract_pcm_data, pcm16_to_samples, quantize_sample, samples_to_pcm16,
};
pub use result::WavResult;

/// Size of the canonical RIFF/WAVE header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Scale between normalized samples and 16-bit PCM (`i16::MAX`).
///
/// Decoding divides by the same value, so `-32768` maps slightly below `-1.0`.
pub const PCM16_SCALE: f32 = i16::MAX as f32;

/// Audio format tag for integer PCM.
pub const AUDIO_FORMAT_PCM: u16 = 1;

/// Size of the fmt chunk body for plain PCM.
pub const FMT_CHUNK_SIZE: u32 = 16;
