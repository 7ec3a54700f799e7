//! wavpcm codec
//!
//! A minimal RIFF/WAVE codec for 16-bit integer PCM:
//! - [`decode()`] - WAV bytes to normalized `f32` samples
//! - [`encode()`] - normalized `f32` samples to a canonical 44-byte-header WAV file
//!
//! # Overview
//!
//! Both operations are stateless, synchronous transforms over whole in-memory
//! buffers. Samples are interleaved frame by frame and the codec never
//! deinterleaves them; the channel count only shows up in the header.
//!
//! Two decode modes are available:
//!
//! - **Legacy** ([`decode()`]) - skips a fixed 44-byte header and reads the rest
//!   as little-endian `i16`. Files with extra chunks or other bit depths are
//!   silently mis-decoded.
//! - **Strict** ([`decode_strict()`]) - walks the RIFF chunk list, validates the
//!   `fmt ` chunk and decodes 8/16/24/32-bit payloads.
//!
//! # Example
//!
//! ```
//! use wavpcm_codec::{decode, encode};
//!
//! let wav = encode(&[0.0, 0.5, -0.5, 1.0]);
//! assert_eq!(wav.len(), 44 + 8);
//!
//! let samples = decode(&wav).unwrap();
//! assert_eq!(samples.len(), 4);
//! assert!((samples[1] - 0.5).abs() < 1.0 / 32767.0);
//! ```
//!
//! # Crate Structure
//!
//! - [`wav`] - format model, header builder, encoder, decoders, PCM helpers
//! - [`process`] - fixed-size block processing between decode and encode
//! - [`error`] - error types with stable codes

pub mod error;
pub mod process;
pub mod wav;

// Re-export main types at crate root
pub use error::{CodecError, FormatError, FormatResult, ProcessError};
pub use process::{process_blocks, BlockProcessor, Gain, Passthrough, DEFAULT_BLOCK_SIZE};
pub use wav::{
    build_header, decode, decode_strict, decode_with_mode, encode, encode_with_format,
    DecodeMode, DecodedWav, WavFormat, WavHeader, WavResult, WavWriter, HEADER_SIZE,
};
