//! Canonical 44-byte RIFF/WAVE header.

use crate::error::{FormatError, FormatResult};

use super::format::WavFormat;
use super::{AUDIO_FORMAT_PCM, FMT_CHUNK_SIZE, HEADER_SIZE};

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

/// Bytes counted by the RIFF chunk size besides the data payload.
const RIFF_OVERHEAD: u32 = (HEADER_SIZE - 8) as u32;

/// Byte offsets of the header fields.
mod offset {
    pub const RIFF_ID: usize = 0;
    pub const RIFF_SIZE: usize = 4;
    pub const WAVE_ID: usize = 8;
    pub const FMT_ID: usize = 12;
    pub const FMT_SIZE: usize = 16;
    pub const AUDIO_FORMAT: usize = 20;
    pub const CHANNELS: usize = 22;
    pub const SAMPLE_RATE: usize = 24;
    pub const BYTE_RATE: usize = 28;
    pub const BLOCK_ALIGN: usize = 32;
    pub const BITS_PER_SAMPLE: usize = 34;
    pub const DATA_ID: usize = 36;
    pub const DATA_SIZE: usize = 40;
}

/// The fields of a canonical WAV header.
///
/// Built with [`WavHeader::new`], every derived field (RIFF size, byte rate,
/// block align) is computed from the format and data size. [`WavHeader::parse`]
/// keeps whatever a file declares so inconsistent headers can be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    riff_size: u32,
    fmt_size: u32,
    audio_format: u16,
    format: WavFormat,
    byte_rate: u32,
    block_align: u16,
    data_size: u32,
}

impl WavHeader {
    /// Creates a PCM header for `data_size` bytes of payload.
    ///
    /// The RIFF size wraps like the 32-bit field it is written to when
    /// `data_size` is within 36 bytes of `u32::MAX`.
    pub fn new(format: WavFormat, data_size: u32) -> Self {
        Self {
            riff_size: RIFF_OVERHEAD.wrapping_add(data_size),
            fmt_size: FMT_CHUNK_SIZE,
            audio_format: AUDIO_FORMAT_PCM,
            format,
            byte_rate: format.byte_rate(),
            block_align: format.block_align(),
            data_size,
        }
    }

    /// Parses a canonical header from the first 44 bytes of `bytes`.
    ///
    /// Only the fixed layout is accepted: "fmt " at offset 12 with a 16-byte
    /// body, followed directly by "data". Use the strict decoder for files
    /// with other chunk orderings.
    pub fn parse(bytes: &[u8]) -> FormatResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(FormatError::TooSmall {
                minimum: HEADER_SIZE,
                actual: bytes.len(),
            });
        }
        if &bytes[offset::RIFF_ID..offset::RIFF_ID + 4] != RIFF_TAG {
            return Err(FormatError::InvalidRiffHeader);
        }
        if &bytes[offset::WAVE_ID..offset::WAVE_ID + 4] != WAVE_TAG {
            return Err(FormatError::InvalidWaveFormat);
        }
        if &bytes[offset::FMT_ID..offset::FMT_ID + 4] != FMT_TAG {
            return Err(FormatError::invalid_chunk("expected fmt chunk at offset 12"));
        }
        let fmt_size = read_u32(bytes, offset::FMT_SIZE);
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(FormatError::invalid_chunk(format!(
                "expected fmt chunk size {}, found {}",
                FMT_CHUNK_SIZE, fmt_size
            )));
        }
        if &bytes[offset::DATA_ID..offset::DATA_ID + 4] != DATA_TAG {
            return Err(FormatError::invalid_chunk("expected data chunk at offset 36"));
        }

        Ok(Self {
            riff_size: read_u32(bytes, offset::RIFF_SIZE),
            fmt_size,
            audio_format: read_u16(bytes, offset::AUDIO_FORMAT),
            format: WavFormat {
                channels: read_u16(bytes, offset::CHANNELS),
                sample_rate: read_u32(bytes, offset::SAMPLE_RATE),
                bits_per_sample: read_u16(bytes, offset::BITS_PER_SAMPLE),
            },
            byte_rate: read_u32(bytes, offset::BYTE_RATE),
            block_align: read_u16(bytes, offset::BLOCK_ALIGN),
            data_size: read_u32(bytes, offset::DATA_SIZE),
        })
    }

    /// Serializes the header to its 44-byte wire form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        put(&mut out, offset::RIFF_ID, RIFF_TAG);
        put(&mut out, offset::RIFF_SIZE, &self.riff_size.to_le_bytes());
        put(&mut out, offset::WAVE_ID, WAVE_TAG);
        put(&mut out, offset::FMT_ID, FMT_TAG);
        put(&mut out, offset::FMT_SIZE, &self.fmt_size.to_le_bytes());
        put(&mut out, offset::AUDIO_FORMAT, &self.audio_format.to_le_bytes());
        put(&mut out, offset::CHANNELS, &self.format.channels.to_le_bytes());
        put(&mut out, offset::SAMPLE_RATE, &self.format.sample_rate.to_le_bytes());
        put(&mut out, offset::BYTE_RATE, &self.byte_rate.to_le_bytes());
        put(&mut out, offset::BLOCK_ALIGN, &self.block_align.to_le_bytes());
        put(
            &mut out,
            offset::BITS_PER_SAMPLE,
            &self.format.bits_per_sample.to_le_bytes(),
        );
        put(&mut out, offset::DATA_ID, DATA_TAG);
        put(&mut out, offset::DATA_SIZE, &self.data_size.to_le_bytes());
        out
    }

    /// Declared RIFF chunk size.
    pub fn riff_size(&self) -> u32 {
        self.riff_size
    }

    /// Declared audio format tag.
    pub fn audio_format(&self) -> u16 {
        self.audio_format
    }

    /// Channel count, sample rate and bit depth.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Declared byte rate.
    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    /// Declared block align.
    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    /// Declared data chunk size.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Whether the declared sizes and rates agree with the format.
    pub fn is_consistent(&self) -> bool {
        *self == Self::new(self.format, self.data_size)
    }
}

/// Builds the 44 header bytes for a PCM payload of `data_size` bytes.
pub fn build_header(format: &WavFormat, data_size: u32) -> [u8; HEADER_SIZE] {
    WavHeader::new(*format, data_size).to_bytes()
}

fn put(out: &mut [u8; HEADER_SIZE], at: usize, bytes: &[u8]) {
    out[at..at + bytes.len()].copy_from_slice(bytes);
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
