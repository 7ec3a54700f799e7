//! RIFF chunk walking.

/// Offset of the first sub-chunk, after "RIFF", the size field and "WAVE".
const FIRST_CHUNK: usize = 12;

/// A chunk header found while walking a RIFF buffer.
///
/// `size` is the declared body size; the body may extend past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RiffChunk {
    pub id: [u8; 4],
    pub offset: usize,
    pub size: usize,
}

impl RiffChunk {
    /// The chunk body, or `None` if it is truncated.
    pub fn body<'a>(&self, raw: &'a [u8]) -> Option<&'a [u8]> {
        raw.get(self.offset..self.offset.checked_add(self.size)?)
    }
}

/// Iterator over the sub-chunks of a RIFF/WAVE buffer.
///
/// Odd-sized bodies are followed by one pad byte. Iteration stops at the
/// first header that does not fit in the buffer.
pub(crate) struct Chunks<'a> {
    raw: &'a [u8],
    pos: Option<usize>,
}

/// Walks the sub-chunks of `raw`. The RIFF/WAVE tags are not checked.
pub(crate) fn chunks(raw: &[u8]) -> Chunks<'_> {
    Chunks {
        raw,
        pos: Some(FIRST_CHUNK),
    }
}

/// Whether `raw` starts with a RIFF header of form type WAVE.
pub(crate) fn is_riff_wave(raw: &[u8]) -> bool {
    raw.len() >= FIRST_CHUNK && &raw[0..4] == b"RIFF" && &raw[8..12] == b"WAVE"
}

impl Iterator for Chunks<'_> {
    type Item = RiffChunk;

    fn next(&mut self) -> Option<RiffChunk> {
        let pos = self.pos?;
        let header = self.raw.get(pos..pos.checked_add(8)?)?;

        let mut id = [0u8; 4];
        id.copy_from_slice(&header[0..4]);
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
        let offset = pos + 8;

        self.pos = offset
            .checked_add(size)
            .and_then(|end| end.checked_add(size % 2));

        Some(RiffChunk { id, offset, size })
    }
}
