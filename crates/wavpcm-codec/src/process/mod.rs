//! Fixed-size block processing between decode and encode.
//!
//! Signal-processing collaborators such as a noise reducer consume audio in
//! blocks of a fixed number of samples. [`process_blocks`] feeds a decoded
//! buffer through any [`BlockProcessor`] and returns a buffer of the same
//! length, ready to be encoded again.

mod gain;

pub use gain::{Gain, Passthrough};

use crate::error::ProcessError;

/// Block size used by the host application's noise reducer.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Common trait for block-based sample transforms.
pub trait BlockProcessor {
    /// Processes one block.
    ///
    /// # Arguments
    /// * `input` - Exactly one block of normalized samples
    /// * `output` - Buffer of the same length to fill
    fn process(&mut self, input: &[f32], output: &mut [f32]);
}

/// Runs `samples` through `processor` in blocks of `block_size` samples.
///
/// The final short block is zero-padded before processing and the padding is
/// discarded afterwards, so the result always has `samples.len()` samples.
///
/// # Errors
/// [`ProcessError::InvalidBlockSize`] when `block_size` is zero.
pub fn process_blocks<P: BlockProcessor + ?Sized>(
    samples: &[f32],
    block_size: usize,
    processor: &mut P,
) -> Result<Vec<f32>, ProcessError> {
    if block_size == 0 {
        return Err(ProcessError::InvalidBlockSize);
    }

    let mut output = Vec::with_capacity(samples.len());
    let mut input_block = vec![0.0f32; block_size];
    let mut output_block = vec![0.0f32; block_size];

    for chunk in samples.chunks(block_size) {
        input_block[..chunk.len()].copy_from_slice(chunk);
        input_block[chunk.len()..].fill(0.0);
        output_block.fill(0.0);

        processor.process(&input_block, &mut output_block);
        output.extend_from_slice(&output_block[..chunk.len()]);
    }

    Ok(output)
}
