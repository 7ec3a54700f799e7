//! Built-in block processors.

use super::BlockProcessor;
use crate::error::ProcessError;

/// Copies input to output unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl BlockProcessor for Passthrough {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(input);
    }
}

/// Multiplies every sample by a constant factor.
///
/// No clamping happens here; the encoder clamps on the way out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    factor: f32,
}

impl Gain {
    /// Creates a gain stage.
    ///
    /// # Errors
    /// [`ProcessError::InvalidGain`] when `factor` is negative, NaN or infinite.
    pub fn new(factor: f32) -> Result<Self, ProcessError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ProcessError::InvalidGain { factor });
        }
        Ok(Self { factor })
    }

    /// Creates a gain stage from a level in decibels.
    pub fn from_db(db: f32) -> Result<Self, ProcessError> {
        Self::new(10f32.powf(db / 20.0))
    }

    /// Linear gain factor.
    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl BlockProcessor for Gain {
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        for (o, &i) in output.iter_mut().zip(input) {
            *o = i * self.factor;
        }
    }
}
