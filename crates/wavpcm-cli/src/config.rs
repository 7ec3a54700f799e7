//! Codec configuration for the `process` command.
//!
//! Values come from an optional JSON file and are then overridden by
//! command-line flags. Every field has a default, so `{}` is a valid file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use wavpcm_codec::{DecodeMode, Gain, ProcessError, WavFormat, DEFAULT_BLOCK_SIZE};

/// Default output sample rate when neither config nor source provides one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default output channel count when neither config nor source provides one.
pub const DEFAULT_CHANNELS: u16 = 2;

/// Settings for decode → process → encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Decoder to use on the input file.
    pub decode_mode: DecodeMode,
    /// Samples per processing block.
    pub block_size: usize,
    /// Linear gain applied to every block.
    pub gain: f32,
    /// Extra gain in decibels, stacked on top of `gain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_db: Option<f32>,
    /// Output sample rate; falls back to the source (strict mode) or 44100 Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    /// Output channel count; falls back to the source (strict mode) or 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u16>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            decode_mode: DecodeMode::Legacy,
            block_size: DEFAULT_BLOCK_SIZE,
            gain: 1.0,
            gain_db: None,
            sample_rate: None,
            channels: None,
        }
    }
}

/// Command-line overrides, applied on top of a [`CodecConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub decode_mode: Option<DecodeMode>,
    pub block_size: Option<usize>,
    pub gain: Option<f32>,
    pub gain_db: Option<f32>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u16>,
}

impl CodecConfig {
    /// Parse a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads the file if given, applies overrides, and validates the result.
    pub fn resolve(path: Option<&str>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Replaces fields that have an override.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(mode) = overrides.decode_mode {
            self.decode_mode = mode;
        }
        if let Some(block_size) = overrides.block_size {
            self.block_size = block_size;
        }
        if let Some(gain) = overrides.gain {
            self.gain = gain;
        }
        if overrides.gain_db.is_some() {
            self.gain_db = overrides.gain_db;
        }
        if overrides.sample_rate.is_some() {
            self.sample_rate = overrides.sample_rate;
        }
        if overrides.channels.is_some() {
            self.channels = overrides.channels;
        }
    }

    /// Rejects values the codec cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            anyhow::bail!("block_size must be greater than zero");
        }
        if self.sample_rate == Some(0) {
            anyhow::bail!("sample_rate must be greater than zero");
        }
        if self.channels == Some(0) {
            anyhow::bail!("channels must be greater than zero");
        }
        self.gain_stage().context("invalid gain")?;
        Ok(())
    }

    /// The gain processor: `gain` times `gain_db` converted to a linear factor.
    pub fn gain_stage(&self) -> Result<Gain, ProcessError> {
        let linear = Gain::new(self.gain)?;
        match self.gain_db {
            Some(db) => Gain::new(linear.factor() * Gain::from_db(db)?.factor()),
            None => Ok(linear),
        }
    }

    /// Output format for the encoder.
    ///
    /// Configured values win; otherwise the source format (when the strict
    /// decoder reported one) and finally the defaults. Output is always 16-bit.
    pub fn output_format(&self, source: Option<&WavFormat>) -> WavFormat {
        let sample_rate = self
            .sample_rate
            .or(source.map(|f| f.sample_rate))
            .unwrap_or(DEFAULT_SAMPLE_RATE);
        let channels = self
            .channels
            .or(source.map(|f| f.channels))
            .unwrap_or(DEFAULT_CHANNELS);
        WavFormat::new(sample_rate, channels, 16)
    }
}
