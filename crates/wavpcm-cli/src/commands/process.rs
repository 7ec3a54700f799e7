//! Process command implementation
//!
//! Decodes a WAV file, runs the samples through the block pipeline and
//! writes the re-encoded 16-bit file.

use anyhow::Result;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use wavpcm_codec::{
    decode, decode_strict, process_blocks, BlockProcessor, DecodeMode, Passthrough, WavFormat,
    WavWriter, HEADER_SIZE,
};

use super::json_output::{error_codes, CommandOutput, JsonError, ProcessResult};
use crate::config::{CodecConfig, ConfigOverrides};

/// Inputs of the process command.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Source WAV file
    pub input: String,
    /// Destination WAV file
    pub output: String,
    /// Optional JSON config file
    pub config: Option<String>,
    /// Flag values that override the config file
    pub overrides: ConfigOverrides,
}

/// Run the process command
///
/// # Arguments
/// * `options` - Input/output paths, config file and flag overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on any failure
pub fn run(options: &ProcessOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Samples after the block pipeline, with the format they are written in.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// Interleaved output samples, same length as the decoded input.
    pub samples: Vec<f32>,
    /// 16-bit output format.
    pub format: WavFormat,
    /// Linear gain factor that was applied.
    pub gain: f32,
}

/// Decodes, processes and re-encodes one file.
pub fn process_file(options: &ProcessOptions) -> Result<ProcessResult, JsonError> {
    let config = CodecConfig::resolve(options.config.as_deref(), &options.overrides)
        .map_err(|e| JsonError::new(error_codes::CONFIG, format!("{:#}", e)))?;

    let data = fs::read(&options.input).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(&options.input)
    })?;

    let processed = process_bytes(&data, &config).map_err(|e| e.with_file(&options.input))?;
    let writer = WavWriter::new(processed.format);

    write_output(&options.output, &writer, &processed.samples).map_err(|e| {
        JsonError::new(error_codes::FILE_WRITE, format!("Failed to write file: {}", e))
            .with_file(&options.output)
    })?;

    let num_samples = processed.samples.len();
    Ok(ProcessResult {
        input: options.input.clone(),
        output: options.output.clone(),
        decode_mode: config.decode_mode.to_string(),
        format: writer.format(),
        num_samples,
        block_size: config.block_size,
        gain: processed.gain,
        duration_seconds: writer.format().duration_seconds(num_samples),
        output_size: HEADER_SIZE + num_samples * 2,
        pcm_hash: writer.pcm_hash(&processed.samples),
    })
}

/// Runs decode and the block transform on in-memory bytes.
pub fn process_bytes(data: &[u8], config: &CodecConfig) -> Result<Processed, JsonError> {
    let (samples, source_format) = decode_input(data, config.decode_mode)
        .map_err(|e| JsonError::from_codec(error_codes::DECODE, &e))?;

    let gain = config
        .gain_stage()
        .map_err(|e| JsonError::from_codec(error_codes::PROCESS, &e))?;
    let mut processor: Box<dyn BlockProcessor> = if gain.factor() == 1.0 {
        Box::new(Passthrough)
    } else {
        Box::new(gain)
    };

    let processed = process_blocks(&samples, config.block_size, processor.as_mut())
        .map_err(|e| JsonError::from_codec(error_codes::PROCESS, &e))?;

    Ok(Processed {
        samples: processed,
        format: config.output_format(source_format.as_ref()),
        gain: gain.factor(),
    })
}

/// Streams the encoded file to `path`.
fn write_output(path: &str, writer: &WavWriter, samples: &[f32]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writer.write_to(&mut file, samples)?;
    file.flush()
}

/// Decodes with the selected mode; only the strict decoder knows the source format.
fn decode_input(
    data: &[u8],
    mode: DecodeMode,
) -> wavpcm_codec::FormatResult<(Vec<f32>, Option<WavFormat>)> {
    match mode {
        DecodeMode::Legacy => Ok((decode(data)?, None)),
        DecodeMode::Strict => {
            let decoded = decode_strict(data)?;
            Ok((decoded.samples, Some(decoded.format)))
        }
    }
}

/// Run process with human-readable (colored) output
fn run_human(options: &ProcessOptions) -> Result<ExitCode> {
    println!("{} {}", "Input:".cyan().bold(), options.input);
    if let Some(config) = &options.config {
        println!("{} {}", "Config:".dimmed(), config);
    }

    let result = process_file(options)?;

    println!("{} {}", "Decode mode:".dimmed(), result.decode_mode);
    println!(
        "{} {} Hz, {} ch, {}-bit",
        "Output format:".dimmed(),
        result.format.sample_rate,
        result.format.channels,
        result.format.bits_per_sample
    );
    println!(
        "{} {} samples in blocks of {}",
        "Processed:".dimmed(),
        result.num_samples,
        result.block_size
    );
    if result.gain != 1.0 {
        println!("{} {}", "Gain:".dimmed(), result.gain);
    }
    println!("{} {:.3}s", "Duration:".dimmed(), result.duration_seconds);
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);
    println!(
        "\n{} {} ({} bytes)",
        "Wrote".green().bold(),
        result.output,
        result.output_size
    );

    Ok(ExitCode::SUCCESS)
}

/// Run process with machine-readable JSON output
fn run_json(options: &ProcessOptions) -> Result<ExitCode> {
    let output: CommandOutput<ProcessResult> = process_file(options).into();
    let code = if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}
