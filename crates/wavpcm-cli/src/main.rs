//! wavpcm CLI - Command-line interface for the 16-bit PCM WAV codec
//!
//! This binary provides commands for inspecting, hashing and re-encoding
//! WAV files through the codec's block-processing pipeline.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavpcm_cli::commands;
use wavpcm_cli::config::ConfigOverrides;
use wavpcm_codec::DecodeMode;

/// wavpcm - Minimal 16-bit PCM WAV codec
#[derive(Parser)]
#[command(name = "wavpcm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a WAV file and print its format, size, duration and hashes
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a WAV file, apply block processing and write a 16-bit WAV
    Process {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Path to the output WAV file
        #[arg(short, long)]
        output: String,

        /// Decoder to use (legacy or strict)
        #[arg(short, long)]
        mode: Option<DecodeMode>,

        /// Linear gain factor applied to every block
        #[arg(short, long)]
        gain: Option<f32>,

        /// Additional gain in decibels, stacked on top of --gain
        #[arg(long, allow_negative_numbers = true)]
        gain_db: Option<f32>,

        /// Samples per processing block
        #[arg(long)]
        block_size: Option<usize>,

        /// Output sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Output channel count
        #[arg(long)]
        channels: Option<u16>,

        /// Path to a JSON codec config file
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the BLAKE3 hash of a WAV file's PCM payload
    Hash {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Process {
            input,
            output,
            mode,
            gain,
            gain_db,
            block_size,
            sample_rate,
            channels,
            config,
            json,
        } => {
            let options = commands::process::ProcessOptions {
                input,
                output,
                config,
                overrides: ConfigOverrides {
                    decode_mode: mode,
                    block_size,
                    gain,
                    gain_db,
                    sample_rate,
                    channels,
                },
            };
            commands::process::run(&options, json)
        }
        Commands::Hash { input, json } => commands::hash::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["wavpcm", "inspect", "--input", "a.wav"]).unwrap();
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "a.wav");
                assert!(!json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_parses_process_defaults() {
        let cli =
            Cli::try_parse_from(["wavpcm", "process", "-i", "in.wav", "-o", "out.wav"]).unwrap();
        match cli.command {
            Commands::Process {
                input,
                output,
                mode,
                gain,
                gain_db,
                block_size,
                config,
                json,
                ..
            } => {
                assert_eq!(input, "in.wav");
                assert_eq!(gain_db, None);
                assert_eq!(output, "out.wav");
                assert_eq!(mode, None);
                assert_eq!(gain, None);
                assert_eq!(block_size, None);
                assert_eq!(config, None);
                assert!(!json);
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_cli_parses_process_overrides() {
        let cli = Cli::try_parse_from([
            "wavpcm",
            "process",
            "--input",
            "in.wav",
            "--output",
            "out.wav",
            "--mode",
            "strict",
            "--gain",
            "0.5",
            "--block-size",
            "256",
            "--sample-rate",
            "16000",
            "--channels",
            "1",
            "--config",
            "codec.json",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Process {
                mode,
                gain,
                block_size,
                sample_rate,
                channels,
                config,
                json,
                ..
            } => {
                assert_eq!(mode, Some(DecodeMode::Strict));
                assert_eq!(gain, Some(0.5));
                assert_eq!(block_size, Some(256));
                assert_eq!(sample_rate, Some(16000));
                assert_eq!(channels, Some(1));
                assert_eq!(config.as_deref(), Some("codec.json"));
                assert!(json);
            }
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_cli_parses_negative_gain_db() {
        let cli = Cli::try_parse_from([
            "wavpcm", "process", "-i", "in.wav", "-o", "out.wav", "--gain-db", "-6",
        ])
        .unwrap();
        match cli.command {
            Commands::Process { gain_db, .. } => assert_eq!(gain_db, Some(-6.0)),
            _ => panic!("expected process command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from([
            "wavpcm", "process", "-i", "in.wav", "-o", "out.wav", "--mode", "fast",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_hash_with_json() {
        let cli = Cli::try_parse_from(["wavpcm", "hash", "-i", "a.wav", "--json"]).unwrap();
        match cli.command {
            Commands::Hash { input, json } => {
                assert_eq!(input, "a.wav");
                assert!(json);
            }
            _ => panic!("expected hash command"),
        }
    }

    #[test]
    fn test_cli_requires_output_for_process() {
        assert!(Cli::try_parse_from(["wavpcm", "process", "-i", "in.wav"]).is_err());
    }
}
