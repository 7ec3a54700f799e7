//! End-to-end tests for the wavpcm CLI commands.
//!
//! Each test writes real files into a temp directory and drives the command
//! functions the binary dispatches to.

use pretty_assertions::assert_eq;
use std::process::ExitCode;

use wavpcm_cli::commands::hash::{self, hash_file};
use wavpcm_cli::commands::inspect::{self, inspect_file};
use wavpcm_cli::commands::json_output::{error_codes, CommandOutput, ProcessResult};
use wavpcm_cli::commands::process::{self, process_file, ProcessOptions};
use wavpcm_cli::config::ConfigOverrides;
use wavpcm_codec::{decode, decode_strict, DecodeMode, WavFormat, HEADER_SIZE};
use wavpcm_tests::fixtures::{fmt_chunk, payload_hash, payload_i16, riff, sine, WavFixture};

fn process_options(fixture: &WavFixture, input: &str, output: &str) -> ProcessOptions {
    ProcessOptions {
        input: fixture.file(input),
        output: fixture.file(output),
        ..ProcessOptions::default()
    }
}

// ============================================================================
// Process
// ============================================================================

#[test]
fn process_legacy_default_pipeline() {
    let fixture = WavFixture::new();
    let samples = sine(2000, 440.0, 44100, 0.8);
    fixture.add_wav("in.wav", &samples, &WavFormat::stereo(44100));

    let result = process_file(&process_options(&fixture, "in.wav", "out.wav")).unwrap();
    let output = fixture.read("out.wav");

    assert_eq!(result.decode_mode, "legacy");
    assert_eq!(result.format, WavFormat::stereo(44100));
    assert_eq!(result.num_samples, 2000);
    assert_eq!(output.len(), HEADER_SIZE + 4000);
    assert_eq!(result.pcm_hash, payload_hash(&output));

    let decoded = decode(&output).unwrap();
    for (a, b) in samples.iter().zip(&decoded) {
        assert!((a - b).abs() <= 1.0 / 32767.0 + f32::EPSILON);
    }
}

#[test]
fn process_strict_reads_24_bit_source() {
    let fixture = WavFixture::new();
    // Two 24-bit samples: full-scale positive, then -half scale
    let data = [0xFF, 0xFF, 0x7F, 0x00, 0x00, 0xC0];
    fixture.add_raw(
        "in24.wav",
        &riff(&[(b"fmt ", fmt_chunk(1, 1, 48000, 24)), (b"data", data.to_vec())]),
    );

    let mut options = process_options(&fixture, "in24.wav", "out.wav");
    options.overrides.decode_mode = Some(DecodeMode::Strict);
    let result = process_file(&options).unwrap();

    assert_eq!(result.format, WavFormat::mono(48000));
    let values = payload_i16(&fixture.read("out.wav"));
    assert_eq!(values.len(), 2);
    assert_eq!(values[0], 32767);
    assert!((values[1] as i32 + 16384).abs() <= 1);
}

#[test]
fn process_strict_skips_extra_chunks() {
    let fixture = WavFixture::new();
    let pcm: Vec<u8> = [1000i16, -1000].iter().flat_map(|v| v.to_le_bytes()).collect();
    fixture.add_raw(
        "list.wav",
        &riff(&[
            (b"fmt ", fmt_chunk(1, 1, 8000, 16)),
            (b"LIST", b"INFOabc".to_vec()),
            (b"data", pcm.clone()),
        ]),
    );

    let mut options = process_options(&fixture, "list.wav", "out.wav");
    options.overrides.decode_mode = Some(DecodeMode::Strict);
    process_file(&options).unwrap();

    let values = payload_i16(&fixture.read("out.wav"));
    assert_eq!(values.len(), 2);
    assert!((values[0] as i32 - 1000).abs() <= 1);
    assert!((values[1] as i32 + 1000).abs() <= 1);
}

#[test]
fn process_config_file_and_flag_precedence() {
    let fixture = WavFixture::new();
    fixture.add_wav("in.wav", &[0.2; 10], &WavFormat::mono(8000));
    let config = fixture.add_config(
        "codec.json",
        &serde_json::json!({
            "gain": 0.5,
            "block_size": 4,
            "sample_rate": 16000,
            "channels": 1
        }),
    );

    let mut options = process_options(&fixture, "in.wav", "out.wav");
    options.config = Some(config.to_string_lossy().into_owned());
    options.overrides = ConfigOverrides {
        sample_rate: Some(22050),
        ..ConfigOverrides::default()
    };
    let result = process_file(&options).unwrap();

    assert_eq!(result.gain, 0.5);
    assert_eq!(result.block_size, 4);
    assert_eq!(result.format, WavFormat::mono(22050));
    for value in payload_i16(&fixture.read("out.wav")) {
        assert!((value as i32 - 3276).abs() <= 2);
    }
}

#[test]
fn process_rejects_bare_header_in_legacy_mode_only() {
    let fixture = WavFixture::new();
    fixture.add_wav("empty.wav", &[], &WavFormat::mono(8000));

    let err = process_file(&process_options(&fixture, "empty.wav", "out.wav")).unwrap_err();
    assert_eq!(err.code, error_codes::DECODE);
    assert_eq!(err.codec_code.as_deref(), Some("WAV_001"));

    let mut options = process_options(&fixture, "empty.wav", "out.wav");
    options.overrides.decode_mode = Some(DecodeMode::Strict);
    let result = process_file(&options).unwrap();
    assert_eq!(result.num_samples, 0);
    assert_eq!(fixture.read("out.wav").len(), HEADER_SIZE);
}

#[test]
fn process_json_output_shape() {
    let fixture = WavFixture::new();
    fixture.add_wav("in.wav", &[0.1, 0.2], &WavFormat::mono(8000));

    let output: CommandOutput<ProcessResult> =
        process_file(&process_options(&fixture, "in.wav", "out.wav")).into();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["decode_mode"], "legacy");
    assert_eq!(json["result"]["format"]["sample_rate"], 44100);
    assert_eq!(json["result"]["format"]["bits_per_sample"], 16);
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn process_run_exit_codes() {
    let fixture = WavFixture::new();
    fixture.add_wav("in.wav", &[0.1; 16], &WavFormat::mono(8000));

    let ok = process::run(&process_options(&fixture, "in.wav", "out.wav"), false).unwrap();
    assert_eq!(ok, ExitCode::SUCCESS);

    let failed = process::run(&process_options(&fixture, "missing.wav", "out.wav"), true).unwrap();
    assert_eq!(failed, ExitCode::from(1));
}

// ============================================================================
// Inspect
// ============================================================================

#[test]
fn inspect_reports_processed_output() {
    let fixture = WavFixture::new();
    fixture.add_wav("in.wav", &sine(441, 100.0, 44100, 0.5), &WavFormat::mono(44100));

    let mut options = process_options(&fixture, "in.wav", "out.wav");
    options.overrides.decode_mode = Some(DecodeMode::Strict);
    process_file(&options).unwrap();

    let result = inspect_file(&fixture.file("out.wav")).unwrap();
    assert_eq!(result.format, WavFormat::mono(44100));
    assert_eq!(result.num_frames, 441);
    assert!((result.duration_seconds - 0.01).abs() < 1e-9);
    assert!(result.canonical_header);
    assert_eq!(result.pcm_hash, payload_hash(&fixture.read("out.wav")));
}

#[test]
fn inspect_rejects_float_format() {
    let fixture = WavFixture::new();
    fixture.add_raw(
        "float.wav",
        &riff(&[(b"fmt ", fmt_chunk(3, 1, 8000, 32)), (b"data", vec![0u8; 8])]),
    );

    let err = inspect_file(&fixture.file("float.wav")).unwrap_err();
    assert_eq!(err.code, error_codes::DECODE);
    assert_eq!(err.codec_code.as_deref(), Some("WAV_006"));
    assert_eq!(inspect::run(&fixture.file("float.wav"), true).unwrap(), ExitCode::from(1));
}

// ============================================================================
// Hash
// ============================================================================

#[test]
fn hash_is_stable_across_processing_without_gain() {
    let fixture = WavFixture::new();
    fixture.add_wav("in.wav", &[0.0, 1.0, -1.0, 0.0], &WavFormat::mono(8000));

    let mut options = process_options(&fixture, "in.wav", "out.wav");
    options.overrides.decode_mode = Some(DecodeMode::Strict);
    process_file(&options).unwrap();

    // 0 and ±32767 survive decode/encode exactly
    let before = hash_file(&fixture.file("in.wav")).unwrap();
    let after = hash_file(&fixture.file("out.wav")).unwrap();
    assert_eq!(before.pcm_hash, after.pcm_hash);
    assert_eq!(hash::run(&fixture.file("out.wav"), false).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn hash_matches_strict_decoder_view_of_payload() {
    let fixture = WavFixture::new();
    let pcm: Vec<u8> = [7i16, -7, 300].iter().flat_map(|v| v.to_le_bytes()).collect();
    let wav = riff(&[
        (b"fmt ", fmt_chunk(1, 1, 8000, 16)),
        (b"junk", vec![0xAA; 5]),
        (b"data", pcm.clone()),
    ]);
    fixture.add_raw("junk.wav", &wav);

    let result = hash_file(&fixture.file("junk.wav")).unwrap();
    assert_eq!(result.pcm_hash, blake3::hash(&pcm).to_hex().to_string());
    assert_eq!(decode_strict(&wav).unwrap().samples.len(), 3);
}
