#![no_main]

use libfuzzer_sys::fuzz_target;
use wavpcm_codec::{decode, decode_strict, encode_with_format, WavFormat, WavHeader};

fuzz_target!(|data: &[u8]| {
    if let Ok(samples) = decode(data) {
        assert_eq!(samples.len(), (data.len() - 44) / 2);
    }

    let _ = WavHeader::parse(data);

    // Whatever the strict decoder accepts must survive a re-encode.
    if let Ok(decoded) = decode_strict(data) {
        let format = WavFormat::new(decoded.format.sample_rate, decoded.format.channels, 16);
        let wav = encode_with_format(&decoded.samples, &format);
        assert_eq!(wav.len(), 44 + decoded.samples.len() * 2);
        assert!(WavHeader::parse(&wav).map(|h| h.is_consistent()).unwrap_or(false));
    }
});
