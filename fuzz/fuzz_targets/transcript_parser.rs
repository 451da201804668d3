#![no_main]

use coqprof::config::ProfileConfig;
use coqprof::pipeline::profile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // First line is the source text, the rest is the transcript.
        // Any outcome is fine as long as nothing panics.
        let (source, transcript) = input.split_once('\n').unwrap_or((input, ""));
        let _ = profile(transcript, source, "fuzz.v", &ProfileConfig::default());
    }
});
