#![no_main]

use collada::parser::parse_reader;
use collada::ParserConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected for most inputs; only panics are failures
    let _ = parse_reader(data, ParserConfig::default());
    let _ = parse_reader(
        data,
        ParserConfig::new()
            .with_strict_array_counts(false)
            .with_max_depth(32),
    );
});
