#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the word tokenizer.
///
/// Tokens must always concatenate back to the input line.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let tokens = diff_checker::diff::split_words(s);
        assert_eq!(tokens.concat(), s);
    }
});
