#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the line aligner and the report renderers.
///
/// The input is split at the first NUL byte into texts A and B.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (a, b) = s.split_once('\0').unwrap_or((s, ""));
        let result = diff_checker::DiffEngine::new().diff(a, b);
        for line in result.numbered() {
            assert!(line.kind.is_some());
        }
        let reporter = diff_checker::reports::create_reporter(diff_checker::ReportFormat::Console);
        let _ = reporter.generate_diff_report(&result, &Default::default());
    }
});
