#![no_main]

use libfuzzer_sys::fuzz_target;
use rundiff::{DiffOptions, DiffType, Markers, MinRun, Span};

fuzz_target!(|data: (&str, &str, u8)| {
    let (got, want, min_run) = data;
    let Ok(min_run) = MinRun::new(usize::from(min_run % 5) + 1) else {
        return;
    };

    let mut options = DiffOptions::new();
    options.set_markers(Markers::NONE).set_min_run_chars(min_run);

    let spans = options.str_spans(got, want);
    let got_side: String = spans.iter().filter_map(Span::got).collect();
    let want_side: String = spans.iter().filter_map(Span::want).collect();
    assert_eq!(got_side, got);
    assert_eq!(want_side, want);

    // Without markers the got and want renderings are the inputs themselves
    assert_eq!(options.diff_str(got, want, DiffType::Got), got);
    assert_eq!(options.diff_str(got, want, DiffType::Want), want);
});
