#![no_main]

use libfuzzer_sys::fuzz_target;
use rundiff::{DiffLine, DiffOptions, Markers, MinRun};

fuzz_target!(|data: (Vec<u8>, Vec<u8>, u8)| {
    let (got, want, min_run) = data;
    let Ok(min_run) = MinRun::new(usize::from(min_run % 5) + 1) else {
        return;
    };

    let mut options = DiffOptions::new();
    options.set_markers(Markers::PLAIN).set_min_run_seq(min_run);

    let diff = options.diff_slice(&got, &want);
    assert_eq!(diff.has_changes(), got != want);

    let got_lines: Vec<_> = diff.lines().iter().filter_map(DiffLine::got_line).collect();
    let want_lines: Vec<_> = diff.lines().iter().filter_map(DiffLine::want_line).collect();
    assert!(got_lines.iter().copied().eq(0..got.len()));
    assert!(want_lines.iter().copied().eq(0..want.len()));
});
