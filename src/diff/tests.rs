use super::*;
use crate::MinRun;
use alloc::{string::String, vec, vec::Vec};

fn plain() -> DiffOptions {
    let mut options = DiffOptions::new();
    options.set_markers(Markers::PLAIN);
    options
}

fn same(got: usize, want: usize, text: &str) -> DiffLine {
    DiffLine::Same {
        got,
        want,
        text: text.into(),
    }
}

fn changed(got: usize, want: usize, pair: (&str, &str), text: &str) -> DiffLine {
    DiffLine::Changed {
        got,
        want,
        got_text: pair.0.into(),
        want_text: pair.1.into(),
        text: text.into(),
    }
}

fn got_only(got: usize, text: &str) -> DiffLine {
    DiffLine::GotOnly {
        got,
        text: text.into(),
    }
}

fn want_only(want: usize, text: &str) -> DiffLine {
    DiffLine::WantOnly {
        want,
        text: text.into(),
    }
}

// Check that both inputs can be rebuilt, in order, from the lines of a diff
fn assert_reconstructs<T: Display>(diff: &SequenceDiff, got: &[T], want: &[T]) {
    let got_side: Vec<_> = diff.lines().iter().filter_map(DiffLine::got_text).collect();
    let want_side: Vec<_> = diff.lines().iter().filter_map(DiffLine::want_text).collect();
    let got: Vec<String> = got.iter().map(ToString::to_string).collect();
    let want: Vec<String> = want.iter().map(ToString::to_string).collect();
    assert_eq!(got_side, got);
    assert_eq!(want_side, want);

    let got_lines: Vec<_> = diff.lines().iter().filter_map(DiffLine::got_line).collect();
    let want_lines: Vec<_> = diff.lines().iter().filter_map(DiffLine::want_line).collect();
    assert_eq!(got_lines, (0..got.len()).collect::<Vec<_>>());
    assert_eq!(want_lines, (0..want.len()).collect::<Vec<_>>());
}

#[test]
fn identity() {
    let items = ["a", "b", "c"];
    let diff = plain().diff_slice(&items, &items);
    assert!(!diff.has_changes());
    assert_eq!(
        diff.lines(),
        [same(0, 0, "a"), same(1, 1, "b"), same(2, 2, "c")]
    );
}

#[test]
fn empty_vs_empty() {
    let diff = plain().diff_slice::<u8>(&[], &[]);
    assert!(!diff.has_changes());
    assert!(diff.lines().is_empty());
    assert_eq!(diff.to_string(), "");
}

#[test]
fn pure_insertion_and_deletion() {
    let diff = plain().diff_slice(&[], &[1, 2]);
    assert!(diff.has_changes());
    assert_eq!(diff.lines(), [want_only(0, "1"), want_only(1, "2")]);

    let diff = plain().diff_slice(&[1, 2, 3], &[]);
    assert!(diff.has_changes());
    assert_eq!(
        diff.lines(),
        [got_only(0, "1"), got_only(1, "2"), got_only(2, "3")]
    );
}

#[test]
fn single_changed_element() {
    let diff = plain().diff_slice(&[1, 2, 3], &[1, 4, 3]);
    assert!(diff.has_changes());
    assert_eq!(
        diff.lines(),
        [
            same(0, 0, "1"),
            changed(1, 1, ("2", "4"), "<{+2+}[-4-]>"),
            same(2, 2, "3"),
        ]
    );
}

#[test]
fn unequal_lengths_without_a_shared_run() {
    let diff = plain().diff_slice(&[1, 2], &[9, 9, 9]);
    assert!(diff.has_changes());
    assert_eq!(
        diff.lines(),
        [
            changed(0, 0, ("1", "9"), "<{+1+}[-9-]>"),
            changed(1, 1, ("2", "9"), "<{+2+}[-9-]>"),
            want_only(2, "9"),
        ]
    );

    let diff = plain().diff_slice(&[5, 6, 7], &[1]);
    assert_eq!(
        diff.lines(),
        [
            changed(0, 0, ("5", "1"), "<{+5+}[-1-]>"),
            got_only(1, "6"),
            got_only(2, "7"),
        ]
    );
}

#[test]
fn changed_elements_use_character_threshold() {
    let mut options = plain();
    options.set_min_run_chars(MinRun::new(2).unwrap());
    let diff = options.diff_slice(&["apple pie"], &["apple tart"]);
    assert_eq!(
        diff.lines(),
        [changed(
            0,
            0,
            ("apple pie", "apple tart"),
            "apple <{+pie+}[-tart-]>"
        )]
    );
}

#[test]
fn line_numbers_follow_each_side() {
    let got = ["x", "a", "b", "c", "y", "z"];
    let want = ["a", "b", "c", "q", "z"];
    let diff = plain().diff_slice(&got, &want);

    assert_eq!(
        diff.lines(),
        [
            got_only(0, "x"),
            same(1, 0, "a"),
            same(2, 1, "b"),
            same(3, 2, "c"),
            changed(4, 3, ("y", "q"), "<{+y+}[-q-]>"),
            same(5, 4, "z"),
        ]
    );
    assert_reconstructs(&diff, &got, &want);
}

#[test]
fn longest_run_is_the_anchor() {
    // "c d e" is the longest run, so the leading "a b" on the want side can't line up with the
    // trailing "a b" on the got side
    let got = ["c", "d", "e", "a", "b"];
    let want = ["a", "b", "c", "d", "e"];
    let diff = plain().diff_slice(&got, &want);

    assert_eq!(
        diff.lines(),
        [
            want_only(0, "a"),
            want_only(1, "b"),
            same(0, 2, "c"),
            same(1, 3, "d"),
            same(2, 4, "e"),
            got_only(3, "a"),
            got_only(4, "b"),
        ]
    );
}

#[test]
fn sequence_threshold_rejects_short_runs() {
    let got = [1, 2, 3, 4];
    let want = [0, 2, 3, 5];

    let diff = plain().diff_slice(&got, &want);
    assert_eq!(diff.lines()[1], same(1, 1, "2"));
    assert_eq!(diff.lines()[2], same(2, 2, "3"));

    let mut options = plain();
    options.set_min_run_seq(MinRun::new(3).unwrap());
    let diff = options.diff_slice(&got, &want);
    assert!(
        diff.lines()
            .iter()
            .all(|line| matches!(line, DiffLine::Changed { .. }))
    );
    assert_eq!(diff.lines().len(), 4);
}

#[test]
fn custom_equality_and_stringify() {
    #[derive(Debug)]
    struct Entry {
        key: &'static str,
        hits: u32,
    }

    let got = [
        Entry { key: "a", hits: 1 },
        Entry { key: "b", hits: 7 },
    ];
    let want = [
        Entry { key: "a", hits: 2 },
        Entry { key: "c", hits: 7 },
    ];

    let diff = plain().diff_slice_by(
        &got,
        &want,
        |a, b| a.key == b.key,
        |e| alloc::format!("{}={}", e.key, e.hits),
    );

    assert_eq!(diff.lines()[0], same(0, 0, "a=1"));
    // "=7" is shorter than the default character threshold
    assert_eq!(
        diff.lines()[1],
        changed(1, 1, ("b=7", "c=7"), "<{+b=7+}[-c=7-]>")
    );
}

#[test]
fn reconstruction() {
    let cases: [(&[u32], &[u32]); 6] = [
        (&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]),
        (&[1, 1, 1], &[1, 1]),
        (&[1, 2, 1, 2, 1], &[2, 1, 2]),
        (&[], &[3]),
        (&[7, 8, 9, 10], &[0, 7, 8, 0, 9, 10, 0]),
        (&[3, 1, 4, 1, 5, 9, 2, 6], &[2, 7, 1, 8, 2, 8, 1, 8]),
    ];

    for (got, want) in cases {
        for min_run in 1..=5 {
            let mut options = plain();
            options.set_min_run_seq(MinRun::new(min_run).unwrap());
            let diff = options.diff_slice(got, want);
            assert_eq!(diff.has_changes(), got != want);
            assert_reconstructs(&diff, got, want);
        }
    }
}

#[test]
fn diff_lines_by_text() {
    let got = "one\ntwo\nthree\n";
    let want = "one\n2\nthree\nfour\n";
    let diff = plain().diff_lines(got, want);

    assert_eq!(
        diff.lines(),
        [
            same(0, 0, "one"),
            changed(1, 1, ("two", "2"), "<{+two+}[-2-]>"),
            same(2, 2, "three"),
            want_only(3, "four"),
        ]
    );
}

#[test]
fn diff_lines_missing_final_newline() {
    let diff = plain().diff_lines("a\nb\n", "a\nb");
    assert!(diff.has_changes());
    assert_eq!(
        diff.lines(),
        [same(0, 0, "a"), changed(1, 1, ("b", "b"), "<{+b+}[-b-]>")]
    );
}

#[test]
fn diff_lines_crlf_against_lf() {
    let diff = plain().diff_lines("a\r\nb\r\n", "a\nb\n");
    assert!(diff.has_changes());
    assert_eq!(
        diff.lines(),
        [
            changed(0, 0, ("a", "a"), "<{+a+}[-a-]>"),
            changed(1, 1, ("b", "b"), "<{+b+}[-b-]>"),
        ]
    );
}

#[test]
fn equal_text_with_unequal_elements_is_marked() {
    let diff = plain().diff_slice_by(&[1, 2], &[1, 3], |a, b| a == b, |_| String::from("x"));
    assert!(diff.has_changes());
    assert_eq!(
        diff.lines(),
        [same(0, 0, "x"), changed(1, 1, ("x", "x"), "<{+x+}[-x-]>")]
    );
}

#[test]
fn report() {
    let options = plain();
    assert!(options.report("Numbers", &[1, 2], &[1, 2]).is_empty());

    let report = options.report("Numbers", &[1, 2, 3], &[1, 3]);
    assert_eq!(
        report,
        vec![
            "Numbers: got 3, want 2",
            "0 0 | 1",
            "1   | {+2+}",
            "2 1 | 3",
        ]
    );
}
