//! Character level diffs of two strings

use crate::{
    format::Markers,
    matcher::best_run,
    range::Range,
    tracing_macros::debug,
};
use alloc::{string::String, vec::Vec};

/// Selects which side of a string diff is shown
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiffType {
    /// Show the want string, marking what the got string lacks or changes
    Want,
    /// Show the got string, marking what it adds or changes
    Got,
    /// Show both strings interleaved
    #[default]
    Merge,
}

/// A piece of a character level diff.
///
/// The got side of a diff is made up of the `Equal`, `Insert` and `Change::got` spans in order;
/// the want side of the `Equal`, `Delete` and `Change::want` spans.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Span<'a> {
    /// Text present on both sides
    Equal(&'a str),
    /// Text only present in the got string
    Insert(&'a str),
    /// Text only present in the want string
    Delete(&'a str),
    /// Text which differs, with no run of equal characters long enough to line the two up
    Change { got: &'a str, want: &'a str },
}

impl<'a> Span<'a> {
    /// The text this span contributes to the got string, if any
    pub fn got(&self) -> Option<&'a str> {
        match *self {
            Span::Equal(s) | Span::Insert(s) => Some(s),
            Span::Change { got, .. } => Some(got),
            Span::Delete(_) => None,
        }
    }

    /// The text this span contributes to the want string, if any
    pub fn want(&self) -> Option<&'a str> {
        match *self {
            Span::Equal(s) | Span::Delete(s) => Some(s),
            Span::Change { want, .. } => Some(want),
            Span::Insert(_) => None,
        }
    }
}

// A string alongside the byte position of each of its characters. Diffs are computed over
// characters so that a multi-byte character is never split.
struct Chars<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> Chars<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
        }
    }

    fn range(&self) -> Range<'_, [(usize, char)]> {
        Range::new(&self.chars, ..)
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.chars
            .get(idx)
            .map_or(self.text.len(), |&(offset, _)| offset)
    }

    fn as_str(&self, range: Range<'_, [(usize, char)]>) -> &'a str {
        &self.text[self.byte_offset(range.offset())..self.byte_offset(range.end())]
    }
}

fn same_char(a: &(usize, char), b: &(usize, char)) -> bool {
    a.1 == b.1
}

pub(crate) fn spans<'a>(got: &'a str, want: &'a str, min_run: usize) -> Vec<Span<'a>> {
    let mut solution = Vec::new();
    if got == want {
        if !got.is_empty() {
            solution.push(Span::Equal(got));
        }
        return solution;
    }

    let got = Chars::new(got);
    let want = Chars::new(want);
    conquer(&got, got.range(), &want, want.range(), min_run, &mut solution);
    solution
}

fn conquer<'a>(
    got: &Chars<'a>,
    got_range: Range<'_, [(usize, char)]>,
    want: &Chars<'a>,
    want_range: Range<'_, [(usize, char)]>,
    min_run: usize,
    solution: &mut Vec<Span<'a>>,
) {
    if got_range.eq_by(want_range, same_char) {
        if !got_range.is_empty() {
            solution.push(Span::Equal(got.as_str(got_range)));
        }
    } else if got_range.is_empty() {
        solution.push(Span::Delete(want.as_str(want_range)));
    } else if want_range.is_empty() {
        solution.push(Span::Insert(got.as_str(got_range)));
    } else {
        let found = best_run(
            got_range.as_slice(),
            want_range.as_slice(),
            min_run,
            same_char,
        );

        if found.is_none() {
            solution.push(Span::Change {
                got: got.as_str(got_range),
                want: want.as_str(want_range),
            });
            return;
        }

        let run = got_range.slice(found.got_start..found.got_end());
        conquer(
            got,
            got_range.slice(..found.got_start),
            want,
            want_range.slice(..found.want_start),
            min_run,
            solution,
        );
        solution.push(Span::Equal(got.as_str(run)));
        conquer(
            got,
            got_range.slice(found.got_end()..),
            want,
            want_range.slice(found.want_end()..),
            min_run,
            solution,
        );
    }
}

/// Render a list of spans as a single string, using `markers` to bracket the differences.
pub(crate) fn render(spans: &[Span<'_>], dtype: DiffType, markers: &Markers) -> String {
    let mut buf = String::new();

    for span in spans {
        match (*span, dtype) {
            (Span::Equal(s), _) => buf.push_str(s),

            (Span::Insert(_), DiffType::Want) | (Span::Delete(_), DiffType::Got) => {}
            (Span::Insert(got), _) => markers.insert.push_wrapped(&mut buf, got),
            (Span::Delete(want), _) => markers.delete.push_wrapped(&mut buf, want),

            (Span::Change { want, .. }, DiffType::Want) => {
                markers.change.push_wrapped(&mut buf, want)
            }
            (Span::Change { got, .. }, DiffType::Got) => markers.change.push_wrapped(&mut buf, got),
            (Span::Change { got, want }, DiffType::Merge) => {
                buf.push_str(&markers.change.on);
                markers.insert.push_wrapped(&mut buf, got);
                markers.delete.push_wrapped(&mut buf, want);
                buf.push_str(&markers.change.off);
            }
        }
    }

    debug!(spans = spans.len(), ?dtype, "rendered string diff");

    buf
}
