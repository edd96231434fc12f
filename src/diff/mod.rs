use crate::{
    format::{LineFormatter, Markers},
    matcher::best_run,
    options::MinRun,
    range::Range,
    tracing_macros::debug,
    utils::Classifier,
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Display};

mod text;
#[cfg(test)]
mod tests;

pub use text::{DiffType, Span};

/// A collection of options for modifying the way a diff is performed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    min_run_seq: MinRun,
    min_run_chars: MinRun,
    markers: Markers,
}

impl DiffOptions {
    /// Construct a new `DiffOptions` with default settings
    ///
    /// ## Defaults
    /// * min_run_seq = 1
    /// * min_run_chars = 3
    /// * markers = [`Markers::default()`]
    pub fn new() -> Self {
        Self {
            min_run_seq: MinRun::DEFAULT_SEQ,
            min_run_chars: MinRun::DEFAULT_CHARS,
            markers: Markers::default(),
        }
    }

    /// Set the minimum number of consecutive equal elements needed to line up two sequences
    pub fn set_min_run_seq(&mut self, min_run: MinRun) -> &mut Self {
        self.min_run_seq = min_run;
        self
    }

    /// Set the minimum number of consecutive equal characters needed to line up two strings
    pub fn set_min_run_chars(&mut self, min_run: MinRun) -> &mut Self {
        self.min_run_chars = min_run;
        self
    }

    /// Set the markers used to bracket differences
    pub fn set_markers(&mut self, markers: Markers) -> &mut Self {
        self.markers = markers;
        self
    }

    pub fn min_run_seq(&self) -> MinRun {
        self.min_run_seq
    }

    pub fn min_run_chars(&self) -> MinRun {
        self.min_run_chars
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Returns a [`LineFormatter`] using the same markers as these options
    pub fn formatter(&self) -> LineFormatter<'_> {
        LineFormatter::new(&self.markers)
    }

    /// Compute the character level differences between two strings
    pub fn str_spans<'a>(&self, got: &'a str, want: &'a str) -> Vec<Span<'a>> {
        text::spans(got, want, self.min_run_chars.get())
    }

    /// Produce a single string showing the differences between `got` and `want`, as selected by
    /// `dtype`.
    ///
    /// Identical strings are returned unchanged.
    pub fn diff_str(&self, got: &str, want: &str, dtype: DiffType) -> String {
        text::render(&self.str_spans(got, want), dtype, &self.markers)
    }

    /// Diff two slices of elements, comparing them with `PartialEq` and showing them with
    /// `Display`
    pub fn diff_slice<T>(&self, got: &[T], want: &[T]) -> SequenceDiff
    where
        T: PartialEq + Display,
    {
        self.diff_slice_by(got, want, T::eq, T::to_string)
    }

    /// Diff two slices of elements using the provided equality and stringify functions.
    ///
    /// `stringify` is only used to show elements, and to compute character level differences
    /// between elements that don't line up. A pair which `eq` considers different but which
    /// stringify to the same text is marked as changed in full.
    pub fn diff_slice_by<T, E, S>(&self, got: &[T], want: &[T], eq: E, stringify: S) -> SequenceDiff
    where
        E: Fn(&T, &T) -> bool,
        S: Fn(&T) -> String,
    {
        let seq = SeqDiffer {
            options: self,
            eq,
            stringify,
        };

        let mut lines = Vec::new();
        let changed = seq.conquer(Range::new(got, ..), Range::new(want, ..), &mut lines);

        debug!(
            got_len = got.len(),
            want_len = want.len(),
            lines = lines.len(),
            changed,
            "sequence diff"
        );

        SequenceDiff { lines, changed }
    }

    /// Diff two texts line by line.
    ///
    /// Lines are compared including their terminator and shown without it, so a line that only
    /// differs in its `\r\n` or a missing final `\n` is shown as a change of the whole line.
    pub fn diff_lines(&self, got: &str, want: &str) -> SequenceDiff {
        let mut classifier = Classifier::default();
        let got = classifier.classify_lines(got);
        let want = classifier.classify_lines(want);

        self.diff_slice_by(&got, &want, |a, b| a.id == b.id, |t| t.content().to_string())
    }

    /// Produce a report of the differences between two slices, ready to be appended to a test
    /// failure message.
    ///
    /// The report starts with a summary line holding `title` and the length of both slices,
    /// followed by one formatted line per [`DiffLine`]. When the slices don't differ the report is
    /// empty.
    pub fn report<T>(&self, title: &str, got: &[T], want: &[T]) -> Vec<String>
    where
        T: PartialEq + Display,
    {
        self.report_by(title, got, want, T::eq, T::to_string)
    }

    /// Like [`DiffOptions::report`] but using the provided equality and stringify functions
    pub fn report_by<T, E, S>(
        &self,
        title: &str,
        got: &[T],
        want: &[T],
        eq: E,
        stringify: S,
    ) -> Vec<String>
    where
        E: Fn(&T, &T) -> bool,
        S: Fn(&T) -> String,
    {
        let diff = self.diff_slice_by(got, want, eq, stringify);
        if !diff.has_changes() {
            return Vec::new();
        }

        let f = self.formatter();
        let width = diff.number_width();

        let mut report = Vec::with_capacity(diff.lines.len() + 1);
        report.push(f.fmt_summary(title, got.len(), want.len()).to_string());
        report.extend(
            diff.lines
                .iter()
                .map(|line| f.fmt_line(line, width).to_string()),
        );
        report
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Diff two strings using the default options. See [`DiffOptions::diff_str`].
///
/// ```
/// use rundiff::{DiffOptions, DiffType, Markers, MinRun};
///
/// let mut options = DiffOptions::new();
/// options
///     .set_min_run_chars(MinRun::new(1).unwrap())
///     .set_markers(Markers::PLAIN);
///
/// assert_eq!(options.diff_str("abc", "axc", DiffType::Merge), "a<{+b+}[-x-]>c");
/// assert_eq!(options.diff_str("abc", "axc", DiffType::Want), "a<x>c");
/// ```
pub fn diff_str(got: &str, want: &str, dtype: DiffType) -> String {
    DiffOptions::default().diff_str(got, want, dtype)
}

/// Diff two slices using the default options. See [`DiffOptions::diff_slice`].
///
/// ```
/// use rundiff::{DiffLine, diff_slice};
///
/// let diff = diff_slice(&[1, 2, 3], &[1, 3]);
/// assert!(diff.has_changes());
/// assert_eq!(
///     diff.lines()[1],
///     DiffLine::GotOnly { got: 1, text: "2".into() },
/// );
/// ```
pub fn diff_slice<T>(got: &[T], want: &[T]) -> SequenceDiff
where
    T: PartialEq + Display,
{
    DiffOptions::default().diff_slice(got, want)
}

/// Diff two texts line by line using the default options. See [`DiffOptions::diff_lines`].
pub fn diff_lines(got: &str, want: &str) -> SequenceDiff {
    DiffOptions::default().diff_lines(got, want)
}

/// One line of a [`SequenceDiff`].
///
/// Line numbers are 0-based positions in the got and want inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffLine {
    /// An element present, and equal, on both sides
    Same {
        got: usize,
        want: usize,
        text: String,
    },
    /// A pair of elements which differ. `text` is the character level diff of the two, rendered
    /// in [`DiffType::Merge`] form.
    Changed {
        got: usize,
        want: usize,
        got_text: String,
        want_text: String,
        text: String,
    },
    /// An element only present in got
    GotOnly { got: usize, text: String },
    /// An element only present in want
    WantOnly { want: usize, text: String },
}

impl DiffLine {
    /// The got line number, if this line has a got side
    pub fn got_line(&self) -> Option<usize> {
        match self {
            DiffLine::Same { got, .. }
            | DiffLine::Changed { got, .. }
            | DiffLine::GotOnly { got, .. } => Some(*got),
            DiffLine::WantOnly { .. } => None,
        }
    }

    /// The want line number, if this line has a want side
    pub fn want_line(&self) -> Option<usize> {
        match self {
            DiffLine::Same { want, .. }
            | DiffLine::Changed { want, .. }
            | DiffLine::WantOnly { want, .. } => Some(*want),
            DiffLine::GotOnly { .. } => None,
        }
    }

    /// The text to show for this line, without any markers added by a [`LineFormatter`]
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Same { text, .. }
            | DiffLine::Changed { text, .. }
            | DiffLine::GotOnly { text, .. }
            | DiffLine::WantOnly { text, .. } => text,
        }
    }

    /// The got element shown by this line, if any
    pub fn got_text(&self) -> Option<&str> {
        match self {
            DiffLine::Same { text, .. } | DiffLine::GotOnly { text, .. } => Some(text),
            DiffLine::Changed { got_text, .. } => Some(got_text),
            DiffLine::WantOnly { .. } => None,
        }
    }

    /// The want element shown by this line, if any
    pub fn want_text(&self) -> Option<&str> {
        match self {
            DiffLine::Same { text, .. } | DiffLine::WantOnly { text, .. } => Some(text),
            DiffLine::Changed { want_text, .. } => Some(want_text),
            DiffLine::GotOnly { .. } => None,
        }
    }
}

/// The result of diffing two sequences
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceDiff {
    lines: Vec<DiffLine>,
    changed: bool,
}

impl SequenceDiff {
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<DiffLine> {
        self.lines
    }

    /// Returns `true` if the two sequences differ
    pub fn has_changes(&self) -> bool {
        self.changed
    }

    /// The number of digits needed to show the largest line number in this diff
    pub fn number_width(&self) -> usize {
        let max = self
            .lines
            .iter()
            .flat_map(|line| line.got_line().into_iter().chain(line.want_line()))
            .max()
            .unwrap_or(0);

        let mut width = 1;
        let mut n = max;
        while n >= 10 {
            n /= 10;
            width += 1;
        }
        width
    }
}

impl fmt::Display for SequenceDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", LineFormatter::new(&Markers::NONE).fmt_diff(self))
    }
}

struct SeqDiffer<'o, E, S> {
    options: &'o DiffOptions,
    eq: E,
    stringify: S,
}

impl<E, S> SeqDiffer<'_, E, S> {
    // Diff the two ranges, pushing the resulting lines onto `lines`. Returns `true` if the ranges
    // differ.
    fn conquer<T>(&self, got: Range<'_, [T]>, want: Range<'_, [T]>, lines: &mut Vec<DiffLine>) -> bool
    where
        E: Fn(&T, &T) -> bool,
        S: Fn(&T) -> String,
    {
        if got.eq_by(want, &self.eq) {
            lines.extend(got.enumerate().zip(want.enumerate()).map(
                |((got, item), (want, _))| DiffLine::Same {
                    got,
                    want,
                    text: (self.stringify)(item),
                },
            ));
            return false;
        }

        if got.is_empty() || want.is_empty() {
            self.one_sided(got, want, lines);
            return true;
        }

        let found = best_run(
            got.as_slice(),
            want.as_slice(),
            self.options.min_run_seq.get(),
            &self.eq,
        );

        if found.is_none() {
            self.changed(got, want, lines);
            return true;
        }

        let prefix = self.conquer(
            got.slice(..found.got_start),
            want.slice(..found.want_start),
            lines,
        );

        let run_got = got.slice(found.got_start..found.got_end());
        let run_want = want.slice(found.want_start..found.want_end());
        lines.extend(run_got.enumerate().zip(run_want.enumerate()).map(
            |((got, item), (want, _))| DiffLine::Same {
                got,
                want,
                text: (self.stringify)(item),
            },
        ));

        let suffix = self.conquer(
            got.slice(found.got_end()..),
            want.slice(found.want_end()..),
            lines,
        );

        prefix || suffix
    }

    // Pair up elements position by position, rendering each pair as a character level diff.
    // Whatever the longer side has left over has no counterpart and is emitted as is.
    fn changed<T>(&self, got: Range<'_, [T]>, want: Range<'_, [T]>, lines: &mut Vec<DiffLine>)
    where
        S: Fn(&T) -> String,
    {
        for ((got, got_item), (want, want_item)) in got.enumerate().zip(want.enumerate()) {
            let got_text = (self.stringify)(got_item);
            let want_text = (self.stringify)(want_item);
            let text = if got_text == want_text {
                let change = Span::Change {
                    got: &got_text,
                    want: &want_text,
                };
                text::render(&[change], DiffType::Merge, &self.options.markers)
            } else {
                self.options
                    .diff_str(&got_text, &want_text, DiffType::Merge)
            };
            lines.push(DiffLine::Changed {
                got,
                want,
                got_text,
                want_text,
                text,
            });
        }

        let overlap = got.len().min(want.len());
        self.one_sided(got.slice(overlap..), want.slice(overlap..), lines);
    }

    fn one_sided<T>(&self, got: Range<'_, [T]>, want: Range<'_, [T]>, lines: &mut Vec<DiffLine>)
    where
        S: Fn(&T) -> String,
    {
        lines.extend(got.enumerate().map(|(got, item)| DiffLine::GotOnly {
            got,
            text: (self.stringify)(item),
        }));
        lines.extend(want.enumerate().map(|(want, item)| DiffLine::WantOnly {
            want,
            text: (self.stringify)(item),
        }));
    }
}
