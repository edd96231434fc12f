mod markers;

pub use markers::{Marker, Markers};

use crate::diff::{DiffLine, SequenceDiff};
use core::fmt::{Display, Formatter, Result};

/// Struct used to render a [`SequenceDiff`] as lines of text.
///
/// Each line shows the got line number, the want line number, a separator and the content:
///
/// ```text
/// 0 0 | 1
/// 1 1 | <{+2+}[-4-]>
///   2 | [-5-]
/// ```
///
/// A line without a got or want side leaves that column blank. Content only present in got is
/// wrapped in the insert markers and content only present in want in the delete markers.
#[derive(Debug)]
pub struct LineFormatter<'m> {
    markers: &'m Markers,
}

impl<'m> LineFormatter<'m> {
    /// Construct a new formatter
    pub fn new(markers: &'m Markers) -> Self {
        Self { markers }
    }

    /// Returns a `Display` impl which can be used to print a whole diff, one line per
    /// [`DiffLine`] each terminated by a newline
    pub fn fmt_diff<'a>(&'a self, diff: &'a SequenceDiff) -> impl Display + 'a {
        DiffDisplay { f: self, diff }
    }

    /// Returns a `Display` impl for a single line, with line numbers padded to `width`
    pub fn fmt_line<'a>(&'a self, line: &'a DiffLine, width: usize) -> impl Display + 'a {
        LineDisplay {
            f: self,
            line,
            width,
        }
    }

    /// Returns a `Display` impl for the summary line heading a report
    pub fn fmt_summary<'a>(
        &'a self,
        title: &'a str,
        got_len: usize,
        want_len: usize,
    ) -> impl Display + 'a {
        SummaryDisplay {
            f: self,
            title,
            got_len,
            want_len,
        }
    }
}

struct DiffDisplay<'a> {
    f: &'a LineFormatter<'a>,
    diff: &'a SequenceDiff,
}

impl Display for DiffDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let width = self.diff.number_width();
        for line in self.diff.lines() {
            writeln!(f, "{}", self.f.fmt_line(line, width))?;
        }

        Ok(())
    }
}

struct LineDisplay<'a> {
    f: &'a LineFormatter<'a>,
    line: &'a DiffLine,
    width: usize,
}

impl Display for LineDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let markers = self.f.markers;
        let width = self.width;

        match self.line.got_line() {
            Some(n) => write!(f, "{}{:>width$}{}", markers.got.on, n, markers.got.off)?,
            None => write!(f, "{:width$}", "")?,
        }
        f.write_str(" ")?;
        match self.line.want_line() {
            Some(n) => write!(f, "{}{:>width$}{}", markers.want.on, n, markers.want.off)?,
            None => write!(f, "{:width$}", "")?,
        }

        write!(f, " {} ", markers.separator.wrap("|"))?;

        match self.line {
            DiffLine::Same { text, .. } | DiffLine::Changed { text, .. } => f.write_str(text),
            DiffLine::GotOnly { text, .. } => write!(f, "{}", markers.insert.wrap(text)),
            DiffLine::WantOnly { text, .. } => write!(f, "{}", markers.delete.wrap(text)),
        }
    }
}

struct SummaryDisplay<'a> {
    f: &'a LineFormatter<'a>,
    title: &'a str,
    got_len: usize,
    want_len: usize,
}

impl Display for SummaryDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let markers = self.f.markers;
        write!(
            f,
            "{}: got {}{}{}, want {}{}{}",
            markers.message.wrap(self.title),
            markers.got.on,
            self.got_len,
            markers.got.off,
            markers.want.on,
            self.want_len,
            markers.want.off,
        )
    }
}
