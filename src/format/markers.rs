use alloc::{borrow::Cow, string::String};
use core::fmt;

/// A pair of strings written before (`on`) and after (`off`) a span of output.
///
/// A marker with both strings empty leaves its content untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub on: Cow<'static, str>,
    pub off: Cow<'static, str>,
}

impl Marker {
    /// A marker which adds nothing
    pub const EMPTY: Self = Self::from_static("", "");

    /// Construct a new marker
    pub fn new<On, Off>(on: On, off: Off) -> Self
    where
        On: Into<Cow<'static, str>>,
        Off: Into<Cow<'static, str>>,
    {
        Self {
            on: on.into(),
            off: off.into(),
        }
    }

    /// Construct a new marker from string literals, usable in `const` contexts
    pub const fn from_static(on: &'static str, off: &'static str) -> Self {
        Self {
            on: Cow::Borrowed(on),
            off: Cow::Borrowed(off),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on.is_empty() && self.off.is_empty()
    }

    /// Returns a `Display` impl which writes `content` surrounded by this marker
    pub fn wrap<'a>(&'a self, content: &'a str) -> impl fmt::Display + 'a {
        Wrapped {
            marker: self,
            content,
        }
    }

    pub(crate) fn push_wrapped(&self, buf: &mut String, content: &str) {
        buf.push_str(&self.on);
        buf.push_str(content);
        buf.push_str(&self.off);
    }
}

struct Wrapped<'a> {
    marker: &'a Marker,
    content: &'a str,
}

impl fmt::Display for Wrapped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.marker.on, self.content, self.marker.off)
    }
}

/// The markers used to bracket each category of diff output.
///
/// Markers are plain configuration: the same set is read for the whole of a diff and never
/// modified by it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Wraps the want line numbers and the want count of a report summary
    pub want: Marker,

    /// Wraps the got line numbers and the got count of a report summary
    pub got: Marker,

    /// Wraps the title of a report summary
    pub message: Marker,

    /// Wraps text only present on the got side
    pub insert: Marker,

    /// Wraps text only present on the want side
    pub delete: Marker,

    /// Wraps text which differs between the two sides
    pub change: Marker,

    /// Wraps the column separator between line numbers and content
    pub separator: Marker,
}

impl Default for Markers {
    fn default() -> Self {
        #[cfg(feature = "color")]
        {
            Self::ansi()
        }

        #[cfg(not(feature = "color"))]
        {
            Self::PLAIN
        }
    }
}

impl Markers {
    /// No markup at all
    pub const NONE: Self = Self {
        want: Marker::EMPTY,
        got: Marker::EMPTY,
        message: Marker::EMPTY,
        insert: Marker::EMPTY,
        delete: Marker::EMPTY,
        change: Marker::EMPTY,
        separator: Marker::EMPTY,
    };

    /// Plain text brackets around inserted, deleted and changed text
    pub const PLAIN: Self = Self {
        want: Marker::EMPTY,
        got: Marker::EMPTY,
        message: Marker::EMPTY,
        insert: Marker::from_static("{+", "+}"),
        delete: Marker::from_static("[-", "-]"),
        change: Marker::from_static("<", ">"),
        separator: Marker::EMPTY,
    };

    /// Terminal escape sequences
    #[cfg(feature = "color")]
    #[cfg_attr(docsrs, doc(cfg(feature = "color")))]
    pub fn ansi() -> Self {
        use anstyle::{AnsiColor, Effects, Style};

        fn marker(style: Style) -> Marker {
            Marker::new(
                alloc::format!("{}", style.render()),
                alloc::format!("{}", style.render_reset()),
            )
        }

        let color = |c: AnsiColor| Style::new().fg_color(Some(c.into()));

        Self {
            want: marker(color(AnsiColor::Yellow)),
            got: marker(color(AnsiColor::Cyan)),
            message: marker(Style::new().effects(Effects::BOLD)),
            insert: marker(color(AnsiColor::Green)),
            delete: marker(color(AnsiColor::Red)),
            change: marker(Style::new().effects(Effects::UNDERLINE)),
            separator: marker(Style::new().effects(Effects::DIMMED)),
        }
    }
}
