use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

/// The minimum number of consecutive equal elements (or characters) a run must span before it is
/// used to line up the two sides of a diff.
///
/// Values are restricted to `1..=5`.
///
/// ```
/// use rundiff::MinRun;
///
/// let min_run: MinRun = "2".parse().unwrap();
/// assert_eq!(min_run.get(), 2);
/// assert!(MinRun::new(0).is_err());
/// assert!(MinRun::new(6).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinRun(usize);

impl MinRun {
    /// The smallest accepted threshold
    pub const MIN: Self = Self(1);
    /// The largest accepted threshold
    pub const MAX: Self = Self(5);

    /// Default threshold for element sequences
    pub const DEFAULT_SEQ: Self = Self(1);
    /// Default threshold for characters in strings
    pub const DEFAULT_CHARS: Self = Self(3);

    /// Construct a new threshold, failing when `len` is outside of `1..=5`
    pub fn new(len: usize) -> Result<Self, MinRunError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&len) {
            Ok(Self(len))
        } else {
            Err(MinRunError::out_of_range(len))
        }
    }

    /// Returns the threshold as a plain length
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for MinRun {
    type Error = MinRunError;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        Self::new(len)
    }
}

impl FromStr for MinRun {
    type Err = MinRunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s
            .trim()
            .parse::<usize>()
            .map_err(|_| MinRunError::invalid(s))?;
        Self::new(len)
    }
}

impl fmt::Display for MinRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An error returned when a [`MinRun`] can't be constructed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinRunError(ErrorKind);

#[derive(Clone, Debug, PartialEq, Eq)]
enum ErrorKind {
    OutOfRange(usize),
    Invalid(String),
}

impl MinRunError {
    fn out_of_range(len: usize) -> Self {
        Self(ErrorKind::OutOfRange(len))
    }

    fn invalid(s: &str) -> Self {
        Self(ErrorKind::Invalid(s.to_string()))
    }

    /// Returns `true` if the value was a number outside of the accepted range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.0, ErrorKind::OutOfRange(_))
    }
}

impl fmt::Display for MinRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ErrorKind::OutOfRange(len) => write!(
                f,
                "minimum run length {} out of range, expected {}..={}",
                len,
                MinRun::MIN,
                MinRun::MAX
            ),
            ErrorKind::Invalid(s) => write!(f, "invalid minimum run length {:?}", s),
        }
    }
}

impl core::error::Error for MinRunError {}
