//! Human-readable differences between what a test got and what it wanted
//!
//! `rundiff` lines up two sequences, or two strings, by repeatedly anchoring on the longest run
//! of equal elements and recursing on what is left on either side of it. The result is meant to
//! be read by a person looking at a failed assertion, not applied as a patch: it is greedy and
//! deterministic rather than minimal.
//!
//! ```
//! use rundiff::{DiffOptions, Markers};
//!
//! let mut options = DiffOptions::new();
//! options.set_markers(Markers::PLAIN);
//!
//! let report = options.report("Primes", &[2, 3, 5, 7, 9], &[2, 3, 5, 7, 11]);
//! assert_eq!(
//!     report,
//!     [
//!         "Primes: got 5, want 5",
//!         "0 0 | 2",
//!         "1 1 | 3",
//!         "2 2 | 5",
//!         "3 3 | 7",
//!         "4 4 | <{+9+}[-11-]>",
//!     ]
//! );
//! ```
//!
//! ## Features
//!
//! * `color` (default): [`Markers::default()`] uses terminal escape sequences
//! * `tracing`: emit `tracing` events describing each diff

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod diff;
mod format;
mod matcher;
mod options;
mod range;
mod tracing_macros;
mod utils;

pub use diff::{
    DiffLine, DiffOptions, DiffType, SequenceDiff, Span, diff_lines, diff_slice, diff_str,
};
pub use format::{LineFormatter, Marker, Markers};
pub use matcher::{Match, best_run};
pub use options::{MinRun, MinRunError};
