//! Locate the best run of equal elements shared by two sequences

use crate::tracing_macros::trace;
use core::cmp;

/// A run of `len` consecutive pairwise-equal elements starting at `got_start` in the got sequence
/// and `want_start` in the want sequence.
///
/// A `Match` with a `len` of zero is the sentinel for "no qualifying run".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Match {
    pub got_start: usize,
    pub want_start: usize,
    pub len: usize,
}

impl Match {
    /// The "no qualifying run" sentinel
    pub const NONE: Self = Self {
        got_start: 0,
        want_start: 0,
        len: 0,
    };

    pub fn is_none(&self) -> bool {
        self.len == 0
    }

    pub fn got_end(&self) -> usize {
        self.got_start + self.len
    }

    pub fn want_end(&self) -> usize {
        self.want_start + self.len
    }
}

/// Find the longest run of pairwise-equal elements which is at least `min_run` long.
///
/// Ties are broken first by the smallest got start and then by the smallest want start. This is a
/// greedy, leftmost-biased choice and not a longest common subsequence; callers rely on the exact
/// tie-break for stable output.
///
/// Returns [`Match::NONE`] when no run qualifies.
///
/// ```
/// use rundiff::{Match, best_run};
///
/// let got = [1, 2, 3, 4];
/// let want = [9, 2, 3, 9];
/// let found = best_run(&got, &want, 1, |a, b| a == b);
/// assert_eq!(found, Match { got_start: 1, want_start: 1, len: 2 });
///
/// assert!(best_run(&got, &want, 3, |a, b| a == b).is_none());
/// ```
pub fn best_run<T, F>(got: &[T], want: &[T], min_run: usize, eq: F) -> Match
where
    F: Fn(&T, &T) -> bool,
{
    // A zero length run can never be an anchor
    let min_run = cmp::max(min_run, 1);
    let mut best = Match::NONE;

    for i in 0..got.len() {
        // Nothing starting here or later can be strictly longer than what we have
        if got.len() - i <= best.len {
            break;
        }

        for j in 0..want.len() {
            if cmp::min(got.len() - i, want.len() - j) <= best.len {
                break;
            }

            let len = got[i..]
                .iter()
                .zip(&want[j..])
                .take_while(|(g, w)| eq(g, w))
                .count();

            if len >= min_run && len > best.len {
                best = Match {
                    got_start: i,
                    want_start: j,
                    len,
                };
            }
        }
    }

    trace!(
        got_start = best.got_start,
        want_start = best.want_start,
        len = best.len,
        min_run,
        "best run"
    );

    best
}
