use core::{fmt::Debug, ops};

// A view into a sub-range of a slice which remembers where it sits in the original slice, so
// positions reported while recursing stay absolute.
#[derive(Debug)]
pub struct Range<'a, T: ?Sized> {
    inner: &'a T,
    offset: usize,
    len: usize,
}

impl<T: ?Sized> Copy for Range<'_, T> {}

impl<T: ?Sized> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Range<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Position of the first element of this range within the original slice
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Position one past the last element of this range within the original slice
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn slice(&self, bounds: impl RangeBounds) -> Self {
        let (offset, len) = bounds.index(self.len);
        Range {
            inner: self.inner,
            offset: self.offset + offset,
            len,
        }
    }
}

impl<'a, T> Range<'a, [T]> {
    pub fn new(inner: &'a [T], bounds: impl RangeBounds) -> Self {
        let (offset, len) = bounds.index(inner.len());
        Range { inner, offset, len }
    }

    pub fn as_slice(&self) -> &'a [T] {
        &self.inner[self.offset..self.end()]
    }

    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Iterate over the elements of this range paired with their absolute positions
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, &'a T)> + use<'a, T> {
        let offset = self.offset;
        self.iter()
            .enumerate()
            .map(move |(i, item)| (offset + i, item))
    }

    pub fn eq_by<F>(&self, other: Range<'_, [T]>, eq: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| eq(a, b))
    }
}

pub trait RangeBounds: Sized + Clone + Debug {
    // Returns (offset, len).
    fn try_index(self, len: usize) -> Option<(usize, usize)>;

    fn index(self, len: usize) -> (usize, usize) {
        match self.clone().try_index(len) {
            Some(range) => range,
            None => panic!("index out of range, index={:?}, len={}", self, len),
        }
    }
}

impl RangeBounds for ops::Range<usize> {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        if self.start <= self.end && self.end <= len {
            Some((self.start, self.end - self.start))
        } else {
            None
        }
    }
}

impl RangeBounds for ops::RangeFrom<usize> {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        if self.start <= len {
            Some((self.start, len - self.start))
        } else {
            None
        }
    }
}

impl RangeBounds for ops::RangeTo<usize> {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        if self.end <= len {
            Some((0, self.end))
        } else {
            None
        }
    }
}

impl RangeBounds for ops::RangeFull {
    fn try_index(self, len: usize) -> Option<(usize, usize)> {
        Some((0, len))
    }
}
