// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::RangeInclusive;

/// A closed, inclusive span of frame numbers.
///
/// A single frame is represented with `start == end`. The bounds are always
/// ordered: constructors normalize reversed input so that `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRange {
    start: u64,
    end: u64,
}

impl FrameRange {
    /// Creates a range covering `start..=end`.
    ///
    /// If `start > end` the bounds are swapped.
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Creates a range covering exactly one frame.
    #[must_use]
    pub const fn single(frame: u64) -> Self {
        Self {
            start: frame,
            end: frame,
        }
    }

    /// First frame in the range.
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last frame in the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of frames covered.
    ///
    /// Saturates at `u64::MAX` for the full `0..=u64::MAX` range.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    /// Returns `true` if this range covers a single frame.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `frame` lies inside the range.
    #[must_use]
    pub const fn contains(&self, frame: u64) -> bool {
        self.start <= frame && frame <= self.end
    }

    /// Returns `true` if `other` lies entirely inside this range.
    #[must_use]
    pub const fn contains_range(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two ranges overlap or touch with no gap between them.
    ///
    /// Such ranges are coalesced into one when inserted into
    /// [`FrameBuffers`](crate::FrameBuffers).
    #[must_use]
    pub const fn touches(&self, other: &Self) -> bool {
        let (a, b) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        a.end.saturating_add(1) >= b.start
    }

    pub(crate) fn set_start(&mut self, start: u64) {
        debug_assert!(start <= self.end, "range start moved past its end");
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: u64) {
        debug_assert!(self.start <= end, "range end moved before its start");
        self.end = end;
    }
}

impl From<RangeInclusive<u64>> for FrameRange {
    fn from(range: RangeInclusive<u64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<FrameRange> for RangeInclusive<u64> {
    fn from(range: FrameRange) -> Self {
        range.start..=range.end
    }
}

impl From<(u64, u64)> for FrameRange {
    fn from((start, end): (u64, u64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
