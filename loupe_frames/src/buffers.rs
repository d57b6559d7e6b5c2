// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical interval set of buffered frames.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::range::FrameRange;

/// The set of frame numbers currently decoded and cached for one media session.
///
/// Frames are stored as a sorted list of [`FrameRange`]s kept in canonical
/// form:
/// - ranges are sorted ascending by start;
/// - no two ranges overlap or touch (`a.end() + 1 < b.start()` for
///   consecutive ranges), so adjacent spans are always merged;
/// - every range satisfies `start <= end`.
///
/// The list is only mutated through [`FrameBuffers::insert`] and
/// [`FrameBuffers::remove`] (plus [`FrameBuffers::clear`] and
/// [`FrameBuffers::apply`], which route through them).
///
/// `FrameBuffers` performs no internal synchronization. A session owns one
/// instance and passes it by `&mut` to whichever task is allowed to write.
///
/// # Example
///
/// ```
/// use loupe_frames::{FrameBuffers, FrameRange};
///
/// let mut buffers = FrameBuffers::new();
/// buffers.insert(FrameRange::new(1, 10));
/// buffers.insert(FrameRange::new(11, 20));
/// assert_eq!(buffers.ranges(), &[FrameRange::new(1, 20)]);
///
/// buffers.remove(5);
/// assert_eq!(
///     buffers.ranges(),
///     &[FrameRange::new(1, 4), FrameRange::new(6, 20)]
/// );
/// assert!(!buffers.contains(5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrameBuffers {
    ranges: Vec<FrameRange>,
    revision: u64,
}

/// Gaps reported by [`FrameBuffers::missing`].
///
/// Most spans have only a handful of holes, so these stay inline.
pub type MissingRanges = SmallVec<[FrameRange; 4]>;

impl FrameBuffers {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ranges: Vec::new(),
            revision: 0,
        }
    }

    /// Returns the buffered ranges in ascending order.
    #[must_use]
    pub fn ranges(&self) -> &[FrameRange] {
        &self.ranges
    }

    /// Returns an iterator over the buffered ranges in ascending order.
    pub fn iter(&self) -> core::slice::Iter<'_, FrameRange> {
        self.ranges.iter()
    }

    /// Number of disjoint ranges (not frames).
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if no frame is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of buffered frames.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.ranges
            .iter()
            .fold(0_u64, |acc, r| acc.saturating_add(r.frame_count()))
    }

    /// Lowest buffered range, if any.
    #[must_use]
    pub fn first(&self) -> Option<FrameRange> {
        self.ranges.first().copied()
    }

    /// Highest buffered range, if any.
    #[must_use]
    pub fn last(&self) -> Option<FrameRange> {
        self.ranges.last().copied()
    }

    /// Returns the mutation counter.
    ///
    /// The revision only changes when the set of buffered frames changes;
    /// inserting an already buffered range or removing an absent frame
    /// leaves it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if `frame` is buffered.
    #[must_use]
    pub fn contains(&self, frame: u64) -> bool {
        self.index_containing(frame).is_some()
    }

    /// Returns the buffered range that contains `frame`.
    #[must_use]
    pub fn range_containing(&self, frame: u64) -> Option<FrameRange> {
        self.index_containing(frame).map(|idx| self.ranges[idx])
    }

    /// Returns `true` if every frame of `range` is buffered.
    #[must_use]
    pub fn covers(&self, range: FrameRange) -> bool {
        self.range_containing(range.start())
            .is_some_and(|r| r.contains_range(&range))
    }

    /// Returns the parts of `span` that are not buffered, in ascending order.
    ///
    /// This is the list of ranges the playback layer has to request before
    /// `span` can be drawn without stalling.
    #[must_use]
    pub fn missing(&self, span: FrameRange) -> MissingRanges {
        let mut gaps = MissingRanges::new();
        let mut cursor = span.start();
        let first = self.ranges.partition_point(|r| r.end() < span.start());
        for r in &self.ranges[first..] {
            if r.start() > span.end() {
                break;
            }
            if r.start() > cursor {
                gaps.push(FrameRange::new(cursor, r.start() - 1));
            }
            if r.end() >= span.end() {
                return gaps;
            }
            cursor = r.end() + 1;
        }
        gaps.push(FrameRange::new(cursor, span.end()));
        gaps
    }

    /// Returns the first frame at or after `frame` that is not buffered.
    ///
    /// Returns `None` only when everything up to `u64::MAX` is buffered.
    #[must_use]
    pub fn next_missing(&self, frame: u64) -> Option<u64> {
        match self.range_containing(frame) {
            Some(r) => r.end().checked_add(1),
            None => Some(frame),
        }
    }

    /// Marks every frame in `range` as buffered.
    ///
    /// The range is appended, the list is re-sorted by start, and a single
    /// left-to-right pass merges every pair that overlaps or touches. Ranges
    /// that are already covered leave the set unchanged.
    ///
    /// Returns `true` if any frame was newly buffered.
    pub fn insert(&mut self, range: impl Into<FrameRange>) -> bool {
        let range = range.into();
        if self.covers(range) {
            return false;
        }
        self.ranges.push(range);
        self.ranges.sort_unstable_by_key(FrameRange::start);
        self.coalesce();
        self.bump_revision();
        #[cfg(feature = "tracing")]
        tracing::trace!(%range, ranges = self.ranges.len(), "frames buffered");
        true
    }

    /// Marks a single frame as no longer buffered.
    ///
    /// Removing a frame at the edge of a range shrinks it, removing the only
    /// frame of a range deletes it, and removing an interior frame splits the
    /// range in two. Removing a frame that is not buffered is a no-op.
    ///
    /// Returns `true` if the frame was buffered.
    pub fn remove(&mut self, frame: u64) -> bool {
        let Some(idx) = self.index_containing(frame) else {
            return false;
        };
        let range = self.ranges[idx];
        match (range.start() == frame, range.end() == frame) {
            (true, true) => {
                self.ranges.remove(idx);
            }
            (true, false) => self.ranges[idx].set_start(frame + 1),
            (false, true) => self.ranges[idx].set_end(frame - 1),
            (false, false) => {
                self.ranges[idx].set_end(frame - 1);
                self.ranges
                    .insert(idx + 1, FrameRange::new(frame + 1, range.end()));
                #[cfg(feature = "tracing")]
                tracing::trace!(frame, %range, "buffered range split");
            }
        }
        self.bump_revision();
        #[cfg(feature = "tracing")]
        tracing::trace!(frame, ranges = self.ranges.len(), "frame evicted");
        true
    }

    /// Removes every buffered frame.
    pub fn clear(&mut self) {
        if self.ranges.is_empty() {
            return;
        }
        self.ranges.clear();
        self.bump_revision();
    }

    /// Consuming form of [`FrameBuffers::insert`].
    #[must_use]
    pub fn with_inserted(mut self, range: impl Into<FrameRange>) -> Self {
        self.insert(range);
        self
    }

    /// Consuming form of [`FrameBuffers::remove`].
    #[must_use]
    pub fn with_removed(mut self, frame: u64) -> Self {
        self.remove(frame);
        self
    }

    fn index_containing(&self, frame: u64) -> Option<usize> {
        let after = self.ranges.partition_point(|r| r.start() <= frame);
        let idx = after.checked_sub(1)?;
        self.ranges[idx].contains(frame).then_some(idx)
    }

    /// Merges overlapping or touching neighbours of an already sorted list.
    fn coalesce(&mut self) {
        if self.ranges.is_empty() {
            return;
        }
        let mut write = 0;
        for read in 1..self.ranges.len() {
            let next = self.ranges[read];
            let current = &mut self.ranges[write];
            if current.end().saturating_add(1) >= next.start() {
                if next.end() > current.end() {
                    current.set_end(next.end());
                }
            } else {
                write += 1;
                self.ranges[write] = next;
            }
        }
        self.ranges.truncate(write + 1);
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

// Two sets are equal when they buffer the same frames, whatever their history.
impl PartialEq for FrameBuffers {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl Eq for FrameBuffers {}

impl<'a> IntoIterator for &'a FrameBuffers {
    type Item = &'a FrameRange;
    type IntoIter = core::slice::Iter<'a, FrameRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Into<FrameRange>> Extend<R> for FrameBuffers {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for range in iter {
            self.insert(range);
        }
    }
}

impl<R: Into<FrameRange>> FromIterator<R> for FrameBuffers {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut buffers = Self::new();
        buffers.extend(iter);
        buffers
    }
}
