// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications from the decode and eviction side of a media session.

use crate::buffers::FrameBuffers;
use crate::range::FrameRange;

/// A change in which frames are available, as reported by the layer that
/// decodes or evicts them.
///
/// Decoding usually happens off the UI thread. The producer sends these
/// events over whatever channel it likes and the single owner of the
/// session's [`FrameBuffers`] applies them in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameEvent {
    /// Every frame in the range finished decoding and is cached.
    Decoded(FrameRange),
    /// The cached payload for this frame was dropped.
    Evicted(u64),
}

impl FrameBuffers {
    /// Applies a decode/evict notification.
    ///
    /// Returns `true` if the buffered frames changed.
    pub fn apply(&mut self, event: FrameEvent) -> bool {
        match event {
            FrameEvent::Decoded(range) => self.insert(range),
            FrameEvent::Evicted(frame) => self.remove(frame),
        }
    }
}
