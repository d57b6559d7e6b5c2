// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Frames: interval accounting for decoded media frames.
//!
//! A frame-accurate viewer needs to know, for every frame number, whether it
//! can be drawn right now or has to be fetched first. This crate tracks that
//! knowledge as a canonical set of closed frame ranges:
//! - [`FrameRange`]: an inclusive `start..=end` span of frame numbers.
//! - [`FrameBuffers`]: the sorted, disjoint, non-adjacent set of buffered
//!   ranges for one media session, with [`insert`](FrameBuffers::insert),
//!   [`remove`](FrameBuffers::remove) and gap queries.
//! - [`FrameEvent`]: decode/evict notifications from whatever thread does the
//!   decoding.
//!
//! It does **not** hold decoded pixels. Callers keep their own frame cache
//! and reclaim a frame's memory once the set stops covering it.
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_frames::{FrameBuffers, FrameEvent, FrameRange};
//!
//! let mut buffers = FrameBuffers::new();
//!
//! // The decoder finished two batches.
//! buffers.apply(FrameEvent::Decoded(FrameRange::new(0, 29)));
//! buffers.apply(FrameEvent::Decoded(FrameRange::new(60, 89)));
//!
//! // Scrubbing to 20..=70 must wait for the hole in the middle.
//! let gaps = buffers.missing(FrameRange::new(20, 70));
//! assert_eq!(gaps.as_slice(), &[FrameRange::new(30, 59)]);
//!
//! // The cache dropped frame 10.
//! buffers.apply(FrameEvent::Evicted(10));
//! assert!(!buffers.contains(10));
//! ```
//!
//! Enable the `tracing` feature to get `trace!` events for every mutation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffers;
mod event;
mod range;

pub use buffers::{FrameBuffers, MissingRanges};
pub use event::FrameEvent;
pub use range::FrameRange;
