// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View 2D: viewport math for zoomable media.
//!
//! This crate provides the small, pure functions a media viewer needs so
//! that zoomed content never drifts out of bounds, aspect ratios are
//! respected, and content never shrinks below a legible pixel density:
//! - Fitting: [`rendered_scale`], [`fit_rect`], [`containing_box`].
//! - Clamping: [`clamp_scale`] (pixel density and padding floor) and
//!   [`snap_box`] (pan limits, centering content smaller than the window).
//! - Primitives: [`rescale`], [`distance`], [`distance_from_segment`],
//!   [`project`], [`rescale_coordinates`], [`element_bbox`], [`rotate`].
//!
//! On top of those, [`Viewport`] keeps one validated [`ViewState`] and
//! [`GestureState`] tracks the `Idle -> Panning/Zooming -> Idle` gesture
//! machine, routing every update through validation.
//!
//! It does **not** render anything or listen to input events. Callers measure
//! their window and media, feed pointer positions in, and apply the returned
//! [`ViewState`] (or [`Viewport::transform`]) to their canvas.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_view2d::{Viewport, clamp_scale, snap_box};
//!
//! // The free functions work on plain sizes and candidate states.
//! let window = Size::new(100.0, 100.0);
//! let content = Size::new(200.0, 100.0);
//! let scale = clamp_scale(window, content, 1.0, 0.0);
//! let pan = snap_box(scale, Vec2::new(50.0, 50.0), window, content, false);
//! assert_eq!(pan, Vec2::new(0.0, 0.0));
//!
//! // `Viewport` applies them on every change.
//! let mut view = Viewport::new(Size::new(800.0, 600.0), Size::new(1920.0, 1080.0));
//! view.zoom_about_view_point(Point::new(400.0, 300.0), 2.0);
//! let pixel = view.view_to_content_point(Point::new(400.0, 300.0));
//! assert!((pixel.x - 960.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and axis aligned; [`ViewState::scale`] is relative to
//!   the fitted content, so `1.0` always means "whole content visible".
//! - With padding enabled the content may zoom out to `1 - PAD_FRACTION` and
//!   overscroll by half of [`PAD_FRACTION`] per edge.
//! - Enable the `tracing` feature to log corrected view states.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod clamp;
mod error;
mod fit;
mod geometry;
mod gesture;
mod state;
mod viewport;

pub use clamp::{MIN_PIXELS, PAD_FRACTION, clamp_scale, clamp_scale_with, snap_box};
pub use error::InvalidArgument;
pub use fit::{DEGENERATE_EXTENT, containing_box, fit_rect, rendered_scale};
pub use geometry::{
    distance, distance_from_segment, element_bbox, project, rescale, rescale_coordinates, rotate,
};
pub use gesture::{Gesture, GestureState};
pub use state::{ViewConfig, ViewState};
pub use viewport::{Viewport, ViewportDebugInfo};
