// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture state: `Idle -> Panning -> Idle` and `Idle -> Zooming -> Idle`.
//!
//! ## Usage
//!
//! 1) Call [`GestureState::begin_pan`] on pointer down, or
//!    [`GestureState::begin_zoom`] when a pinch starts.
//! 2) Feed each move to [`GestureState::update_pan`] /
//!    [`GestureState::update_zoom`]. The viewport is updated in place with a
//!    validated state, which is also returned.
//! 3) Call [`GestureState::end`] on pointer up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use loupe_view2d::{GestureState, Viewport};
//!
//! let mut viewport = Viewport::new(Size::new(800.0, 600.0), Size::new(1920.0, 1080.0));
//! let mut gesture = GestureState::default();
//!
//! gesture.begin_zoom(Point::new(400.0, 300.0));
//! gesture.update_zoom(&mut viewport, 2.0);
//! gesture.end();
//!
//! gesture.begin_pan(Point::new(100.0, 100.0));
//! let state = gesture.update_pan(&mut viewport, Point::new(140.0, 90.0)).unwrap();
//! assert_eq!(state, viewport.state());
//! assert!(gesture.is_panning());
//! ```

use kurbo::Point;

use crate::state::ViewState;
use crate::viewport::Viewport;

/// The gesture currently driving a view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the content.
    Panning {
        /// Pointer position at the previous update, in view coordinates.
        last_pos: Point,
    },
    /// Pinch or drag zoom around a fixed point.
    Zooming {
        /// View-space point kept fixed while zooming.
        anchor: Point,
    },
}

/// Tracks the active pan or zoom gesture for one view.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureState {
    gesture: Gesture,
}

impl GestureState {
    /// Returns the active gesture.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Returns `true` when no gesture is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Returns `true` while panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning { .. })
    }

    /// Returns `true` while zooming.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        matches!(self.gesture, Gesture::Zooming { .. })
    }

    /// Starts panning from `pos`, replacing any active gesture.
    pub fn begin_pan(&mut self, pos: Point) {
        self.gesture = Gesture::Panning { last_pos: pos };
    }

    /// Starts zooming around `anchor`, replacing any active gesture.
    pub fn begin_zoom(&mut self, anchor: Point) {
        self.gesture = Gesture::Zooming { anchor };
    }

    /// Pans `viewport` by the pointer movement since the last update.
    ///
    /// Returns the validated state, or `None` when not panning.
    pub fn update_pan(&mut self, viewport: &mut Viewport, pos: Point) -> Option<ViewState> {
        let Gesture::Panning { last_pos } = self.gesture else {
            return None;
        };
        self.gesture = Gesture::Panning { last_pos: pos };
        Some(viewport.pan_by(pos - last_pos))
    }

    /// Multiplies the scale of `viewport` by `factor` around the gesture anchor.
    ///
    /// Returns the validated state, or `None` when not zooming.
    pub fn update_zoom(&mut self, viewport: &mut Viewport, factor: f64) -> Option<ViewState> {
        let Gesture::Zooming { anchor } = self.gesture else {
            return None;
        };
        Some(viewport.zoom_about_view_point(anchor, factor))
    }

    /// Ends the active gesture.
    pub fn end(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
