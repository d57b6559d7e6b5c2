// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::clamp::{clamp_scale_with, snap_box};
use crate::fit::rendered_scale;
use crate::state::{ViewConfig, ViewState};

/// Media content shown through a window, with validated pan and zoom.
///
/// `Viewport` owns one [`ViewState`] and re-validates every change to it:
/// the scale is clamped with [`clamp_scale`](crate::clamp_scale) against the
/// fitted content size and the pan is then snapped with
/// [`snap_box`](crate::snap_box). No candidate state is ever applied
/// unmodified.
///
/// Content coordinates are the natural pixel grid of the media (for example
/// `0..1920 x 0..1080`); view coordinates are window pixels.
#[derive(Clone, Debug)]
pub struct Viewport {
    window: Size,
    content: Size,
    config: ViewConfig,
    state: ViewState,
    content_to_view: Affine,
    view_to_content: Affine,
}

impl Viewport {
    /// Creates a viewport showing `content` fitted and centered in `window`,
    /// with the default [`ViewConfig`].
    #[must_use]
    pub fn new(window: Size, content: Size) -> Self {
        Self::with_config(window, content, ViewConfig::default())
    }

    /// Creates a fitted viewport with an explicit configuration.
    #[must_use]
    pub fn with_config(window: Size, content: Size, config: ViewConfig) -> Self {
        let mut vp = Self {
            window,
            content,
            config,
            state: ViewState::FIT,
            content_to_view: Affine::IDENTITY,
            view_to_content: Affine::IDENTITY,
        };
        vp.reset();
        vp
    }

    /// Returns the window size in view pixels.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Sets the window size, keeping scale and pan and re-validating them.
    pub fn set_window_size(&mut self, window: Size) {
        if self.window == window {
            return;
        }
        self.window = window;
        self.set_state(self.state);
    }

    /// Returns the natural content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Sets the natural content size and returns to the fitted state.
    pub fn set_content_size(&mut self, content: Size) {
        if self.content == content {
            return;
        }
        self.content = content;
        self.reset();
    }

    /// Returns the validation settings.
    #[must_use]
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Replaces the validation settings and re-validates the current state.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config;
        self.set_state(self.state);
    }

    /// Returns the current, always valid, view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Scale that fits the content inside the window.
    ///
    /// Returns `1.0` while either size has no area.
    #[must_use]
    pub fn fit_scale(&self) -> f64 {
        if self.has_area() {
            rendered_scale(self.window, self.content)
        } else {
            1.0
        }
    }

    /// Content size at [`ViewState::scale`] `1.0`, in view pixels.
    #[must_use]
    pub fn fitted_size(&self) -> Size {
        self.content * self.fit_scale()
    }

    /// Corrects a candidate state without applying it.
    ///
    /// The scale is capped at [`ViewConfig::max_scale`], raised to the pixel
    /// density and padding floors, and the pan is then snapped for that
    /// scale. While the window or content has no area the fitted state is
    /// returned.
    #[must_use]
    pub fn validate(&self, candidate: ViewState) -> ViewState {
        if !self.has_area() {
            return ViewState::FIT;
        }
        let fitted = self.fitted_size();
        let scale = clamp_scale_with(
            self.window,
            fitted,
            candidate.scale.min(self.config.max_scale),
            self.config.pad_fraction(),
            self.config.min_pixels,
        );
        let pan = snap_box(scale, candidate.pan, self.window, fitted, self.config.pad);
        ViewState { pan, scale }
    }

    /// Validates and applies `candidate`, returning the applied state.
    pub fn set_state(&mut self, candidate: ViewState) -> ViewState {
        let valid = self.validate(candidate);
        #[cfg(feature = "tracing")]
        if valid != candidate {
            tracing::debug!(?candidate, ?valid, "view state corrected");
        }
        self.state = valid;
        self.rebuild_transforms();
        valid
    }

    /// Returns to the fitted, centered state.
    pub fn reset(&mut self) -> ViewState {
        self.set_state(ViewState::FIT)
    }

    /// Pans by a delta in view pixels.
    pub fn pan_by(&mut self, delta: Vec2) -> ViewState {
        if delta == Vec2::ZERO {
            return self.state;
        }
        self.set_state(ViewState::new(self.state.pan + delta, self.state.scale))
    }

    /// Multiplies the scale by `factor`, keeping the content under
    /// `anchor_view` fixed in the window as far as clamping allows.
    ///
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) -> ViewState {
        if !(factor.is_finite() && factor > 0.0) {
            return self.state;
        }
        self.zoom_to(self.state.scale * factor, anchor_view)
    }

    /// Sets the scale, zooming around the window center.
    pub fn set_scale(&mut self, scale: f64) -> ViewState {
        self.zoom_to(scale, self.window.to_rect().center())
    }

    /// Returns the affine transform from content to view coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.content_to_view
    }

    /// Converts a content point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.content_to_view * pt
    }

    /// Converts a view point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        self.view_to_content * pt
    }

    /// Converts a content rectangle into view coordinates.
    #[must_use]
    pub fn content_to_view_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned uniform scale, so the bounding box is exact.
        self.content_to_view.transform_rect_bbox(rect)
    }

    /// Converts a view rectangle into content coordinates.
    #[must_use]
    pub fn view_to_content_rect(&self, rect: Rect) -> Rect {
        self.view_to_content.transform_rect_bbox(rect)
    }

    /// Part of the content currently visible through the window, in content
    /// coordinates.
    ///
    /// Returns `None` when nothing of the content is visible.
    #[must_use]
    pub fn visible_content_rect(&self) -> Option<Rect> {
        let visible = self
            .view_to_content_rect(self.window.to_rect())
            .intersect(self.content.to_rect());
        (visible.width() > 0.0 && visible.height() > 0.0).then_some(visible)
    }

    /// Snapshot of the current viewport for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            window: self.window,
            content: self.content,
            fit_scale: self.fit_scale(),
            state: self.state,
            rendered_rect: self.content_to_view_rect(self.content.to_rect()),
            visible_content_rect: self.visible_content_rect(),
            config: self.config,
        }
    }

    fn zoom_to(&mut self, scale: f64, anchor_view: Point) -> ViewState {
        let anchor_content = self.view_to_content_point(anchor_view);
        let scale = self.validate(ViewState::new(self.state.pan, scale)).scale;
        let zoom = self.fit_scale() * scale;
        let pan = anchor_view.to_vec2() - anchor_content.to_vec2() * zoom;
        self.set_state(ViewState::new(pan, scale))
    }

    fn has_area(&self) -> bool {
        self.window.width > 0.0
            && self.window.height > 0.0
            && self.content.width > 0.0
            && self.content.height > 0.0
    }

    fn rebuild_transforms(&mut self) {
        let zoom = self.fit_scale() * self.state.scale;
        // Content -> view: scale, then translate by pan.
        self.content_to_view = Affine::translate(self.state.pan) * Affine::scale(zoom);
        self.view_to_content = self.content_to_view.inverse();
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Window size in view pixels.
    pub window: Size,
    /// Natural content size.
    pub content: Size,
    /// Scale fitting the content inside the window.
    pub fit_scale: f64,
    /// Current validated state.
    pub state: ViewState,
    /// Content bounds in view coordinates.
    pub rendered_rect: Rect,
    /// Visible part of the content, in content coordinates.
    pub visible_content_rect: Option<Rect>,
    /// Validation settings.
    pub config: ViewConfig,
}
