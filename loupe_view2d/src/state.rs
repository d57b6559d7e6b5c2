// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::clamp::{MIN_PIXELS, PAD_FRACTION};

/// Pan and zoom of a view, owned by the caller.
///
/// `scale` is relative to the fitted size of the content: `1.0` shows the
/// whole content fitted inside the window. `pan` is the offset, in view
/// pixels, of the content's top-left corner from the window's top-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Offset of the content origin in view pixels.
    pub pan: Vec2,
    /// Zoom factor relative to the fitted content size.
    pub scale: f64,
}

impl ViewState {
    /// Fitted, unpanned state.
    pub const FIT: Self = Self {
        pan: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a state from a pan offset and a scale.
    #[must_use]
    pub const fn new(pan: Vec2, scale: f64) -> Self {
        Self { pan, scale }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::FIT
    }
}

/// Tunables for [`Viewport`](crate::Viewport) validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Minimum rendered extent of the content, in device pixels, along
    /// either axis. Defaults to [`MIN_PIXELS`].
    pub min_pixels: f64,
    /// Whether the content may be zoomed out and overscrolled by
    /// [`PAD_FRACTION`] of its rendered size.
    pub pad: bool,
    /// Upper bound on [`ViewState::scale`]. Defaults to `32.0`.
    pub max_scale: f64,
}

impl ViewConfig {
    /// Fraction subtracted from the `1.0` scale floor.
    #[must_use]
    pub fn pad_fraction(&self) -> f64 {
        if self.pad { PAD_FRACTION } else { 0.0 }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_pixels: MIN_PIXELS,
            pad: true,
            max_scale: 32.0,
        }
    }
}
