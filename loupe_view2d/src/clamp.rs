// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale floors and pan clamping.

use kurbo::{Size, Vec2};

/// Minimum rendered extent, in device pixels, that content may shrink to
/// along either axis.
pub const MIN_PIXELS: f64 = 16.0;

/// Total overscroll allowance, as a fraction of the rendered content size,
/// when padding is enabled. Half of it applies to each edge.
pub const PAD_FRACTION: f64 = 0.1;

/// Raises `scale` so that `content` renders at no fewer than [`MIN_PIXELS`]
/// device pixels along either axis, and never below `1 - pad`.
///
/// The width floor is applied first and the height floor is checked against
/// the already raised scale; since both only ever raise the scale, the
/// stricter of the two wins.
///
/// `window` does not take part in the floor; it is accepted so call sites
/// read the same as [`snap_box`].
#[must_use]
pub fn clamp_scale(window: Size, content: Size, scale: f64, pad: f64) -> f64 {
    clamp_scale_with(window, content, scale, pad, MIN_PIXELS)
}

/// [`clamp_scale`] with a caller-provided pixel floor.
#[must_use]
pub fn clamp_scale_with(
    _window: Size,
    content: Size,
    scale: f64,
    pad: f64,
    min_pixels: f64,
) -> f64 {
    let mut scale = scale;
    if content.width * scale < min_pixels {
        scale = min_pixels / content.width;
    }
    if content.height * scale < min_pixels {
        scale = min_pixels / content.height;
    }
    scale.max(1.0 - pad)
}

/// Clamps `pan` so that `content` rendered at `scale` stays anchored in the
/// window.
///
/// The rendered size is `content * scale`. With `pad`, each edge may recede
/// past the matching window edge by [`PAD_FRACTION`]` / 2` of the rendered
/// size. Each axis is handled on its own:
/// - if the rendered extent fits in the window, pan is pinned so the
///   content is exactly centered, whatever `pad` says;
/// - otherwise pan is clamped to `[window - rendered - margin, margin]`, so
///   neither edge pulls further inside the window than the margin.
///
/// ```
/// use kurbo::{Size, Vec2};
/// use loupe_view2d::snap_box;
///
/// let window = Size::new(100.0, 100.0);
/// let content = Size::new(200.0, 100.0);
/// let pan = snap_box(1.0, Vec2::new(40.0, -30.0), window, content, false);
/// assert_eq!(pan, Vec2::new(0.0, 0.0));
/// let pan = snap_box(1.0, Vec2::new(-400.0, 0.0), window, content, false);
/// assert_eq!(pan, Vec2::new(-100.0, 0.0));
/// ```
#[must_use]
pub fn snap_box(scale: f64, pan: Vec2, window: Size, content: Size, pad: bool) -> Vec2 {
    let rendered = content * scale;
    let margin = if pad { PAD_FRACTION / 2.0 } else { 0.0 };
    Vec2::new(
        snap_axis(pan.x, window.width, rendered.width, rendered.width * margin),
        snap_axis(pan.y, window.height, rendered.height, rendered.height * margin),
    )
}

fn snap_axis(pan: f64, window: f64, rendered: f64, margin: f64) -> f64 {
    if rendered <= window {
        (window - rendered) / 2.0
    } else {
        // `max`/`min` rather than `clamp`: the bounds are ordered here, but a
        // NaN input must not panic.
        pan.max(window - rendered - margin).min(margin)
    }
}
