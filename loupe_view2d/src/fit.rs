// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-preserving fitting and bounding boxes.

use kurbo::{Point, Rect, Size};

/// Extent given to a containing box along an axis where every point shares
/// the same coordinate.
pub const DEGENERATE_EXTENT: f64 = 0.1;

/// Scale factor that fits `content` inside `window` while preserving its
/// aspect ratio.
///
/// This is "fit inside", never "fill": when the window is relatively wider
/// than the content the height constrains the scale, otherwise the width
/// does.
///
/// Both sizes are expected to be strictly positive.
#[must_use]
pub fn rendered_scale(window: Size, content: Size) -> f64 {
    let window_aspect = window.width / window.height;
    let content_aspect = content.width / content.height;
    if window_aspect > content_aspect {
        window.height / content.height
    } else {
        window.width / content.width
    }
}

/// Largest rectangle with the aspect ratio of `bbox` that fits inside a
/// window of size `window`, centered in it.
///
/// The position of `bbox` is ignored; only its proportions matter. The
/// result is expressed in window coordinates with the origin at the window's
/// top-left corner. A box with no area has no aspect ratio to preserve and
/// collapses to a zero-size rectangle at the window center.
#[must_use]
pub fn fit_rect(window: Size, bbox: Rect) -> Rect {
    let bbox = bbox.abs();
    if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
        return Rect::from_center_size(window.to_rect().center(), Size::ZERO);
    }
    let scale = rendered_scale(window, bbox.size());
    let fitted = bbox.size() * scale;
    let origin = Point::new(
        (window.width - fitted.width) / 2.0,
        (window.height - fitted.height) / 2.0,
    );
    Rect::from_origin_size(origin, fitted)
}

/// Minimal axis-aligned box enclosing `points`.
///
/// When all points share an x coordinate the box is widened to
/// [`DEGENERATE_EXTENT`], centered on that x; the same applies to y. This
/// keeps downstream code that divides by the box extent well defined.
///
/// Returns `None` for an empty input.
///
/// ```
/// use kurbo::{Point, Rect};
/// use loupe_view2d::containing_box;
///
/// let bbox = containing_box([Point::new(0.2, 0.4), Point::new(0.6, 0.1)]);
/// assert_eq!(bbox, Some(Rect::new(0.2, 0.1, 0.6, 0.4)));
/// ```
#[must_use]
pub fn containing_box(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
    let mut points = points.into_iter();
    let first = points.next()?;
    let mut bbox = Rect::from_points(first, first);
    for pt in points {
        bbox = bbox.union_pt(pt);
    }
    if bbox.width() == 0.0 {
        bbox.x0 -= DEGENERATE_EXTENT / 2.0;
        bbox.x1 = bbox.x0 + DEGENERATE_EXTENT;
    }
    if bbox.height() == 0.0 {
        bbox.y0 -= DEGENERATE_EXTENT / 2.0;
        bbox.y1 = bbox.y0 + DEGENERATE_EXTENT;
    }
    Some(bbox)
}
