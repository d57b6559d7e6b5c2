// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry shared by the fitting and clamping code and by overlay
//! hit testing.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, ParamCurve, ParamCurveNearest, Point, Rect, Size};

use crate::error::InvalidArgument;

/// Linearly maps `n` from `old_min..old_max` onto `new_min..new_max`.
///
/// Values outside the source range extrapolate. A source range with
/// `old_min == old_max`, or any non-finite argument, is rejected.
///
/// ```
/// use loupe_view2d::rescale;
///
/// assert_eq!(rescale(5.0, 0.0, 10.0, 0.0, 100.0), Ok(50.0));
/// assert!(rescale(5.0, 3.0, 3.0, 0.0, 1.0).is_err());
/// ```
pub fn rescale(
    n: f64,
    old_min: f64,
    old_max: f64,
    new_min: f64,
    new_max: f64,
) -> Result<f64, InvalidArgument> {
    let finite = [n, old_min, old_max, new_min, new_max]
        .iter()
        .all(|v| v.is_finite());
    if !finite || old_max == old_min {
        return Err(InvalidArgument {
            min: old_min,
            max: old_max,
        });
    }
    Ok((n - old_min) * (new_max - new_min) / (old_max - old_min) + new_min)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Closest point to `pt` on the segment `a..b`.
///
/// For a zero-length segment this is `a`.
#[must_use]
pub fn project(pt: Point, a: Point, b: Point) -> Point {
    let line = Line::new(a, b);
    line.eval(line.nearest(pt, 0.).t)
}

/// Distance from `pt` to the segment `a..b`.
#[must_use]
pub fn distance_from_segment(pt: Point, a: Point, b: Point) -> f64 {
    Line::new(a, b).nearest(pt, 0.).distance_sq.sqrt()
}

/// Converts a point between two coordinate spaces of the given sizes,
/// rounding to the nearest integer pixel.
///
/// Typical use is mapping a pointer position measured against the rendered
/// element onto the natural pixel grid of the media, or back.
pub fn rescale_coordinates(pt: Point, from: Size, to: Size) -> Result<Point, InvalidArgument> {
    let x = rescale(pt.x, 0.0, from.width, 0.0, to.width)?;
    let y = rescale(pt.y, 0.0, from.height, 0.0, to.height)?;
    Ok(Point::new(x.round(), y.round()))
}

/// Snaps measured element bounds onto the integer pixel grid.
///
/// The origin and the size are rounded independently, so the returned box
/// keeps the measured extent even when the element sits on a fractional
/// offset.
#[must_use]
pub fn element_bbox(bounds: Rect) -> Rect {
    let bounds = bounds.abs();
    Rect::from_origin_size(bounds.origin().round(), bounds.size().round())
}

/// Cyclically rotates `items` left by `rotation` positions.
///
/// `rotation` is clamped to `items.len() - 1`. Returns the rotated copy and
/// the rotation actually applied; an empty input yields `(vec![], 0)`.
///
/// ```
/// use loupe_view2d::rotate;
///
/// assert_eq!(rotate(&['a', 'b', 'c'], 5), (vec!['c', 'a', 'b'], 2));
/// ```
#[must_use]
pub fn rotate<T: Clone>(items: &[T], rotation: usize) -> (Vec<T>, usize) {
    let rotation = rotation.min(items.len().saturating_sub(1));
    let mut rotated = items.to_vec();
    rotated.rotate_left(rotation);
    (rotated, rotation)
}
