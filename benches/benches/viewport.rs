// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use loupe_state::StateValue;
use loupe_view2d::{GestureState, ViewState, Viewport, clamp_scale, containing_box, snap_box};

fn bench_clamp(c: &mut Criterion) {
    let window = Size::new(1280.0, 720.0);
    let content = Size::new(3840.0, 2160.0);

    c.bench_function("view/clamp_scale", |b| {
        b.iter(|| black_box(clamp_scale(window, content, black_box(0.01), 0.1)));
    });

    c.bench_function("view/snap_box", |b| {
        b.iter(|| {
            black_box(snap_box(
                2.0,
                black_box(Vec2::new(-900.0, 40.0)),
                window,
                content,
                true,
            ))
        });
    });

    let vp = Viewport::new(window, content);
    c.bench_function("view/validate", |b| {
        b.iter(|| black_box(vp.validate(black_box(ViewState::new(Vec2::new(-5_000.0, 5.0), 7.0)))));
    });
}

fn bench_gesture(c: &mut Criterion) {
    // One pinch followed by a 64-step drag, the shape of a typical
    // zoom-then-inspect interaction.
    c.bench_function("view/gesture_session", |b| {
        b.iter(|| {
            let mut vp = Viewport::new(Size::new(1280.0, 720.0), Size::new(3840.0, 2160.0));
            let mut gesture = GestureState::default();
            gesture.begin_zoom(Point::new(640.0, 360.0));
            for _ in 0..8 {
                gesture.update_zoom(&mut vp, 1.1);
            }
            gesture.begin_pan(Point::ZERO);
            for i in 0..64 {
                gesture.update_pan(&mut vp, Point::new(f64::from(i) * 3.0, f64::from(i)));
            }
            gesture.end();
            black_box(vp.state())
        });
    });
}

fn bench_bbox_and_merge(c: &mut Criterion) {
    let points: Vec<Point> = (0..256)
        .map(|i| {
            let t = f64::from(i) / 256.0;
            Point::new(t, (t * 7.0).fract())
        })
        .collect();
    c.bench_function("view/containing_box_256", |b| {
        b.iter(|| black_box(containing_box(points.iter().copied())));
    });

    let base = StateValue::map((0..64).map(|i| (format!("key{i}"), StateValue::from(i))));
    let patch = StateValue::map((0..8).map(|i| (format!("key{i}"), StateValue::from(-i))));
    c.bench_function("state/merge_64_8", |b| {
        b.iter(|| black_box(base.clone().merged(patch.clone())));
    });
}

criterion_group!(benches, bench_clamp, bench_gesture, bench_bbox_and_merge);
criterion_main!(benches);
