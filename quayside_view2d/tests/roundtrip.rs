// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for world/screen conversion and zoom clamping.

use core::f64::consts::TAU;

use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use quayside_view2d::ViewportTransform;

fn transform(zoom: f64, pan: (f64, f64), rotation: f64, center: (f64, f64)) -> ViewportTransform {
    let mut vt = ViewportTransform::new();
    vt.set_zoom(zoom);
    vt.set_rotation(rotation);
    vt.set_world_center(Point::new(center.0, center.1));
    vt.pan_by(Vec2::new(pan.0, pan.1) * zoom);
    vt
}

proptest! {
    #[test]
    fn screen_to_world_inverts_world_to_screen(
        px in -5_000.0_f64..5_000.0,
        py in -5_000.0_f64..5_000.0,
        zoom in 0.1_f64..=5.0,
        pan in (-1_000.0_f64..1_000.0, -1_000.0_f64..1_000.0),
        rotation in 0.0_f64..TAU,
        center in (-500.0_f64..500.0, -500.0_f64..500.0),
        canvas in (1.0_f64..4_000.0, 1.0_f64..4_000.0),
    ) {
        let vt = transform(zoom, pan, rotation, center);
        let canvas = Size::new(canvas.0, canvas.1);
        let p = Point::new(px, py);

        let back = vt.screen_to_world(vt.world_to_screen(p, canvas), canvas);
        prop_assert!((back.x - p.x).abs() < 1e-6, "{back:?} vs {p:?}");
        prop_assert!((back.y - p.y).abs() < 1e-6, "{back:?} vs {p:?}");

        let again = vt.world_to_screen(vt.screen_to_world(p, canvas), canvas);
        prop_assert!((again.x - p.x).abs() < 1e-6, "{again:?} vs {p:?}");
        prop_assert!((again.y - p.y).abs() < 1e-6, "{again:?} vs {p:?}");
    }

    #[test]
    fn repeated_zoom_stays_within_limits(factors in prop::collection::vec(0.01_f64..100.0, 1..50)) {
        let mut vt = ViewportTransform::new();
        for f in factors {
            vt.zoom_by(f);
            prop_assert!(vt.zoom() >= 0.1);
            prop_assert!(vt.zoom() <= 5.0);
        }
    }

    #[test]
    fn drag_moves_pan_by_delta_over_zoom(
        zoom in 0.1_f64..=5.0,
        dx in -500.0_f64..500.0,
        dy in -500.0_f64..500.0,
    ) {
        let mut vt = ViewportTransform::new();
        vt.set_zoom(zoom);
        let before = vt.pan();
        vt.pan_by(Vec2::new(dx, dy));
        let moved = vt.pan() - before;
        prop_assert!((moved.x - dx / zoom).abs() < 1e-9);
        prop_assert!((moved.y - dy / zoom).abs() < 1e-9);
    }
}

#[test]
fn large_zoom_steps_saturate_at_five() {
    let mut vt = ViewportTransform::new();
    for _ in 0..100 {
        vt.zoom_by(10.0);
    }
    assert_eq!(vt.zoom(), 5.0);
    for _ in 0..100 {
        vt.zoom_by(0.01);
    }
    assert_eq!(vt.zoom(), 0.1);
}

#[test]
fn drag_at_zoom_two_halves_the_delta() {
    let mut vt = ViewportTransform::new();
    vt.set_zoom(2.0);
    vt.pan_by(Vec2::new(30.0, -12.0));
    assert_eq!(vt.pan(), Vec2::new(15.0, -6.0));
}
