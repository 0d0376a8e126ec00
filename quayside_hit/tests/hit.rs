// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space hit testing against a small two-section yard.

use core::f64::consts::TAU;

use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use quayside_hit::{Hit, hit_test};
use quayside_view2d::ViewportTransform;
use quayside_yard::{Dimensions, Position, Section, Stack, Yard};

const CANVAS: Size = Size::new(1024.0, 768.0);

fn stack(number: u32, section: &str, x: f64, y: f64) -> Stack {
    Stack {
        id: format!("stk-{number}"),
        stack_number: number,
        section_id: section.to_owned(),
        position: Position::new(x, y),
        dimensions: Dimensions::new(6.0, 24.0),
        capacity: 10,
        ..Stack::default()
    }
}

fn yard() -> Yard {
    let a = Section {
        id: "A".to_owned(),
        name: "Zone A".to_owned(),
        position: Position::new(0.0, 0.0),
        dimensions: Dimensions::new(80.0, 40.0),
        stacks: (0..8)
            .map(|i| stack(i + 1, "A", 2.0 + f64::from(i) * 9.0, 8.0))
            .collect(),
        ..Section::default()
    };
    let b = Section {
        id: "B".to_owned(),
        name: "Zone B".to_owned(),
        position: Position::new(0.0, 50.0),
        dimensions: Dimensions::new(80.0, 40.0),
        stacks: (0..4)
            .map(|i| stack(31 + i, "B", 4.0 + f64::from(i) * 18.0, 58.0))
            .collect(),
        ..Section::default()
    };
    Yard {
        id: "Y".to_owned(),
        sections: vec![a, b],
        ..Yard::default()
    }
}

fn fitted() -> ViewportTransform {
    let mut vt = ViewportTransform::new();
    let bounds = yard().world_bounds().unwrap();
    vt.fit_to_bounds(bounds, CANVAS, 5.0);
    vt
}

#[test]
fn every_stack_center_hits_its_stack() {
    let yard = yard();
    let vt = fitted();
    for stack in yard.stacks() {
        let screen = vt.world_to_screen(stack.center(), CANVAS);
        let hit = hit_test(screen, CANVAS, &vt, &yard).unwrap();
        assert_eq!(hit.stack().map(|s| s.id.as_str()), Some(stack.id.as_str()));
        assert_eq!(hit.section().id, stack.section_id);
    }
}

#[test]
fn section_gap_hits_section_only() {
    let yard = yard();
    let vt = fitted();
    // Between stacks of zone A, below the stack row.
    let screen = vt.world_to_screen(Point::new(40.0, 36.0), CANVAS);
    match hit_test(screen, CANVAS, &vt, &yard) {
        Some(Hit::Section(section)) => assert_eq!(section.id, "A"),
        other => panic!("expected section A, got {other:?}"),
    }
}

#[test]
fn outside_every_section_is_none() {
    let yard = yard();
    let vt = fitted();
    // Aisle between the two sections.
    let screen = vt.world_to_screen(Point::new(40.0, 45.0), CANVAS);
    assert_eq!(hit_test(screen, CANVAS, &vt, &yard), None);
    // Canvas corner, well outside the fitted yard horizontally.
    assert_eq!(hit_test(Point::new(0.0, 0.0), CANVAS, &vt, &yard), None);
}

#[test]
fn rotation_is_inverted_before_testing() {
    let yard = yard();
    let mut vt = fitted();
    vt.set_rotation(TAU / 4.0);
    let target = yard.stack_by_number(33).unwrap();
    let screen = vt.world_to_screen(target.center(), CANVAS);
    let hit = hit_test(screen, CANVAS, &vt, &yard).unwrap();
    assert_eq!(hit.stack().map(|s| s.stack_number), Some(33));
}

#[test]
fn first_stack_in_model_order_wins_an_overlap() {
    let mut yard = yard();
    let mut dup = yard.sections[0].stacks[0].clone();
    dup.id = "shadow".to_owned();
    dup.stack_number = 99;
    yard.sections[0].stacks.push(dup);
    assert_eq!(yard.overlapping_stacks(), vec![("stk-1", "shadow")]);

    let vt = fitted();
    let screen = vt.world_to_screen(yard.sections[0].stacks[0].center(), CANVAS);
    let hit = hit_test(screen, CANVAS, &vt, &yard).unwrap();
    assert_eq!(hit.stack().map(|s| s.id.as_str()), Some("stk-1"));
}

proptest! {
    #[test]
    fn stack_centers_hit_under_any_transform(
        zoom in 0.1_f64..=5.0,
        pan in (-400.0_f64..400.0, -400.0_f64..400.0),
        rotation in 0.0_f64..TAU,
    ) {
        let yard = yard();
        let mut vt = fitted();
        vt.set_zoom(zoom);
        vt.set_rotation(rotation);
        vt.pan_by(Vec2::new(pan.0, pan.1));
        for stack in yard.stacks() {
            let screen = vt.world_to_screen(stack.center(), CANVAS);
            let hit = hit_test(screen, CANVAS, &vt, &yard);
            prop_assert_eq!(
                hit.and_then(|h| h.stack()).map(|s| s.stack_number),
                Some(stack.stack_number)
            );
        }
    }
}
