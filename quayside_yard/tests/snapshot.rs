// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding yard snapshots in the shape produced by the data-access layer.

#![cfg(feature = "serde")]

use quayside_yard::{
    ContainerSize, OccupancyEngine, SpecialStack, StackTint, Yard, YardLayout,
};

const SNAPSHOT: &str = r##"{
  "id": "depot-tanger",
  "layout": "tantarelli",
  "totalCapacity": 20,
  "currentOccupancy": 11,
  "sections": [
    {
      "id": "sec-a",
      "name": "Zone A",
      "position": { "x": 0.0, "y": 0.0 },
      "dimensions": { "width": 60.0, "length": 30.0 },
      "color": "#3b82f6",
      "stacks": [
        {
          "id": "stk-1",
          "stackNumber": 1,
          "sectionId": "sec-a",
          "position": { "x": 2.0, "y": 2.0 },
          "dimensions": { "width": 12.0, "length": 25.0 },
          "rows": 2,
          "maxTiers": 5,
          "capacity": 10,
          "currentOccupancy": 10,
          "isOddStack": true,
          "containerPositions": [
            {
              "stackId": "stk-1",
              "position": { "x": 8.0, "y": 5.0 },
              "isOccupied": true,
              "clientCode": "MAEU",
              "containerSize": "40ft"
            },
            {
              "stackId": "stk-1",
              "position": { "x": 8.0, "y": 9.0 },
              "isOccupied": false
            }
          ]
        },
        {
          "id": "stk-2",
          "stackNumber": 2,
          "sectionId": "sec-a",
          "position": { "x": 20.0, "y": 2.0 },
          "dimensions": { "width": 12.0, "length": 25.0 },
          "capacity": 10,
          "currentOccupancy": 1
        }
      ]
    }
  ]
}"##;

#[test]
fn decodes_camel_case_snapshot() {
    let yard: Yard = serde_json::from_str(SNAPSHOT).unwrap();
    assert_eq!(yard.layout, YardLayout::Tantarelli);
    assert_eq!(yard.sections.len(), 1);

    let first = &yard.sections[0].stacks[0];
    assert_eq!(first.stack_number, 1);
    assert_eq!(first.max_tiers, 5);
    assert!(first.is_odd_stack);
    assert_eq!(
        first.container_positions[0].container_size,
        ContainerSize::Feet40
    );
    assert_eq!(
        first.container_positions[0].client_code.as_deref(),
        Some("MAEU")
    );
    // Omitted optional fields fall back to defaults.
    assert_eq!(first.container_positions[1].client_code, None);
    assert_eq!(
        first.container_positions[1].container_size,
        ContainerSize::Feet20
    );
    assert!(yard.sections[0].stacks[1].container_positions.is_empty());

    assert_eq!(yard.validate(), Ok(()));
}

#[test]
fn decoded_entry_stack_uses_special_tint() {
    let yard: Yard = serde_json::from_str(SNAPSHOT).unwrap();
    let engine = OccupancyEngine::default();
    let entry = yard.stack_by_number(1).unwrap();
    assert_eq!(
        engine.tint(yard.layout, entry, None),
        StackTint::Special(SpecialStack::Entry)
    );
    let summary = OccupancyEngine::summarize(&yard, None);
    assert_eq!(summary.occupied, 11);
    assert_eq!(summary.capacity, 20);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.low, 1);
}

#[test]
fn snapshot_round_trips_through_json() {
    let yard: Yard = serde_json::from_str(SNAPSHOT).unwrap();
    let encoded = serde_json::to_string(&yard).unwrap();
    assert!(encoded.contains("\"stackNumber\":1"));
    assert!(encoded.contains("\"containerSize\":\"40ft\""));
    let decoded: Yard = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, yard);
}
