// Copyright 2025 the Quayside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the occupancy engine.

use proptest::prelude::*;
use quayside_yard::{ContainerPosition, OccupancyEngine, Position, Stack};

const CLIENTS: [&str; 3] = ["MAEU", "MSCU", "CMAU"];

fn slot(client: usize, occupied: bool) -> ContainerPosition {
    ContainerPosition {
        stack_id: "s".to_owned(),
        position: Position::new(0.0, 0.0),
        is_occupied: occupied,
        client_code: Some(CLIENTS[client].to_owned()),
        ..ContainerPosition::default()
    }
}

proptest! {
    #[test]
    fn adding_a_matching_occupied_slot_never_decreases_occupancy(
        slots in prop::collection::vec((0_usize..3, any::<bool>()), 0..40),
        filter in 0_usize..3,
    ) {
        let mut stack = Stack {
            capacity: 64,
            container_positions: slots.iter().map(|&(c, o)| slot(c, o)).collect(),
            ..Stack::default()
        };
        let client = Some(CLIENTS[filter]);
        let before = OccupancyEngine::compute_occupancy(&stack, client);
        let rate_before = OccupancyEngine::compute_rate(&stack, client);

        stack.container_positions.push(slot(filter, true));

        prop_assert!(OccupancyEngine::compute_occupancy(&stack, client) > before);
        prop_assert!(OccupancyEngine::compute_rate(&stack, client) >= rate_before);
    }

    #[test]
    fn rate_is_within_unit_interval_for_valid_stacks(
        capacity in 0_u32..500,
        fill in 0.0_f64..=1.0,
    ) {
        let occupancy = (f64::from(capacity) * fill).floor() as u32;
        let stack = Stack {
            capacity,
            current_occupancy: occupancy,
            ..Stack::default()
        };
        let rate = OccupancyEngine::compute_rate(&stack, None);
        prop_assert!((0.0..=1.0).contains(&rate));
    }
}
