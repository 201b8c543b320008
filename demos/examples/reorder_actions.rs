// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and assistive-technology moves.
//!
//! This example lists the move actions each item offers in a vertical list,
//! with their labels, then performs a few of them.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_actions`

use understory_reorder::{Axis, LayoutEngine, ReorderAction, ReorderEvent, WrapConfig};

fn main() {
    let config = WrapConfig {
        axis: Axis::Vertical,
        ..WrapConfig::default()
    };
    let items = vec!["one", "two", "three"];
    let mut engine = LayoutEngine::new(items, config, Vec::<ReorderEvent>::new());

    for (i, item) in engine.items().iter().enumerate() {
        let labels: Vec<&str> = engine
            .actions_for(i)
            .iter()
            .map(|a| a.label(config.axis))
            .collect();
        println!("{item}: {labels:?}");
    }

    for (index, action) in [
        (0, ReorderAction::MoveAfter),
        (2, ReorderAction::MoveToStart),
        (0, ReorderAction::MoveBefore),
    ] {
        match engine.perform_action(index, action) {
            Some(ReorderEvent::Reorder { from, to }) => {
                engine.reorder_items(from, to);
                println!("{action:?} on {index}: {:?}", engine.items());
            }
            _ => println!("{action:?} on {index}: unavailable"),
        }
    }
    println!("events: {:?}", engine.handler());
}
