// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless drag across a wrapping row.
//!
//! This example drives a [`LayoutEngine`] the way a UI toolkit would: report
//! sizes and the viewport, start a drag, hover by pointer position, tick
//! frames, and apply the final reorder to the item list. Every event the
//! engine emits is printed by a small handler.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_drag`

use core::time::Duration;

use kurbo::{Point, Size};
use understory_reorder::{
    LayoutEngine, ReorderAction, ReorderEvent, ReorderHandler, ScrollRequest, ScrollViewport, Slot,
    WrapConfig,
};

#[derive(Default)]
struct Printer {
    pending_moves: Vec<(usize, usize)>,
}

impl ReorderHandler for Printer {
    fn on_reorder_started(&mut self, logical: usize) {
        println!("  started dragging item {logical}");
    }

    fn on_reorder(&mut self, from: usize, to: usize) {
        println!("  reorder {from} -> {to}");
        self.pending_moves.push((from, to));
    }

    fn on_no_reorder(&mut self, index: usize) {
        println!("  dropped in place at {index}");
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        println!(
            "  scroll to {} over {:?}",
            request.offset, request.duration
        );
    }
}

fn print_row(engine: &LayoutEngine<&'static str, Printer>) {
    let mut line = String::new();
    for slot in engine.layout() {
        match slot {
            Slot::Header(h) | Slot::Footer(h) => line.push_str(&format!("|{h}| ")),
            Slot::Item(i) => {
                let run = i.run.map_or(String::from("?"), |r| r.to_string());
                line.push_str(&format!("{}@r{run} ", i.item));
            }
            Slot::Ghost(g) => line.push_str(&format!("(ghost {:.2}) ", g.presence)),
        }
    }
    println!("{line}");
}

fn main() {
    let items = vec!["ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen"];
    let n = items.len();
    let config = WrapConfig {
        main_axis_extent: 180.0,
        spacing: 10.0,
        run_spacing: 10.0,
        ..WrapConfig::default()
    };
    let mut engine = LayoutEngine::new(items, config, Printer::default())
        .with_header("pets")
        .with_footer("end");
    engine.set_item_sizes(std::iter::repeat_n(Size::new(50.0, 40.0), n));
    engine.set_viewport(ScrollViewport {
        offset: 0.0,
        extent: 60.0,
        min_scroll_extent: 0.0,
        max_scroll_extent: 90.0,
        content_offset: 0.0,
    });

    println!("initial:");
    print_row(&engine);

    println!("drag 'ant' over the trailing half of 'eel':");
    let handle = engine.layout()[1].as_item().map(|i| i.handle);
    let Some(handle) = handle else {
        return;
    };
    handle.start(&mut engine);
    // 'eel' is slot 4: second run, second column.
    handle.hover_at(&mut engine, Point::new(100.0, 60.0));
    print_row(&engine);

    for frame in 0..4 {
        let settled = engine.tick(Duration::from_millis(60));
        println!("frame {frame}: settled={settled:?}");
        print_row(&engine);
    }
    engine.scroll_finished();

    println!("drop:");
    let _ = handle.end(&mut engine, false);
    let moves = std::mem::take(&mut engine.handler_mut().pending_moves);
    for (from, to) in moves {
        engine.reorder_items(from, to);
    }
    print_row(&engine);

    if let Some(ReorderEvent::Reorder { from, to }) =
        engine.perform_action(0, ReorderAction::MoveToEnd)
    {
        engine.reorder_items(from, to);
    }
    println!("after 'move to the end' on the first item:");
    print_row(&engine);
}
