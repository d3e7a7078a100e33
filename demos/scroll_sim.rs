// Example: a host loop that fills the viewport, scrolls to the end of the list, then back up.
use scroll_window::{WindowOptions, WindowState};

const ITEM_HEIGHT: f64 = 24.0;
const VIEWPORT_HEIGHT: f64 = 300.0;

fn paint(label: &str, w: &WindowState) {
    let s = w.snapshot();
    println!(
        "{label:<8} range={:?} phase={:?} observe=({:?}, {:?}) placeholders=({}, {}) last={}",
        s.rendered_range,
        s.phase,
        s.buffer_start_observed_index,
        s.buffer_end_observed_index,
        s.start_placeholder_size,
        s.end_placeholder_size,
        s.last_item_rendered,
    );
}

fn main() {
    let mut w = WindowState::new(WindowOptions::new().with_items_batch_size(5));
    w.set_items_count(60);
    w.set_avg_item_height(ITEM_HEIGHT);

    // Fill until the materialized items cover the viewport.
    while (w.rendered_len() as f64) * ITEM_HEIGHT < VIEWPORT_HEIGHT && !w.last_item_rendered() {
        w.add_initial_items_batch();
        w.calculate_placeholder_size();
        paint("fill", &w);
    }

    // Pretend the observed item scrolls into view on every frame.
    w.update_end_scroll_buffer();
    w.calculate_placeholder_size();
    paint("down", &w);
    while w.buffer_end_observed_item_index().is_some() {
        w.update_end_scroll_buffer();
        w.calculate_placeholder_size();
        paint("down", &w);
    }

    while w.buffer_start_observed_item_index().is_some() {
        w.update_start_scroll_buffer();
        w.calculate_placeholder_size();
        paint("up", &w);
    }
}
