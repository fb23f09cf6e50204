// Host-side tests for navigation and scroll helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scroll {
    include!("../src/scroll.rs");
}

use constants::*;
use scroll::*;

fn sections() -> Vec<SectionSpan> {
    vec![
        SectionSpan {
            id: "home".into(),
            top: 0.0,
            height: 600.0,
        },
        SectionSpan {
            id: "about".into(),
            top: 600.0,
            height: 400.0,
        },
        SectionSpan {
            id: "projects".into(),
            top: 1000.0,
            height: 800.0,
        },
    ]
}

#[test]
fn menu_toggle_and_close() {
    let mut m = MenuState::default();
    assert!(!m.open);
    assert!(m.toggle());
    assert!(m.open);
    assert!(m.close());
    assert!(!m.open);
    // closing a closed menu reports nothing to do
    assert!(!m.close());
    assert!(m.toggle());
    assert!(!m.toggle());
}

#[test]
fn active_section_inside_spans() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0, 0.0), Some("home"));
    assert_eq!(active_section(&s, 700.0, 0.0), Some("about"));
    assert_eq!(active_section(&s, 1200.0, 0.0), Some("projects"));
}

#[test]
fn boundary_goes_to_the_later_section() {
    let s = sections();
    assert_eq!(active_section(&s, 600.0, 0.0), Some("about"));
    assert_eq!(active_section(&s, 1000.0, 0.0), Some("projects"));
    // offset is added to the scroll position before testing
    assert_eq!(
        active_section(&s, 1000.0 - SCROLL_SPY_OFFSET, SCROLL_SPY_OFFSET),
        Some("projects")
    );
}

#[test]
fn no_section_outside_all_spans() {
    let s = sections();
    assert_eq!(active_section(&s, 5000.0, 0.0), None);
    assert_eq!(active_section(&s, -50.0, 0.0), None);
    assert_eq!(active_section(&[], 100.0, 0.0), None);
}

#[test]
fn anchors_and_link_targets() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("https://example.com"), None);
    assert_eq!(link_target("about"), "#about");
}

#[test]
fn anchor_scroll_leaves_room_for_header() {
    assert_eq!(anchor_scroll_top(1000.0), 1000.0 - HEADER_OFFSET);
    assert_eq!(anchor_scroll_top(10.0), 0.0);
}

#[test]
fn thresholds_are_strict() {
    assert!(!scroll_top_visible(SCROLL_TOP_THRESHOLD));
    assert!(scroll_top_visible(SCROLL_TOP_THRESHOLD + 1.0));
    assert!(!header_shadow_visible(HEADER_SHADOW_THRESHOLD));
    assert!(header_shadow_visible(HEADER_SHADOW_THRESHOLD + 0.5));
}

#[test]
fn throttle_lets_one_call_per_interval() {
    let mut t = Throttle::new(100.0);
    assert!(t.ready(0.0));
    assert!(!t.ready(50.0));
    assert!(!t.ready(99.9));
    assert!(t.ready(100.0));
    assert!(!t.ready(150.0));
    assert!(t.ready(250.0));
}
