// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn populations_stay_small_enough_for_pairwise_links() {
    assert!(GEOMETRIC_DENSITY > 0.0 && PARTICLE_DENSITY > 0.0);
    assert!(GEOMETRIC_CAP <= 120);
    assert!(PARTICLE_CAP <= 120);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_stay_in_unit_range() {
    assert!(OPACITY_MIN > 0.0);
    assert!(OPACITY_MIN + OPACITY_SPAN <= 1.0);
    assert!(LINK_ALPHA > 0.0 && LINK_ALPHA <= 1.0);
    assert!(GRID_ALPHA > 0.0 && GRID_ALPHA < 0.2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(SCROLL_THROTTLE_MS > 0.0);
    assert!(MESSAGE_HIDE_MS > 0);
    assert!(MAX_FRAME_STEP >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_geometry_is_consistent() {
    // the header offset must not exceed the scroll-spy offset, or a section
    // reached by clicking its link would not be highlighted
    assert!(HEADER_OFFSET <= SCROLL_SPY_OFFSET);
    assert!(SCROLL_TOP_THRESHOLD > HEADER_SHADOW_THRESHOLD);
}

#[test]
fn reveal_selector_lists_all_card_kinds() {
    for class in [
        "skill-card",
        "project-card",
        "service-card",
        "about-content",
        "contact-content",
    ] {
        assert!(REVEAL_SELECTOR.contains(&format!(".{}", class)), "{}", class);
    }
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}

#[test]
fn relay_endpoint_is_https() {
    assert!(RELAY_ENDPOINT.starts_with("https://"));
    assert!(FALLBACK_RECIPIENT.contains('@'));
}
