// Navigation and scroll bookkeeping that does not touch the DOM.

use crate::constants::*;

/// Open/closed flag of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Vertical extent of a page section in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `scroll_y + offset`.
///
/// Sections are tested in document order and the last match wins, so at a
/// boundary shared by two sections the later one is active.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&str> {
    let line = scroll_y + offset;
    sections
        .iter()
        .filter(|s| line >= s.top && line <= s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

/// The nav link `href` that targets `section_id`.
#[inline]
pub fn link_target(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Section id referenced by an in-page anchor, or `None` for bare `#` and
/// external links.
#[inline]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll destination for an in-page anchor, leaving room for the fixed header.
#[inline]
pub fn anchor_scroll_top(element_top: f64) -> f64 {
    (element_top - HEADER_OFFSET).max(0.0)
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[inline]
pub fn header_shadow_visible(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_THRESHOLD
}

/// Leading-edge throttle: lets a call through at most once per interval.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns true (and records `now_ms`) when the interval has elapsed.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}
