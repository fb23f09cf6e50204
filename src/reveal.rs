// Fire-once bookkeeping for fade-in-on-view elements and late-failing thumbnails.

use std::collections::HashSet;

/// Remembers which observed targets have already played their entrance.
///
/// Targets are identified by their index in the observed list. A target is
/// revealed the first time it is reported intersecting and never again, no
/// matter how often it leaves and re-enters the viewport. The ratio is left to
/// the observer's own threshold: a target much taller than the viewport may
/// intersect without ever reaching it.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection report. Returns true exactly when the target
    /// should start its entrance animation (and be unobserved).
    pub fn observe(&mut self, target: usize, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(target)
    }

    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.contains(&target)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Whether a thumbnail had already failed before its `error` listener was
/// attached. SVGs without intrinsic size load with a zero natural width, so
/// both dimensions must be zero.
#[inline]
pub fn image_already_failed(
    complete: bool,
    natural_width: u32,
    natural_height: u32,
    has_src: bool,
) -> bool {
    complete && has_src && natural_width == 0 && natural_height == 0
}
