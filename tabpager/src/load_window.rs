//! Resident-window sizing policy.

use std::ops::Range;

/// Smallest number of pages kept resident regardless of configuration.
pub const MIN_RESIDENT_PAGES: usize = 3;

/// Number of neighbours on each side of the current page that must be
/// resident.
pub const WINDOW_HALF_WIDTH: usize = 1;

/// Decides how many pages stay resident and which indices must be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadWindow {
    total: usize,
    preload: usize,
}

impl LoadWindow {
    /// Creates a window over `total` items with the requested preload count.
    pub fn new(total: usize, preload: usize) -> Self {
        Self { total, preload }
    }

    /// Item count the window is computed against.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Requested resident-window size.
    pub fn preload(&self) -> usize {
        self.preload
    }

    pub(crate) fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    pub(crate) fn set_preload(&mut self, preload: usize) {
        self.preload = preload;
    }

    /// Maximum number of pages allowed to stay resident after a load pass.
    ///
    /// A preload at or below [`MIN_RESIDENT_PAGES`] (the degenerate `0` and
    /// `1` included) falls back to the minimum.
    pub fn effective_limit(&self) -> usize {
        if self.preload <= MIN_RESIDENT_PAGES {
            MIN_RESIDENT_PAGES
        } else {
            self.preload
        }
    }

    /// Indices that must be resident while `current` is the current page.
    ///
    /// Empty when there are no items.
    pub fn resident_range(&self, current: usize) -> Range<usize> {
        if self.total == 0 {
            return 0..0;
        }
        let current = current.min(self.total - 1);
        let start = current.saturating_sub(WINDOW_HALF_WIDTH);
        let end = (current + WINDOW_HALF_WIDTH + 1).min(self.total);
        start..end
    }
}

impl Default for LoadWindow {
    fn default() -> Self {
        Self::new(0, MIN_RESIDENT_PAGES)
    }
}
