//! Configuration injected once when a controller is created.

use derive_setters::Setters;

use crate::{callback::CallbackWith, load_window::MIN_RESIDENT_PAGES};

/// Configuration arguments for [`TabPagerController`](crate::TabPagerController).
#[derive(Clone, Setters)]
pub struct TabPagerArgs {
    /// Whether the content track snaps to page boundaries.
    pub paging_enabled: bool,
    /// Requested number of resident pages. Values at or below the minimum of
    /// three fall back to the minimum.
    pub preload: usize,
    /// Whether dragging the tab track also drives the content track.
    pub tab_scroll_interlocked: bool,
    /// Page shown after the first layout when no page was set before.
    pub default_page_index: usize,
    /// Called with the new index every time a settle changes the committed
    /// page.
    #[setters(skip)]
    pub on_page_committed: Option<CallbackWith<usize>>,
    /// Called with the live candidate index on every scroll step of a drag.
    #[setters(skip)]
    pub on_scrolling: Option<CallbackWith<usize>>,
}

impl TabPagerArgs {
    /// Set the "page committed" handler.
    pub fn on_page_committed<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_page_committed = Some(CallbackWith::new(handler));
        self
    }

    /// Set the "page committed" handler using a shared callback.
    pub fn on_page_committed_shared(mut self, handler: CallbackWith<usize>) -> Self {
        self.on_page_committed = Some(handler);
        self
    }

    /// Set the "scrolling" handler.
    pub fn on_scrolling<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_scrolling = Some(CallbackWith::new(handler));
        self
    }

    /// Set the "scrolling" handler using a shared callback.
    pub fn on_scrolling_shared(mut self, handler: CallbackWith<usize>) -> Self {
        self.on_scrolling = Some(handler);
        self
    }
}

impl Default for TabPagerArgs {
    fn default() -> Self {
        Self {
            paging_enabled: true,
            preload: MIN_RESIDENT_PAGES,
            tab_scroll_interlocked: false,
            default_page_index: 0,
            on_page_committed: None,
            on_scrolling: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = TabPagerArgs::default();
        assert!(args.paging_enabled);
        assert_eq!(args.preload, 3);
        assert!(!args.tab_scroll_interlocked);
        assert_eq!(args.default_page_index, 0);
        assert!(args.on_page_committed.is_none());
        assert!(args.on_scrolling.is_none());
    }

    #[test]
    fn setters_chain() {
        let args = TabPagerArgs::default()
            .paging_enabled(false)
            .preload(5)
            .tab_scroll_interlocked(true)
            .default_page_index(2)
            .on_scrolling(|_| {});
        assert!(!args.paging_enabled);
        assert_eq!(args.preload, 5);
        assert!(args.tab_scroll_interlocked);
        assert_eq!(args.default_page_index, 2);
        assert!(args.on_scrolling.is_some());
    }
}
