//! Authoritative page index shared by drags, jumps and animation callbacks.

use crate::callback::Callback;

/// Tracks the current page, the page last reported to the host and the
/// completion waiting on a programmatic transition.
#[derive(Default)]
pub struct PageIndexState {
    current: Option<usize>,
    last_committed: Option<usize>,
    pending_completion: Option<Callback>,
}

impl PageIndexState {
    /// Creates a state with no page resolved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current page, or `None` before the first layout.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// The page last reported through the "page committed" notification.
    pub fn last_committed(&self) -> Option<usize> {
        self.last_committed
    }

    /// Moves the current page without committing it.
    ///
    /// Used while a track is in motion; the host is only told about the page
    /// once the motion settles.
    pub fn set_current(&mut self, index: usize) {
        self.current = Some(index);
    }

    /// Sets the current page and records it as committed.
    ///
    /// Returns `true` only when `index` differs from the last committed page,
    /// so each distinct settle is reported exactly once.
    pub fn commit(&mut self, index: usize) -> bool {
        self.current = Some(index);
        if self.last_committed == Some(index) {
            return false;
        }
        self.last_committed = Some(index);
        true
    }

    /// Resolves the page to show after a (re)build with `total` items.
    ///
    /// A previously set page wins over `default_index`; either is clamped to
    /// the last valid index. With no items the current page is cleared and
    /// `None` is returned.
    pub fn resolve(&mut self, default_index: usize, total: usize) -> Option<usize> {
        if total == 0 {
            self.current = None;
            return None;
        }
        let index = self.current.unwrap_or(default_index).min(total - 1);
        self.current = Some(index);
        Some(index)
    }

    /// Stores the completion for an in-flight transition, returning the one
    /// it replaces.
    pub fn set_completion(&mut self, completion: Callback) -> Option<Callback> {
        self.pending_completion.replace(completion)
    }

    /// Takes the pending completion, leaving none behind.
    pub fn take_completion(&mut self) -> Option<Callback> {
        self.pending_completion.take()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    #[test]
    fn commit_reports_each_distinct_index_once() {
        let mut state = PageIndexState::new();
        assert!(state.commit(2));
        assert!(!state.commit(2));
        assert!(state.commit(3));
        assert!(state.commit(2));
        assert_eq!(state.last_committed(), Some(2));
    }

    #[test]
    fn set_current_leaves_commit_untouched() {
        let mut state = PageIndexState::new();
        state.commit(1);
        state.set_current(2);
        assert_eq!(state.current(), Some(2));
        assert_eq!(state.last_committed(), Some(1));
        assert!(state.commit(2));
    }

    #[test]
    fn resolve_prefers_previous_page_and_clamps() {
        let mut state = PageIndexState::new();
        assert_eq!(state.resolve(1, 0), None);
        assert_eq!(state.resolve(1, 4), Some(1));

        state.commit(7);
        assert_eq!(state.resolve(0, 4), Some(3));
        assert_eq!(state.current(), Some(3));

        let mut fresh = PageIndexState::new();
        assert_eq!(fresh.resolve(9, 3), Some(2));
    }

    #[test]
    fn resolve_without_items_clears_current() {
        let mut state = PageIndexState::new();
        state.commit(2);
        assert_eq!(state.resolve(0, 0), None);
        assert_eq!(state.current(), None);
        assert_eq!(state.last_committed(), Some(2));
        assert_eq!(state.resolve(1, 5), Some(1));
    }

    #[test]
    fn completion_is_one_shot() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut state = PageIndexState::new();
        assert!(
            state
                .set_completion(Callback::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }))
                .is_none()
        );
        if let Some(done) = state.take_completion() {
            done.call();
        }
        assert!(state.take_completion().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
