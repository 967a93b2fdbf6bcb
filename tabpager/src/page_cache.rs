//! Ownership of realized tab handles and resident content pages.

use crate::index_cache::BoundedIndexCache;

/// Holds the tab handles built for the current layout and the pages that are
/// currently resident.
///
/// Tabs are replaced wholesale on every build. Pages come and go one by one
/// through [`PageCache::evict_over`].
pub struct PageCache<T, P> {
    source: Vec<T>,
    resident: BoundedIndexCache<usize, P>,
}

impl<T, P> PageCache<T, P> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            source: Vec::new(),
            resident: BoundedIndexCache::new(),
        }
    }

    /// Replaces the tab handles.
    pub fn set_source(&mut self, tabs: Vec<T>) {
        self.source = tabs;
    }

    /// Tab handles in index order.
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Tab handle for `index`, if built.
    pub fn tab(&self, index: usize) -> Option<&T> {
        self.source.get(index)
    }

    /// Resident content pages.
    pub fn resident(&self) -> &BoundedIndexCache<usize, P> {
        &self.resident
    }

    /// Mutable access to the resident content pages.
    pub fn resident_mut(&mut self) -> &mut BoundedIndexCache<usize, P> {
        &mut self.resident
    }

    /// Pops the oldest resident pages until at most `limit` remain, handing
    /// each one to `on_evict` so its visual can be detached.
    ///
    /// Returns the number of evicted pages.
    pub fn evict_over(&mut self, limit: usize, mut on_evict: impl FnMut(usize, P)) -> usize {
        let mut evicted = 0;
        while self.resident.len() > limit {
            let Some((index, page)) = self.resident.pop_oldest() else {
                break;
            };
            on_evict(index, page);
            evicted += 1;
        }
        evicted
    }

    /// Forgets every tab and page without detaching anything.
    pub fn remove_all(&mut self) {
        self.source.clear();
        self.resident.remove_all();
    }
}

impl<T, P> Default for PageCache<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
