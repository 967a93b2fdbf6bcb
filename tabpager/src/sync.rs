//! Offset mapping between the tab track and the content track.
//!
//! The tab track holds tabs of varying widths; the content track holds pages
//! that are all exactly one viewport wide. Around the settled index `i`:
//!
//! ```text
//! tabPrefix(i)     = sum of tab widths before i
//! contentPrefix(i) = i * W
//! scale(i)         = W / tabWidth(i)
//!
//! content = (tab + W/2 - tabPrefix(i)) * scale(i) + contentPrefix(i) - W/2
//! tab     = (content + W/2 - contentPrefix(i)) / scale(i) + tabPrefix(i) - W/2
//! ```
//!
//! Both directions re-centre the driving offset on the midpoint of cell `i`,
//! rescale by the width ratio of that cell and re-express the result in the
//! follower's coordinates. `i` only changes when the controller updates the
//! current page, never per frame.

use crate::tab_layout::TabLayout;

/// One of the two horizontally scrolling strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Strip of tab headers with heterogeneous widths.
    Tab,
    /// Strip of content pages, each one viewport wide.
    Content,
}

impl Track {
    /// The other track.
    pub fn other(self) -> Self {
        match self {
            Self::Tab => Self::Content,
            Self::Content => Self::Tab,
        }
    }
}

/// Stateless mapper over a validated [`TabLayout`] and a page width.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSyncMapper<'a> {
    layout: &'a TabLayout,
    page_width: f32,
}

impl<'a> ScrollSyncMapper<'a> {
    /// Creates a mapper, or `None` when there is nothing to map: no tabs, or a
    /// page width that is not positive and finite.
    ///
    /// Tab widths are already guaranteed positive by [`TabLayout`], so no
    /// mapping can divide by zero.
    pub fn new(layout: &'a TabLayout, page_width: f32) -> Option<Self> {
        if layout.is_empty() || !page_width.is_finite() || page_width <= 0.0 {
            return None;
        }
        Some(Self { layout, page_width })
    }

    /// Width of one content page.
    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.layout.len() - 1)
    }

    /// Summed tab width before `index`.
    pub fn tab_prefix(&self, index: usize) -> f32 {
        self.layout.prefix(self.clamp(index))
    }

    /// Summed page width before `index`.
    pub fn content_prefix(&self, index: usize) -> f32 {
        self.clamp(index) as f32 * self.page_width
    }

    /// Ratio of the page width to the width of tab `index`.
    pub fn scale(&self, index: usize) -> f32 {
        self.page_width / self.layout.width(self.clamp(index))
    }

    /// Content offset that follows a tab offset while `settled` is current.
    pub fn content_offset_for_tab(&self, tab_offset: f32, settled: usize) -> f32 {
        let half = self.page_width / 2.0;
        (tab_offset + half - self.tab_prefix(settled)) * self.scale(settled)
            + self.content_prefix(settled)
            - half
    }

    /// Tab offset that follows a content offset while `settled` is current.
    pub fn tab_offset_for_content(&self, content_offset: f32, settled: usize) -> f32 {
        let half = self.page_width / 2.0;
        (content_offset + half - self.content_prefix(settled)) / self.scale(settled)
            + self.tab_prefix(settled)
            - half
    }

    /// Offset of the follower track given the `driver` track's offset.
    pub fn follow(&self, driver: Track, offset: f32, settled: usize) -> f32 {
        match driver {
            Track::Tab => self.content_offset_for_tab(offset, settled),
            Track::Content => self.tab_offset_for_content(offset, settled),
        }
    }

    /// Offset of `track` when `index` is settled: the page fills the viewport
    /// and its tab is centred.
    pub fn settled_offset(&self, track: Track, index: usize) -> f32 {
        let content = self.content_prefix(index);
        match track {
            Track::Content => content,
            Track::Tab => self.tab_offset_for_content(content, index),
        }
    }

    /// Page nearest to a content offset, clamped to the valid range.
    pub fn resolve_index(&self, content_offset: f32) -> usize {
        let half = self.page_width / 2.0;
        let page = ((content_offset + half) / self.page_width).floor();
        if !page.is_finite() || page <= 0.0 {
            return 0;
        }
        self.clamp(page as usize)
    }

    /// Tab under the viewport centre for a tab offset.
    pub fn resolve_tab_index(&self, tab_offset: f32) -> usize {
        self.layout.tab_at(tab_offset + self.page_width / 2.0)
    }
}
