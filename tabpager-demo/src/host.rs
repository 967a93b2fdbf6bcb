//! A headless host that logs every request instead of drawing.

use tabpager::{EdgeInsets, Rect, Size, TabPagerHost, Track};
use tracing::{debug, info};

/// Width added around a tab title.
const TAB_PADDING: f32 = 32.0;
/// Rough advance of one title character.
const GLYPH_WIDTH: f32 = 9.0;
const TAB_HEIGHT: f32 = 44.0;

#[derive(Debug, Clone)]
pub struct TabLabel {
    pub title: String,
    pub size: Size,
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub index: usize,
    pub title: String,
}

/// Host backed by a list of titles. Animated offset requests are parked in
/// [`ConsoleHost::pending_animation`] for the session driver to play back.
pub struct ConsoleHost {
    titles: Vec<String>,
    pub pending_animation: Option<(Track, f32)>,
    pub pages_created: usize,
}

impl ConsoleHost {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            pending_animation: None,
            pages_created: 0,
        }
    }

    fn measure(title: &str) -> Size {
        Size::new(title.chars().count() as f32 * GLYPH_WIDTH + TAB_PADDING, TAB_HEIGHT)
    }
}

impl TabPagerHost for ConsoleHost {
    type Tab = TabLabel;
    type Page = PageView;

    fn tab_views(&mut self) -> Vec<TabLabel> {
        self.titles
            .iter()
            .map(|title| TabLabel {
                title: title.clone(),
                size: Self::measure(title),
            })
            .collect()
    }

    fn tab_size(&self, tab: &TabLabel) -> Size {
        tab.size
    }

    fn content_view(&mut self, index: usize) -> Option<PageView> {
        let title = self.titles.get(index)?;
        self.pages_created += 1;
        info!(index, %title, "creating page");
        Some(PageView {
            index,
            title: title.clone(),
        })
    }

    fn detach_all(&mut self) {
        info!("detaching all views");
    }

    fn place_tab(&mut self, tab: &TabLabel, frame: Rect) {
        info!(title = %tab.title, x = frame.min_x(), width = frame.size.width, "place tab");
    }

    fn place_page(&mut self, page: &PageView, frame: Rect) {
        info!(index = page.index, x = frame.min_x(), "place page");
    }

    fn detach_page(&mut self, page: &PageView) {
        info!(index = page.index, title = %page.title, "detach page");
    }

    fn set_track_frame(&mut self, track: Track, frame: Rect) {
        info!(?track, ?frame, "track frame");
    }

    fn set_track_content_size(&mut self, track: Track, size: Size) {
        info!(?track, width = size.width, height = size.height, "track content size");
    }

    fn set_track_insets(&mut self, track: Track, insets: EdgeInsets) {
        info!(?track, left = insets.left, right = insets.right, "track insets");
    }

    fn set_paging_enabled(&mut self, enabled: bool) {
        info!(enabled, "paging");
    }

    fn set_offset(&mut self, track: Track, offset: f32, animated: bool) {
        debug!(?track, offset, animated, "set offset");
        if animated {
            self.pending_animation = Some((track, offset));
        } else if self
            .pending_animation
            .is_some_and(|(pending, _)| pending == track)
        {
            self.pending_animation = None;
        }
    }
}
