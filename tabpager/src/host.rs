//! Port between the controller and the host view system.
//!
//! The controller never owns views. It asks the host for tab and page
//! handles and requests side effects (placing, detaching, scrolling) through
//! this trait, so it has no dependency on a concrete toolkit.

use crate::{
    geometry::{EdgeInsets, Rect, Size},
    sync::Track,
};

/// Host-side collaborator driven by a [`TabPagerController`](crate::TabPagerController).
///
/// All calls happen on the host's UI thread. Implementations must not call
/// back into the controller from inside these methods; scroll notifications
/// caused by [`set_offset`](Self::set_offset) are delivered later through the
/// controller's event methods like any other.
pub trait TabPagerHost {
    /// Visual handle of a tab header.
    type Tab;
    /// Visual handle of a content page.
    type Page;

    /// Tab handles for every index, in order. Called on every build.
    fn tab_views(&mut self) -> Vec<Self::Tab>;

    /// Intrinsic size of a tab handle.
    fn tab_size(&self, tab: &Self::Tab) -> Size;

    /// Content page for `index`. Called only when the page enters the
    /// resident window; `None` leaves that index unloaded.
    fn content_view(&mut self, index: usize) -> Option<Self::Page>;

    /// Detach every tab and page currently attached to either track.
    fn detach_all(&mut self);

    /// Attach (or move) a tab inside the tab track.
    fn place_tab(&mut self, tab: &Self::Tab, frame: Rect);

    /// Attach (or move) a page inside the content track.
    fn place_page(&mut self, page: &Self::Page, frame: Rect);

    /// Detach an evicted page.
    fn detach_page(&mut self, page: &Self::Page);

    /// Frame of a track within the control.
    fn set_track_frame(&mut self, track: Track, frame: Rect);

    /// Scrollable content size of a track.
    fn set_track_content_size(&mut self, track: Track, size: Size);

    /// Content insets of a track.
    fn set_track_insets(&mut self, track: Track, insets: EdgeInsets);

    /// Whether the content track snaps to page boundaries.
    fn set_paging_enabled(&mut self, enabled: bool);

    /// Scroll a track. With `animated == false` any in-flight motion on that
    /// track stops immediately at `offset`.
    fn set_offset(&mut self, track: Track, offset: f32, animated: bool);
}
