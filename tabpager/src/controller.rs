//! Controller binding the tab track to the content track.
//!
//! ## Usage
//!
//! Create a [`TabPagerController`] around a [`TabPagerHost`], forward the
//! host's layout passes and scroll callbacks to it, and call
//! [`TabPagerController::run_deferred`] on the next turn of the event loop
//! after each layout pass.
//!
//! ```
//! use tabpager::{EdgeInsets, Rect, Size, TabPagerArgs, TabPagerController, TabPagerHost, Track};
//!
//! struct Host;
//!
//! impl TabPagerHost for Host {
//!     type Tab = usize;
//!     type Page = usize;
//!
//!     fn tab_views(&mut self) -> Vec<usize> {
//!         (0..4).collect()
//!     }
//!     fn tab_size(&self, _tab: &usize) -> Size {
//!         Size::new(80.0, 40.0)
//!     }
//!     fn content_view(&mut self, index: usize) -> Option<usize> {
//!         Some(index)
//!     }
//!     fn detach_all(&mut self) {}
//!     fn place_tab(&mut self, _tab: &usize, _frame: Rect) {}
//!     fn place_page(&mut self, _page: &usize, _frame: Rect) {}
//!     fn detach_page(&mut self, _page: &usize) {}
//!     fn set_track_frame(&mut self, _track: Track, _frame: Rect) {}
//!     fn set_track_content_size(&mut self, _track: Track, _size: Size) {}
//!     fn set_track_insets(&mut self, _track: Track, _insets: EdgeInsets) {}
//!     fn set_paging_enabled(&mut self, _enabled: bool) {}
//!     fn set_offset(&mut self, _track: Track, _offset: f32, _animated: bool) {}
//! }
//!
//! let mut pager = TabPagerController::new(Host, TabPagerArgs::default().default_page_index(1));
//! pager.layout(Size::new(320.0, 480.0)).unwrap();
//! pager.reload_data().unwrap();
//! pager.run_deferred();
//!
//! assert_eq!(pager.current_page(), Some(1));
//! assert_eq!(pager.resident_pages(), vec![0, 1, 2]);
//! ```

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    args::TabPagerArgs,
    callback::Callback,
    error::TabPagerError,
    geometry::{Rect, Size},
    host::TabPagerHost,
    load_window::LoadWindow,
    page_cache::PageCache,
    page_index::PageIndexState,
    sync::{ScrollSyncMapper, Track},
    tab_layout::TabLayout,
};

/// Offsets closer than this are considered equal when deciding whether a
/// track has to move.
const SETTLE_TOLERANCE: f32 = 0.5;

/// Lifecycle of a [`TabPagerController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been built yet.
    Uninitialized,
    /// Tabs are built; the first page switch has not run yet.
    Built,
    /// Both tracks rest on the given page.
    Settled(usize),
    /// The user is dragging the given track.
    Dragging(Track),
    /// A programmatic page change is animating `awaiting` toward `target`.
    Animating {
        /// Page being moved to.
        target: usize,
        /// Track whose animation end settles the change.
        awaiting: Track,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredTask {
    SwitchToCurrent,
}

/// Drives a tab track and a content track from one authoritative page index.
pub struct TabPagerController<H: TabPagerHost> {
    host: H,
    args: TabPagerArgs,
    phase: Phase,
    viewport: Size,
    layout: TabLayout,
    cache: PageCache<H::Tab, H::Page>,
    window: LoadWindow,
    index: PageIndexState,
    tab_offset: f32,
    content_offset: f32,
    deferred: SmallVec<[DeferredTask; 2]>,
}

impl<H: TabPagerHost> TabPagerController<H> {
    /// Creates a controller. Nothing is built until
    /// [`reload_data`](Self::reload_data) is called.
    pub fn new(host: H, args: TabPagerArgs) -> Self {
        let window = LoadWindow::new(0, args.preload);
        Self {
            host,
            args,
            phase: Phase::Uninitialized,
            viewport: Size::ZERO,
            layout: TabLayout::default(),
            cache: PageCache::new(),
            window,
            index: PageIndexState::new(),
            tab_offset: 0.0,
            content_offset: 0.0,
            deferred: SmallVec::new(),
        }
    }

    /// The host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Configuration the controller was created with.
    pub fn args(&self) -> &TabPagerArgs {
        &self.args
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current page, or `None` before the first page switch.
    pub fn current_page(&self) -> Option<usize> {
        self.index.current()
    }

    /// Page last reported through the "page committed" notification.
    pub fn committed_page(&self) -> Option<usize> {
        self.index.last_committed()
    }

    /// Number of tabs (and pages) in the current build.
    pub fn page_count(&self) -> usize {
        self.layout.len()
    }

    /// Geometry of the tab track for the current build.
    pub fn tab_layout(&self) -> &TabLayout {
        &self.layout
    }

    /// The resident-window policy.
    pub fn load_window(&self) -> &LoadWindow {
        &self.window
    }

    /// Last viewport size passed to [`layout`](Self::layout).
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Last known offset of `track`.
    pub fn offset(&self, track: Track) -> f32 {
        match track {
            Track::Tab => self.tab_offset,
            Track::Content => self.content_offset,
        }
    }

    /// Indices of resident pages, least recently used first.
    pub fn resident_pages(&self) -> Vec<usize> {
        self.cache.resident().keys_oldest_first().copied().collect()
    }

    /// Tab handles of the current build.
    pub fn tabs(&self) -> &[H::Tab] {
        self.cache.source()
    }

    /// Resident page handle for `index`.
    pub fn page(&self, index: usize) -> Option<&H::Page> {
        self.cache.resident().get(&index)
    }

    /// Returns `true` when [`run_deferred`](Self::run_deferred) has work.
    pub fn has_deferred_work(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Toggles page snapping on the content track.
    pub fn set_paging_enabled(&mut self, enabled: bool) {
        self.args.paging_enabled = enabled;
        if self.phase != Phase::Uninitialized {
            self.host.set_paging_enabled(enabled);
        }
    }

    /// Records the viewport from the host's layout pass.
    ///
    /// A changed viewport on an already built controller rebuilds the
    /// geometry and queues a switch back to the current page.
    pub fn layout(&mut self, viewport: Size) -> Result<(), TabPagerError> {
        if !viewport.is_valid() {
            return Err(TabPagerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.viewport {
            return Ok(());
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "viewport changed"
        );
        self.viewport = viewport;
        if self.phase == Phase::Uninitialized {
            return Ok(());
        }
        self.build()?;
        self.schedule(DeferredTask::SwitchToCurrent);
        Ok(())
    }

    /// Rebuilds tabs, drops every resident page and queues the switch to the
    /// current (or default) page.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reload_data(&mut self) -> Result<(), TabPagerError> {
        self.build()?;
        self.schedule(DeferredTask::SwitchToCurrent);
        Ok(())
    }

    /// Runs work queued for the turn of the event loop after a layout pass.
    pub fn run_deferred(&mut self) {
        let tasks = std::mem::take(&mut self.deferred);
        for task in tasks {
            match task {
                DeferredTask::SwitchToCurrent => {
                    let total = self.page_count();
                    if let Some(index) = self.index.resolve(self.args.default_page_index, total)
                    {
                        self.switch_page(index);
                    }
                }
            }
        }
    }

    /// Moves to `index`, optionally animated.
    ///
    /// Out-of-range indices are ignored and return `false`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn change_page(&mut self, index: usize, animated: bool) -> bool {
        self.request_page(index, animated, None)
    }

    /// Like [`change_page`](Self::change_page), calling `completion` once the
    /// move settles.
    ///
    /// The completion is dropped without being called if the move is
    /// interrupted by a drag or another page change.
    #[tracing::instrument(level = "debug", skip(self, completion))]
    pub fn change_page_with(
        &mut self,
        index: usize,
        animated: bool,
        completion: impl Into<Callback>,
    ) -> bool {
        self.request_page(index, animated, Some(completion.into()))
    }

    /// Handles a tap on tab `index`.
    pub fn select_tab(&mut self, index: usize) -> bool {
        self.request_page(index, true, None)
    }

    /// The user started dragging `track`.
    pub fn will_begin_dragging(&mut self, track: Track) {
        if !self.is_interactive() {
            return;
        }
        self.cancel_transition();
        self.stop_motion();
        trace!(?track, "drag began");
        self.phase = Phase::Dragging(track);
    }

    /// `track` scrolled to `offset`.
    ///
    /// Only the driving track is followed; scroll reports from the follower
    /// echo offsets this controller set itself and are ignored.
    pub fn did_scroll(&mut self, track: Track, offset: f32) {
        match self.phase {
            Phase::Dragging(driver) if driver == track => self.drive(track, offset, true),
            Phase::Animating { awaiting, .. } if awaiting == track => {
                self.drive(track, offset, false)
            }
            _ => trace!(?track, offset, "scroll ignored"),
        }
    }

    /// The user lifted their finger off `track`.
    pub fn did_end_dragging(&mut self, track: Track, will_decelerate: bool) {
        if self.phase != Phase::Dragging(track) {
            return;
        }
        if will_decelerate {
            trace!(?track, "drag released with momentum");
            return;
        }
        self.finish_drag(track);
    }

    /// Momentum on `track` ran out.
    pub fn did_end_decelerating(&mut self, track: Track) {
        if self.phase == Phase::Dragging(track) {
            self.finish_drag(track);
        }
    }

    /// An animated offset change on `track` finished.
    pub fn did_end_scrolling_animation(&mut self, track: Track) {
        let Phase::Animating { target, awaiting } = self.phase else {
            return;
        };
        if awaiting != track {
            return;
        }
        if let Some((tab, content)) = self.settled_offsets(target) {
            self.jump(Track::Tab, tab);
            self.jump(Track::Content, content);
        }
        self.settle(target);
    }

    /// Makes the pages around the current page resident and evicts the
    /// oldest pages beyond the window limit.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn load_contents(&mut self) {
        let Some(current) = self.index.current() else {
            return;
        };
        if self.page_count() == 0 {
            return;
        }

        let page_width = self.viewport.width;
        let content_height = self.content_height();
        for index in self.window.resident_range(current) {
            let frame = Rect::new(index as f32 * page_width, 0.0, page_width, content_height);
            if let Some(page) = self.cache.resident().get(&index) {
                self.host.place_page(page, frame);
                self.cache.resident_mut().touch(&index);
                continue;
            }
            let Some(page) = self.host.content_view(index) else {
                warn!(index, "no content view for page; leaving it unloaded");
                continue;
            };
            trace!(index, "page loaded");
            self.host.place_page(&page, frame);
            self.cache.resident_mut().set(index, page);
        }

        let limit = self.window.effective_limit();
        let host = &mut self.host;
        let evicted = self.cache.evict_over(limit, |index, page| {
            trace!(index, "page evicted");
            host.detach_page(&page);
        });
        if evicted > 0 {
            debug!(
                evicted,
                resident = self.cache.resident().len(),
                limit,
                "evicted pages"
            );
        }
    }

    fn build(&mut self) -> Result<(), TabPagerError> {
        self.cancel_transition();
        let tabs = self.host.tab_views();
        self.cache.remove_all();
        self.host.detach_all();
        self.layout = TabLayout::default();
        self.window.set_total(0);
        self.window.set_preload(self.args.preload);
        self.deferred.clear();
        self.phase = Phase::Built;
        if tabs.is_empty() {
            self.index.resolve(self.args.default_page_index, 0);
            debug!("no tabs to build");
            return Ok(());
        }

        let host = &self.host;
        let layout = TabLayout::from_sizes(tabs.iter().map(|tab| host.tab_size(tab)))?;
        for (index, tab) in tabs.iter().enumerate() {
            if let Some(frame) = layout.tab_frame(index) {
                self.host.place_tab(tab, frame);
            }
        }

        let width = self.viewport.width;
        let bar_height = layout.bar_height();
        let content_height = (self.viewport.height - bar_height).max(0.0);
        self.host
            .set_track_frame(Track::Tab, Rect::new(0.0, 0.0, width, bar_height));
        self.host
            .set_track_insets(Track::Tab, layout.track_insets(width));
        self.host.set_track_content_size(
            Track::Tab,
            Size::new(layout.total_width(), bar_height),
        );
        self.host.set_track_frame(
            Track::Content,
            Rect::new(0.0, bar_height, width, content_height),
        );
        self.host.set_track_content_size(
            Track::Content,
            Size::new(width * tabs.len() as f32, content_height),
        );
        self.host.set_paging_enabled(self.args.paging_enabled);

        debug!(
            tabs = tabs.len(),
            bar_height,
            total_width = layout.total_width(),
            "tab layout built"
        );
        self.window.set_total(tabs.len());
        self.index.resolve(self.args.default_page_index, tabs.len());
        self.layout = layout;
        self.cache.set_source(tabs);
        Ok(())
    }

    fn schedule(&mut self, task: DeferredTask) {
        if self.page_count() == 0 || self.deferred.contains(&task) {
            return;
        }
        self.deferred.push(task);
    }

    fn switch_page(&mut self, index: usize) {
        let Some((tab, content)) = self.settled_offsets(index) else {
            warn!(index, "viewport has no width; page switch skipped");
            return;
        };
        debug!(index, "switching page");
        self.jump(Track::Tab, tab);
        self.jump(Track::Content, content);
        self.settle(index);
    }

    fn request_page(&mut self, index: usize, animated: bool, completion: Option<Callback>) -> bool {
        let total = self.page_count();
        if index >= total {
            debug!(index, total, "page change out of range ignored");
            return false;
        }
        self.cancel_transition();
        if let Some(completion) = completion
            && self.index.set_completion(completion).is_some()
        {
            debug!("replaced pending page change completion");
        }

        let Some((tab, content)) = self.settled_offsets(index) else {
            // Picked up by the deferred switch once the viewport is known.
            self.index.set_current(index);
            return true;
        };

        self.stop_motion();
        let content_moves = (self.content_offset - content).abs() >= SETTLE_TOLERANCE;
        let tab_moves = (self.tab_offset - tab).abs() >= SETTLE_TOLERANCE;
        if !animated || (!content_moves && !tab_moves) {
            self.jump(Track::Tab, tab);
            self.jump(Track::Content, content);
            self.settle(index);
            return true;
        }

        let (awaiting, offset) = if content_moves {
            (Track::Content, content)
        } else {
            (Track::Tab, tab)
        };
        debug!(index, ?awaiting, "animating page change");
        self.phase = Phase::Animating {
            target: index,
            awaiting,
        };
        self.host.set_offset(awaiting, offset, true);
        true
    }

    fn drive(&mut self, track: Track, offset: f32, dragging: bool) {
        self.store_offset(track, offset);
        let current = self.index.current().unwrap_or(0);
        let Some(mapper) = self.mapper() else {
            return;
        };
        // Each segment of the mapping belongs to the page it resolves to, so
        // the follower is mapped with the candidate and not the stale page.
        let (follower, candidate) = match track {
            Track::Content => {
                let index = mapper.resolve_index(offset);
                (Some(mapper.follow(track, offset, index)), index)
            }
            Track::Tab if dragging && self.args.tab_scroll_interlocked => {
                let tab = mapper.resolve_tab_index(offset);
                let content = mapper.follow(track, offset, tab);
                (Some(content), mapper.resolve_index(content))
            }
            Track::Tab => (None, mapper.resolve_tab_index(offset)),
        };

        if let Some(follower_offset) = follower {
            self.jump(track.other(), follower_offset);
            if self.index.current() != Some(candidate) {
                trace!(from = current, to = candidate, "current page moved");
                self.index.set_current(candidate);
                self.load_contents();
            }
        }
        if dragging && let Some(handler) = &self.args.on_scrolling {
            handler.call(candidate);
        }
    }

    fn finish_drag(&mut self, track: Track) {
        let Some(mapper) = self.mapper() else {
            return;
        };
        match track {
            Track::Content => {
                let index = mapper.resolve_index(self.content_offset);
                trace!(index, "content drag settled");
                self.settle(index);
            }
            Track::Tab => {
                let index = if self.args.tab_scroll_interlocked {
                    mapper.resolve_index(self.content_offset)
                } else {
                    mapper.resolve_tab_index(self.tab_offset)
                };
                trace!(index, "tab drag settled");
                self.phase = Phase::Settled(self.index.current().unwrap_or(index));
                self.request_page(index, true, None);
            }
        }
    }

    fn settle(&mut self, index: usize) {
        self.phase = Phase::Settled(index);
        if self.index.commit(index) {
            debug!(index, "page committed");
            if let Some(handler) = &self.args.on_page_committed {
                handler.call(index);
            }
        }
        self.load_contents();
        if let Some(completion) = self.index.take_completion() {
            completion.call();
        }
    }

    /// Halts momentum and animations on both tracks. Goes straight to the
    /// host so no settle logic runs.
    fn stop_motion(&mut self) {
        self.host.set_offset(Track::Tab, self.tab_offset, false);
        self.host.set_offset(Track::Content, self.content_offset, false);
    }

    fn cancel_transition(&mut self) {
        let Phase::Animating { target, .. } = self.phase else {
            return;
        };
        if self.index.take_completion().is_some() {
            debug!(target, "dropped completion of interrupted page change");
        }
        self.phase = Phase::Settled(self.index.current().unwrap_or(target));
    }

    fn jump(&mut self, track: Track, offset: f32) {
        self.store_offset(track, offset);
        self.host.set_offset(track, offset, false);
    }

    fn store_offset(&mut self, track: Track, offset: f32) {
        match track {
            Track::Tab => self.tab_offset = offset,
            Track::Content => self.content_offset = offset,
        }
    }

    fn is_interactive(&self) -> bool {
        matches!(
            self.phase,
            Phase::Settled(_) | Phase::Dragging(_) | Phase::Animating { .. }
        )
    }

    fn mapper(&self) -> Option<ScrollSyncMapper<'_>> {
        ScrollSyncMapper::new(&self.layout, self.viewport.width)
    }

    fn settled_offsets(&self, index: usize) -> Option<(f32, f32)> {
        let mapper = self.mapper()?;
        Some((
            mapper.settled_offset(Track::Tab, index),
            mapper.settled_offset(Track::Content, index),
        ))
    }

    fn content_height(&self) -> f32 {
        (self.viewport.height - self.layout.bar_height()).max(0.0)
    }
}
