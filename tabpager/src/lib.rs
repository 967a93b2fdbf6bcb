//! Tab-indexed pager core.
//!
//! A horizontal strip of variable-width tabs is bound to a horizontal strip of
//! viewport-wide content pages. Dragging either strip drives the other through
//! [`ScrollSyncMapper`], and content pages are realized lazily around the
//! current page and evicted oldest-first.
//!
//! The crate owns no views. A host implements [`TabPagerHost`] to supply tab
//! and page handles and to carry out the placement and scrolling the
//! [`TabPagerController`] requests.
//!
//! # Modules
//!
//! - [`index_cache`] - access-ordered storage for resident pages
//! - [`load_window`] - how many pages stay resident and which must load
//! - [`page_cache`] - tab handles and resident pages of one build
//! - [`page_index`] - current and committed page bookkeeping
//! - [`tab_layout`] - tab strip geometry
//! - [`sync`] - offset mapping between the two tracks
//! - [`controller`] - the state machine tying everything together

pub mod args;
pub mod callback;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod index_cache;
pub mod load_window;
pub mod page_cache;
pub mod page_index;
pub mod sync;
pub mod tab_layout;

pub use args::TabPagerArgs;
pub use callback::{Callback, CallbackWith};
pub use controller::{Phase, TabPagerController};
pub use error::TabPagerError;
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use host::TabPagerHost;
pub use index_cache::BoundedIndexCache;
pub use load_window::{LoadWindow, MIN_RESIDENT_PAGES, WINDOW_HALF_WIDTH};
pub use page_cache::PageCache;
pub use page_index::PageIndexState;
pub use sync::{ScrollSyncMapper, Track};
pub use tab_layout::TabLayout;
