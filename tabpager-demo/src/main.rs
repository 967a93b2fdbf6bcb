//! Scripted, headless walk through a tab pager session.
//!
//! Run with `RUST_LOG=tabpager=trace` to see every mapping step.

mod host;

use std::sync::Arc;

use parking_lot::Mutex;
use tabpager::{Size, TabPagerArgs, TabPagerController, TabPagerError, Track};
use tracing::info;

use crate::host::ConsoleHost;

const VIEWPORT: Size = Size::new(375.0, 667.0);
const FRAMES_PER_GESTURE: usize = 8;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            match tracing_subscriber::EnvFilter::try_new("error,tabpager=debug,tabpager_demo=info")
            {
                Ok(filter) => filter,
                Err(_) => tracing_subscriber::EnvFilter::new("error"),
            }
        }
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Drags `track` from its current offset to `to`, one scroll report per frame.
fn drag(pager: &mut TabPagerController<ConsoleHost>, track: Track, to: f32) {
    pager.will_begin_dragging(track);
    let from = pager.offset(track);
    for frame in 1..=FRAMES_PER_GESTURE {
        let t = frame as f32 / FRAMES_PER_GESTURE as f32;
        pager.did_scroll(track, from + (to - from) * t);
    }
    pager.did_end_dragging(track, false);
}

/// Plays back whatever animation the controller asked the host for.
fn play_animation(pager: &mut TabPagerController<ConsoleHost>) {
    while let Some((track, target)) = pager.host_mut().pending_animation.take() {
        let from = pager.offset(track);
        for frame in 1..=FRAMES_PER_GESTURE {
            let t = frame as f32 / FRAMES_PER_GESTURE as f32;
            pager.did_scroll(track, from + (target - from) * t);
        }
        pager.did_end_scrolling_animation(track);
    }
}

fn main() -> Result<(), TabPagerError> {
    init_tracing();

    let committed = Arc::new(Mutex::new(Vec::new()));
    let scrolled = Arc::new(Mutex::new(0usize));
    let args = {
        let committed = Arc::clone(&committed);
        let scrolled = Arc::clone(&scrolled);
        TabPagerArgs::default()
            .default_page_index(1)
            .on_page_committed(move |index| committed.lock().push(index))
            .on_scrolling(move |_| *scrolled.lock() += 1)
    };

    let host = ConsoleHost::new([
        "Top",
        "Politics",
        "Economy",
        "World",
        "Technology",
        "Sports",
        "Entertainment",
    ]);
    let mut pager = TabPagerController::new(host, args);
    pager.layout(VIEWPORT)?;
    pager.reload_data()?;
    pager.run_deferred();
    info!(page = ?pager.current_page(), resident = ?pager.resident_pages(), "shown");

    let next = pager.offset(Track::Content) + VIEWPORT.width;
    drag(&mut pager, Track::Content, next);
    info!(page = ?pager.current_page(), tab_offset = pager.offset(Track::Tab), "content drag settled");

    pager.select_tab(5);
    play_animation(&mut pager);
    info!(page = ?pager.current_page(), resident = ?pager.resident_pages(), "tab selected");

    let tab_target = pager.offset(Track::Tab) - 120.0;
    drag(&mut pager, Track::Tab, tab_target);
    play_animation(&mut pager);
    info!(page = ?pager.current_page(), "tab drag settled");

    let done = Arc::new(Mutex::new(false));
    let flag = Arc::clone(&done);
    pager.change_page_with(0, false, move || *flag.lock() = true);

    let resident: Vec<&str> = pager
        .resident_pages()
        .into_iter()
        .filter_map(|index| pager.page(index))
        .map(|page| page.title.as_str())
        .collect();
    info!(
        tabs = pager.tabs().len(),
        ?resident,
        committed = ?committed.lock().as_slice(),
        scroll_reports = *scrolled.lock(),
        pages_created = pager.host().pages_created,
        jump_completed = *done.lock(),
        "session finished"
    );
    Ok(())
}
