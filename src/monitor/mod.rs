//! The auto-hide monitor: one facade coordinating two watchers.

mod input_watcher;
mod rect_poller;

pub use input_watcher::InputEventWatcher;
pub use rect_poller::TargetRectPoller;

use std::fmt;
use std::time::Instant;

use crossterm::event::Event;

use crate::constants::DEFAULT_WATCHES;
use crate::presenter::MenuPresenter;

/// Decides when the currently open context menu should be dismissed.
///
/// The monitor owns an [`InputEventWatcher`] and a [`TargetRectPoller`]
/// and funnels both of their signals into one caller-supplied hide action.
/// The embedding application opens a session with [`start`](Self::start)
/// when it shows a menu, feeds every input event through
/// [`handle_event`](Self::handle_event) and its loop ticks through
/// [`tick`](Self::tick), and the monitor invokes the hide action when
/// either watcher decides the menu should close. A dismissal ends the
/// session, so the hide action fires at most once per `start`.
///
/// Each monitor instance carries its own registry and poll state, so
/// independent monitors can coexist.
pub struct ContextMenuMonitor {
    input: InputEventWatcher,
    poller: TargetRectPoller,
    on_hide: Box<dyn FnMut()>,
    running: bool,
}

impl ContextMenuMonitor {
    /// `on_hide` is invoked, with no arguments, to request the menu close.
    /// It should be idempotent; the monitor does not track menu visibility
    /// itself.
    pub fn new<F>(on_hide: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            input: InputEventWatcher::new(),
            poller: TargetRectPoller::new(),
            on_hide: Box::new(on_hide),
            running: false,
        }
    }

    /// Opens a monitoring session with the default watch set
    /// ([`DEFAULT_WATCHES`]).
    pub fn start(&mut self) {
        self.start_with(DEFAULT_WATCHES);
    }

    /// Opens a monitoring session with a custom watch set. Any previous
    /// session is fully stopped first, so a repeated `start` never leaks
    /// stale registry entries or a stale poll baseline.
    pub fn start_with<I, S>(&mut self, watches: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop();
        tracing::debug!("monitor start");
        self.input.start(watches);
        self.poller.start();
        self.running = true;
    }

    /// Closes the session, stopping both watchers unconditionally.
    /// Idempotent; calling it when not started is a no-op.
    pub fn stop(&mut self) {
        self.poller.stop();
        self.input.stop();
        if self.running {
            tracing::debug!("monitor stop");
        }
        self.running = false;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Feeds one input event through the watcher. Returns `true` when the
    /// event dismissed the menu, in which case the hide action has been
    /// invoked and the session is over.
    pub fn handle_event(&mut self, event: &Event, presenter: &dyn MenuPresenter) -> bool {
        if self.running && self.input.handle_event(event, presenter) {
            self.dismiss();
            return true;
        }
        false
    }

    /// Drives the rect poller from the owner's loop. Returns `true` when
    /// a poll cycle dismissed the menu.
    pub fn tick(&mut self, now: Instant, presenter: &dyn MenuPresenter) -> bool {
        if self.running && self.poller.tick(now, presenter) {
            self.dismiss();
            return true;
        }
        false
    }

    fn dismiss(&mut self) {
        (self.on_hide)();
        tracing::debug!("monitor hidemenu");
        self.stop();
    }
}

impl fmt::Debug for ContextMenuMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenuMonitor")
            .field("input", &self.input)
            .field("poller", &self.poller)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}
