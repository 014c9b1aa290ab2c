//! Shared crate-wide constants.

use std::time::Duration;

/// Period between two target-rectangle measurements.
///
/// Layout can move the menu's trigger element without producing any input
/// event, so the poller re-measures on a fixed cadence. Dismissal latency
/// for a moved trigger is bounded by this period; lowering it trades CPU
/// for responsiveness.
pub const TARGET_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Watch specifications installed by [`ContextMenuMonitor::start`].
///
/// ESC pressed anywhere, any mouse button pressed outside the menu, a
/// terminal resize, or scrolling outside the menu all dismiss it.
///
/// [`ContextMenuMonitor::start`]: crate::ContextMenuMonitor::start
pub const DEFAULT_WATCHES: &[&str] = &[
    "keydown:27", // ESC
    "mousedown",
    "resize",
    "scroll",
];
