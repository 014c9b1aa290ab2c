use std::time::{Duration, Instant};

use ratatui::prelude::Rect;

use crate::constants::TARGET_POLL_INTERVAL;
use crate::presenter::MenuPresenter;

/// Re-measures the trigger element's bounding rectangle on a fixed cadence
/// and signals when it moves.
///
/// The loop is cooperative: the owner calls [`tick`](Self::tick) from its
/// event loop with the current time, and the poller runs at most one
/// measurement cycle per elapsed period. `stop` sets a flag read at the
/// top of every cycle and disarms the pending deadline, so no stray cycle
/// can run afterwards.
#[derive(Debug)]
pub struct TargetRectPoller {
    period: Duration,
    stopped: bool,
    deadline: Option<Instant>,
    snapshot: Option<Rect>,
}

impl Default for TargetRectPoller {
    fn default() -> Self {
        Self {
            period: TARGET_POLL_INTERVAL,
            stopped: true,
            deadline: None,
            snapshot: None,
        }
    }
}

impl TargetRectPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the poll loop, discarding any previous session's baseline.
    pub fn start(&mut self) {
        self.stop();
        self.stopped = false;
    }

    /// Halts the loop. Safe to call on a poller that was never started.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.deadline = None;
        self.snapshot = None;
    }

    pub fn running(&self) -> bool {
        !self.stopped
    }

    /// The rectangle the next measurement will be compared against, if one
    /// has been captured this session.
    pub fn baseline(&self) -> Option<Rect> {
        self.snapshot
    }

    /// Drives the loop. Runs one measurement cycle when the armed deadline
    /// has elapsed; returns `true` when that cycle observed the trigger
    /// rectangle change. The first measurement happens one period after
    /// `start`.
    pub fn tick(&mut self, now: Instant, presenter: &dyn MenuPresenter) -> bool {
        if self.stopped {
            return false;
        }
        let Some(deadline) = self.deadline else {
            self.deadline = Some(now + self.period);
            return false;
        };
        if now < deadline {
            return false;
        }

        let changed = match presenter.trigger_rect() {
            // no renderable trigger; skip measurement, keep the baseline
            None => false,
            Some(rect) => match self.snapshot {
                Some(previous) if previous != rect => {
                    // target moved: signal once and clear the baseline
                    self.snapshot = None;
                    true
                }
                _ => {
                    self.snapshot = Some(rect);
                    false
                }
            },
        };
        self.deadline = Some(now + self.period);
        changed
    }
}
