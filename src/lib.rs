//! Auto-hide coordination for terminal context menus.
//!
//! Given an open popup menu (a root menu plus zero or more nested
//! submenus) anchored to a trigger region, [`ContextMenuMonitor`] decides
//! when that menu should close: on a qualifying input event outside the
//! menu, on a terminal resize, or when the trigger region moves. The
//! embedding application owns rendering and menu state; it feeds input
//! events and loop ticks to the monitor and supplies the hide action the
//! monitor invokes.
//!
//! ```no_run
//! use std::time::Instant;
//! use ratatui::prelude::Rect;
//! use term_menu::{ContextMenuMonitor, MenuPresenter};
//!
//! struct App {
//!     open_menus: Vec<Rect>,
//!     trigger: Option<Rect>,
//! }
//!
//! impl MenuPresenter for App {
//!     fn menu_rects(&self) -> Vec<Rect> {
//!         self.open_menus.clone()
//!     }
//!     fn trigger_rect(&self) -> Option<Rect> {
//!         self.trigger
//!     }
//! }
//!
//! let mut monitor = ContextMenuMonitor::new(|| { /* hide the menu */ });
//! monitor.start();
//! # let app = App { open_menus: vec![], trigger: None };
//! // in the application's event loop:
//! // monitor.handle_event(&event, &app);
//! monitor.tick(Instant::now(), &app);
//! ```

pub mod combo;
pub mod constants;
pub mod geom;
pub mod monitor;
pub mod presenter;
pub mod watch;

pub use constants::{DEFAULT_WATCHES, TARGET_POLL_INTERVAL};
pub use monitor::{ContextMenuMonitor, InputEventWatcher, TargetRectPoller};
pub use presenter::MenuPresenter;
pub use watch::WatchSpec;
