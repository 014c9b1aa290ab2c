use std::collections::BTreeMap;

use crossterm::event::Event;

use crate::combo::{button_code, contains_combo, key_code, pressed_combo};
use crate::geom::rect_contains_inclusive;
use crate::presenter::MenuPresenter;
use crate::watch::{classify, EventClass, WatchSpec};

/// Watches the global input stream for events that should dismiss the
/// open menu.
///
/// `start` fills a registry of parsed watch specifications, keyed by the
/// raw specification string; `stop` empties it. Events fed through
/// [`handle_event`](Self::handle_event) are matched against the registry
/// and the answer comes back as the return value. After `stop`, no fed
/// event can signal a dismissal.
#[derive(Debug, Default)]
pub struct InputEventWatcher {
    registry: BTreeMap<String, WatchSpec>,
}

impl InputEventWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the given watch specifications, replacing any previous
    /// session's registry. Blank entries are skipped; duplicate raw
    /// strings collapse to one registry entry.
    pub fn start<I, S>(&mut self, specs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop();
        for spec in specs {
            let raw = spec.as_ref();
            let Some(parsed) = WatchSpec::parse(raw) else {
                continue;
            };
            tracing::debug!(spec = %raw, event_type = %parsed.event_type(), "monitor add listener");
            self.registry.insert(parsed.raw().to_string(), parsed);
        }
    }

    /// Clears the registry. Idempotent.
    pub fn stop(&mut self) {
        self.registry.clear();
    }

    /// Number of installed watch specifications.
    pub fn watch_count(&self) -> usize {
        self.registry.len()
    }

    /// Evaluates one input event against the registry. Returns `true`
    /// when the event qualifies as a dismissal trigger under at least one
    /// installed specification.
    pub fn handle_event(&self, event: &Event, presenter: &dyn MenuPresenter) -> bool {
        let Some((event_type, class)) = classify(event) else {
            return false;
        };
        let mut watched = self
            .registry
            .values()
            .filter(|spec| spec.event_type() == event_type)
            .peekable();
        if watched.peek().is_none() {
            return false;
        }

        match class {
            EventClass::Pointer => {
                let Event::Mouse(mouse) = event else {
                    return false;
                };
                let menu_rects = presenter.menu_rects();
                if menu_rects.len() > 1 {
                    // a submenu is open; it may extend outside the root's
                    // rectangle, so the pointer counts as menu territory
                    return false;
                }
                if let [root] = menu_rects.as_slice()
                    && rect_contains_inclusive(*root, mouse.column, mouse.row)
                {
                    return false;
                }
                let pressed = pressed_combo(button_code(mouse.kind), mouse.modifiers);
                watched.any(|spec| {
                    !spec.has_qualifiers() || contains_combo(spec.combos(), &pressed)
                })
            }
            EventClass::Keyboard => {
                let Event::Key(key) = event else {
                    return false;
                };
                let pressed = pressed_combo(key_code(key.code), key.modifiers);
                // a spec with no declared combos never fires for keyboard
                watched.any(|spec| {
                    spec.has_qualifiers() && contains_combo(spec.combos(), &pressed)
                })
            }
            EventClass::Window => {
                let mut qualified = false;
                for spec in watched {
                    if spec.has_qualifiers() {
                        // resize/focus events carry no keys or buttons
                        tracing::error!(spec = %spec.raw(), "monitor unsupported event");
                    } else {
                        qualified = true;
                    }
                }
                qualified
            }
        }
    }
}
