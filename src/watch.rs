//! Watch specifications and input-event classification.

use crossterm::event::{Event, KeyEventKind, MouseEventKind};

/// How an event participates in dismissal matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// Carries a key code and modifiers; qualifiers are mandatory.
    Keyboard,
    /// Carries a cell position, possibly a button, and modifiers; subject
    /// to menu-territory suppression.
    Pointer,
    /// Carries neither position nor keys (resize, focus change);
    /// qualifiers are meaningless.
    Window,
}

/// DOM-style type name and class for a crossterm event. Events the monitor
/// has no name for (e.g. paste) return `None` and are never watched.
pub fn classify(event: &Event) -> Option<(&'static str, EventClass)> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(("keydown", EventClass::Keyboard)),
            KeyEventKind::Release => Some(("keyup", EventClass::Keyboard)),
        },
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(("mousedown", EventClass::Pointer)),
            MouseEventKind::Up(_) => Some(("mouseup", EventClass::Pointer)),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                Some(("mousemove", EventClass::Pointer))
            }
            // scrolling is a positioned mouse event in a terminal, so it
            // gets menu-territory suppression like any other pointer kind
            MouseEventKind::ScrollDown
            | MouseEventKind::ScrollUp
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => Some(("scroll", EventClass::Pointer)),
        },
        Event::Resize(_, _) => Some(("resize", EventClass::Window)),
        Event::FocusLost => Some(("blur", EventClass::Window)),
        Event::FocusGained => Some(("focus", EventClass::Window)),
        _ => None,
    }
}

/// One parsed watch specification: an event type name plus zero or more
/// combo qualifiers, e.g. `"keydown:27"`, `"keydown:ctrl+27"`,
/// `"mousedown"`. An unknown type name parses fine and simply never
/// matches a fed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSpec {
    raw: String,
    event_type: String,
    combos: Vec<String>,
}

impl WatchSpec {
    /// Parses `eventType[:keyCombo]*`. Blank or whitespace-only input
    /// yields `None` and is skipped by the caller. Combos are kept as raw
    /// strings; normalization happens at match time.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        let mut splits = raw.split(':');
        let event_type = splits.next().unwrap_or_default().to_string();
        let combos: Vec<String> = splits.map(str::to_string).collect();
        Some(Self {
            raw: raw.to_string(),
            event_type,
            combos,
        })
    }

    /// The specification string as given, used as the registry key.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn combos(&self) -> &[String] {
        &self.combos
    }

    /// Whether any combo qualifiers were declared. With none, any
    /// occurrence of the event type qualifies (pointer and window kinds
    /// only; keyboard matching always requires a combo).
    pub fn has_qualifiers(&self) -> bool {
        !self.combos.is_empty()
    }
}
