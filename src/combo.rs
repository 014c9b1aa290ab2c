//! Key/button combo strings.
//!
//! A combo is an unordered set of tokens joined by `+`: one numeric code
//! (a key code or mouse button code) plus zero or more modifier names
//! (`alt`, `ctrl`, `meta`, `shift`). `"ctrl+27"`, `"27+ctrl"` and
//! `" ctrl + 27 "` all denote the same combo.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// Canonical form of a combo string: whitespace removed, empty tokens
/// dropped (which collapses repeated `+` and trims leading/trailing `+`),
/// tokens sorted lexicographically and rejoined with `+`.
pub fn normalize(combo: &str) -> String {
    let stripped: String = combo.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens: Vec<&str> = stripped.split('+').filter(|t| !t.is_empty()).collect();
    tokens.sort_unstable();
    tokens.join("+")
}

/// Whether two combo strings denote the same token set. Token order and
/// incidental whitespace are irrelevant; case is significant.
pub fn combos_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether `pressed` matches any of the declared combos.
pub fn contains_combo(declared: &[String], pressed: &str) -> bool {
    declared.iter().any(|combo| combos_equal(combo, pressed))
}

/// Builds the combo string for an observed event from its numeric code
/// (if any) and modifier flags.
pub fn pressed_combo(code: Option<u16>, mods: KeyModifiers) -> String {
    let mut tokens: Vec<String> = Vec::new();
    if let Some(code) = code {
        tokens.push(code.to_string());
    }
    if mods.contains(KeyModifiers::ALT) {
        tokens.push("alt".to_string());
    }
    if mods.contains(KeyModifiers::CONTROL) {
        tokens.push("ctrl".to_string());
    }
    // terminals disagree about which bit the command/windows key sets
    if mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER) {
        tokens.push("meta".to_string());
    }
    if mods.contains(KeyModifiers::SHIFT) {
        tokens.push("shift".to_string());
    }
    tokens.join("+")
}

/// Classic numeric key code for a crossterm `KeyCode` (ESC is 27, Enter is
/// 13, letters map to their uppercase ASCII value). Keys without an entry
/// yield `None`, which can never match a declared combo.
pub fn key_code(code: KeyCode) -> Option<u16> {
    match code {
        KeyCode::Backspace => Some(8),
        KeyCode::Tab | KeyCode::BackTab => Some(9),
        KeyCode::Enter => Some(13),
        KeyCode::Esc => Some(27),
        KeyCode::PageUp => Some(33),
        KeyCode::PageDown => Some(34),
        KeyCode::End => Some(35),
        KeyCode::Home => Some(36),
        KeyCode::Left => Some(37),
        KeyCode::Up => Some(38),
        KeyCode::Right => Some(39),
        KeyCode::Down => Some(40),
        KeyCode::Insert => Some(45),
        KeyCode::Delete => Some(46),
        KeyCode::F(n) => Some(111u16.saturating_add(n as u16)),
        KeyCode::Char(c) if c.is_ascii() => Some(c.to_ascii_uppercase() as u16),
        _ => None,
    }
}

/// Mouse button code for a pointer event kind: 0/1/2 for left/middle/right.
/// Kinds without a pressed button (move, scroll) carry no code.
pub fn button_code(kind: MouseEventKind) -> Option<u16> {
    match kind {
        MouseEventKind::Down(button) | MouseEventKind::Up(button) | MouseEventKind::Drag(button) => {
            Some(match button {
                MouseButton::Left => 0,
                MouseButton::Middle => 1,
                MouseButton::Right => 2,
            })
        }
        _ => None,
    }
}
