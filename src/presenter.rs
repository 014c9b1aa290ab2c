use ratatui::prelude::Rect;

/// Read-only view of the open menu's geometry, implemented by the
/// embedding application. The monitor consults it on every fed event and
/// poll cycle; it never mutates presenter state.
pub trait MenuPresenter {
    /// Bounding rectangles of the currently open menu levels, root first.
    /// Empty when no menu is open.
    fn menu_rects(&self) -> Vec<Rect>;

    /// Bounding rectangle of the element the menu was triggered on, or
    /// `None` when there is no renderable trigger.
    fn trigger_rect(&self) -> Option<Rect>;
}
