use ratatui::prelude::Rect;

/// Hit test with inclusive edges: a point exactly on the right or bottom
/// edge of `rect` still counts as inside. Menu rectangles come from the
/// presenter as measured bounding boxes, and a pointer resting on the
/// border must not dismiss the menu.
///
/// Note that `rect.right()` is `x + width`, one cell past the last
/// rendered cell under ratatui's half-open convention, so the safe zone
/// extends one cell beyond the drawn border.
pub fn rect_contains_inclusive(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column <= rect.right() && row >= rect.top() && row <= rect.bottom()
}
