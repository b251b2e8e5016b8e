use crossterm::event::{Event as RawEvent, KeyModifiers, MouseButton, MouseEventKind};

use crate::gesture::Gesture;

/// Translate a raw crossterm event into a normalized gesture.
///
/// `hit` maps screen coordinates to a list position. A left-button press
/// on an item becomes a click (shift-click when the modifier is held); a
/// press outside any item becomes a no-position gesture, which the
/// manager treats as a clear. Events that carry no selection meaning
/// translate to `None`.
pub fn gesture_from_event<F>(event: &RawEvent, hit: F) -> Option<Gesture>
where
    F: Fn(u16, u16) -> Option<usize>,
{
    let RawEvent::Mouse(mouse) = event else {
        return None;
    };
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return None;
    };

    let position = hit(mouse.column, mouse.row);
    if mouse.modifiers.contains(KeyModifiers::SHIFT) {
        Some(Gesture::shift_click(position))
    } else {
        Some(Gesture::click(position))
    }
}
