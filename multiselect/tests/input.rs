use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use multiselect::{gesture_from_event, Gesture};

fn mouse_down(column: u16, row: u16, modifiers: KeyModifiers) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers,
    })
}

// Rows 10..20 map to positions 0..10, everything else is a miss.
fn hit(_: u16, row: u16) -> Option<usize> {
    if (10..20).contains(&row) {
        Some((row - 10) as usize)
    } else {
        None
    }
}

#[test]
fn test_left_press_becomes_click() {
    let event = mouse_down(5, 12, KeyModifiers::empty());
    assert_eq!(gesture_from_event(&event, hit), Some(Gesture::click(2)));
}

#[test]
fn test_shifted_press_becomes_shift_click() {
    let event = mouse_down(5, 12, KeyModifiers::SHIFT);
    assert_eq!(gesture_from_event(&event, hit), Some(Gesture::shift_click(2)));
}

#[test]
fn test_miss_becomes_no_position_gesture() {
    let event = mouse_down(5, 42, KeyModifiers::empty());
    assert_eq!(gesture_from_event(&event, hit), Some(Gesture::click(None)));
}

#[test]
fn test_right_press_is_ignored() {
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 5,
        row: 12,
        modifiers: KeyModifiers::empty(),
    });
    assert_eq!(gesture_from_event(&event, hit), None);
}

#[test]
fn test_key_events_are_ignored() {
    let event = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::empty()));
    assert_eq!(gesture_from_event(&event, hit), None);
}
