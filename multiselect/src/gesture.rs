/// Whether more than one item may be confirmed-selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one confirmed item; every selecting gesture replaces the
    /// previous selection and range gestures never extend.
    Single,
    /// Unbounded selection with range and multi-range gestures.
    Multiple,
}

/// The pointer gesture vocabulary, already normalized from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    ShiftTap,
    Click,
    ShiftClick,
}

/// A normalized input gesture targeting a list position.
///
/// `position` is `None` when the pointer landed outside the list bounds;
/// the manager treats such gestures as a full clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub position: Option<usize>,
}

impl Gesture {
    pub fn tap(position: impl Into<Option<usize>>) -> Self {
        Self {
            kind: GestureKind::Tap,
            position: position.into(),
        }
    }

    pub fn shift_tap(position: impl Into<Option<usize>>) -> Self {
        Self {
            kind: GestureKind::ShiftTap,
            position: position.into(),
        }
    }

    pub fn click(position: impl Into<Option<usize>>) -> Self {
        Self {
            kind: GestureKind::Click,
            position: position.into(),
        }
    }

    pub fn shift_click(position: impl Into<Option<usize>>) -> Self {
        Self {
            kind: GestureKind::ShiftClick,
            position: position.into(),
        }
    }

    /// Whether the shift modifier was held.
    pub fn is_shifted(&self) -> bool {
        matches!(self.kind, GestureKind::ShiftTap | GestureKind::ShiftClick)
    }
}
