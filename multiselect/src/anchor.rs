use crate::range::Range;

/// Tracks the origin of the active range selection and the range most
/// recently applied from it, so successive shift gestures can undo the
/// previous range before applying the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorState {
    anchor: Option<usize>,
    applied: Option<Range>,
}

impl AnchorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new anchor. Any previously applied range is forgotten, so
    /// the next range gesture starts fresh from here.
    pub fn set_anchor(&mut self, position: usize) {
        self.anchor = Some(position);
        self.applied = None;
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Remember the range a shift gesture actually committed.
    pub fn record_applied_range(&mut self, range: Range) {
        self.applied = Some(range);
    }

    pub fn applied_range(&self) -> Option<Range> {
        self.applied
    }

    /// Unset both the anchor and the applied range.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.applied = None;
    }
}
