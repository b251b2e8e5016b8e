/// Inclusive position range, normalized so `begin <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    begin: usize,
    end: usize,
}

impl Range {
    /// Build a range from two endpoints given in either order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { begin: a, end: b }
        } else {
            Self { begin: b, end: a }
        }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn contains(&self, position: usize) -> bool {
        self.begin <= position && position <= self.end
    }

    /// Iterate every position in the range.
    pub fn positions(&self) -> impl Iterator<Item = usize> {
        self.begin..=self.end
    }

    /// Incremental update from `prev` to `next`: returns the positions to
    /// select (in `next` but not `prev`) and to deselect (in `prev` but
    /// not `next`). The intersection is untouched, so re-applying an
    /// overlapping range never produces redundant notifications.
    pub fn diff(prev: Option<Range>, next: Range) -> (Vec<usize>, Vec<usize>) {
        let Some(prev) = prev else {
            return (next.positions().collect(), Vec::new());
        };
        let select = next.positions().filter(|p| !prev.contains(*p)).collect();
        let deselect = prev.positions().filter(|p| !next.contains(*p)).collect();
        (select, deselect)
    }
}
