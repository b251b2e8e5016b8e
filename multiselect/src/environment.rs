/// Resolves between list positions and stable item ids.
///
/// Implemented by the view layer that owns the current item ordering.
/// Positions passed to [`id_at`](Self::id_at) must lie within
/// `0..item_count()`; the engine does not defend against out-of-bounds
/// positions.
pub trait SelectionEnvironment {
    /// Stable id of the item at `position`.
    fn id_at(&self, position: usize) -> String;

    /// Current position of `id`, if it is present in the list.
    fn position_of(&self, id: &str) -> Option<usize>;

    /// Total number of addressable positions.
    fn item_count(&self) -> usize;
}
