use std::collections::HashSet;

/// Live selection state: a confirmed id set plus a replaceable
/// provisional overlay (e.g. a drag-rectangle preview).
///
/// The effective selection observed through [`contains`](Self::contains)
/// and [`len`](Self::len) is the union of both sets. Mutation primitives
/// report what changed so the owning manager can notify observers;
/// `Selection` itself never dispatches callbacks.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    confirmed: HashSet<String>,
    provisional: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is selected, confirmed or provisional.
    pub fn contains(&self, id: &str) -> bool {
        self.confirmed.contains(id) || self.provisional.contains(id)
    }

    /// Number of effectively selected items.
    pub fn len(&self) -> usize {
        let overlay_only = self
            .provisional
            .iter()
            .filter(|id| !self.confirmed.contains(*id))
            .count();
        self.confirmed.len() + overlay_only
    }

    pub fn is_empty(&self) -> bool {
        self.confirmed.is_empty() && self.provisional.is_empty()
    }

    /// Iterate over the effective selection, confirmed ids first.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.confirmed.iter().map(String::as_str).chain(
            self.provisional
                .iter()
                .filter(|id| !self.confirmed.contains(*id))
                .map(String::as_str),
        )
    }

    /// Whether `id` is in the confirmed set (ignoring the overlay).
    pub fn is_confirmed(&self, id: &str) -> bool {
        self.confirmed.contains(id)
    }

    pub(crate) fn add(&mut self, id: String) -> bool {
        self.confirmed.insert(id)
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.confirmed.remove(id)
    }

    pub(crate) fn confirmed_ids(&self) -> impl Iterator<Item = &str> {
        self.confirmed.iter().map(String::as_str)
    }

    /// Empty both sets, returning the ids that were effectively selected.
    pub(crate) fn clear(&mut self) -> Vec<String> {
        let removed: Vec<String> = self.ids().map(String::from).collect();
        self.confirmed.clear();
        self.provisional.clear();
        removed
    }

    /// Replace the provisional overlay with `ids`.
    ///
    /// This is a replace, not a merge: ids newly in the overlay become
    /// selected, ids dropped from the overlay become unselected. Confirmed
    /// membership always wins, so a confirmed id entering or leaving the
    /// overlay produces no effective change. Returns the per-id effective
    /// changes for observer notification.
    pub fn set_provisional_selection(&mut self, ids: HashSet<String>) -> Vec<(String, bool)> {
        let mut changes = Vec::new();
        for id in &ids {
            if !self.provisional.contains(id) && !self.confirmed.contains(id) {
                changes.push((id.clone(), true));
            }
        }
        for id in &self.provisional {
            if !ids.contains(id) && !self.confirmed.contains(id) {
                changes.push((id.clone(), false));
            }
        }
        self.provisional = ids;
        changes
    }

    /// Commit every provisional id into the confirmed set and clear the
    /// overlay. The effective selection is unchanged; ids only move from
    /// transient to permanent classification.
    pub fn apply_provisional_selection(&mut self) {
        self.confirmed.extend(self.provisional.drain());
    }
}
