use std::collections::HashSet;

use log::debug;

use crate::anchor::AnchorState;
use crate::callback::{CallbackDispatcher, SelectionCallback};
use crate::environment::SelectionEnvironment;
use crate::gesture::{Gesture, SelectionMode};
use crate::range::Range;
use crate::selection::Selection;

/// Routes normalized gestures into selection mutations.
///
/// Owns the live [`Selection`] and the anchor bookkeeping for one list.
/// Single-threaded by contract: gestures are handled to completion, one
/// at a time, and registered callbacks must not re-enter the manager.
pub struct SelectionManager<E: SelectionEnvironment> {
    environment: E,
    mode: SelectionMode,
    selection: Selection,
    anchor: AnchorState,
    dispatcher: CallbackDispatcher,
}

impl<E: SelectionEnvironment> SelectionManager<E> {
    pub fn new(environment: E, mode: SelectionMode) -> Self {
        Self {
            environment,
            mode,
            selection: Selection::new(),
            anchor: AnchorState::new(),
            dispatcher: CallbackDispatcher::new(),
        }
    }

    /// Register an observer. Dispatch order is registration order.
    pub fn register_callback(&mut self, callback: Box<dyn SelectionCallback>) {
        self.dispatcher.register(callback);
    }

    /// Live view of the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Handle a long-press: select the pressed item and anchor the next
    /// range gesture at it. A second long-press extends the selection
    /// rather than starting range math.
    pub fn on_long_press(&mut self, gesture: Gesture) {
        let Some(position) = gesture.position else {
            self.clear_selection();
            return;
        };
        let id = self.environment.id_at(position);
        let changed = self.attempt_select(&id);
        self.anchor.set_anchor(position);
        if changed {
            self.dispatcher.notify_selection_changed();
        }
    }

    /// Handle a tap or click gesture, shift-modified or not.
    pub fn on_single_tap_up(&mut self, gesture: Gesture) {
        let Some(position) = gesture.position else {
            self.clear_selection();
            return;
        };
        let changed = if gesture.is_shifted() && self.mode == SelectionMode::Multiple {
            self.shift_select(position)
        } else {
            self.tap_select(position)
        };
        if changed {
            self.dispatcher.notify_selection_changed();
        }
    }

    /// Key-driven focus change. In [`SelectionMode::Single`] the
    /// confirmed selection is replaced outright regardless of `shift`; in
    /// [`SelectionMode::Multiple`] this behaves like a tap, or a
    /// shift-tap when `shift` is held.
    pub fn attempt_change_focus(&mut self, position: usize, shift: bool) {
        let changed = match self.mode {
            SelectionMode::Single => {
                let id = self.environment.id_at(position);
                self.attempt_select(&id)
            }
            SelectionMode::Multiple if shift => self.shift_select(position),
            SelectionMode::Multiple => self.tap_select(position),
        };
        if changed {
            self.dispatcher.notify_selection_changed();
        }
    }

    /// Bulk-select or bulk-deselect `ids`, honoring the per-item veto.
    /// Returns whether anything changed.
    pub fn set_items_selected<I>(&mut self, ids: I, selected: bool) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut changed = false;
        for id in ids {
            let id = id.as_ref();
            changed |= if selected {
                self.attempt_select(id)
            } else {
                self.attempt_deselect(id)
            };
        }
        if changed {
            self.dispatcher.notify_selection_changed();
        }
        changed
    }

    /// Seed the anchor so the next shift gesture radiates from
    /// `position`, e.g. after selecting the keyboard-focused item.
    pub fn set_selection_range_begin(&mut self, position: usize) {
        self.anchor.set_anchor(position);
    }

    /// Replace the provisional overlay, notifying observers of every
    /// effective change. See [`Selection::set_provisional_selection`].
    pub fn set_provisional_selection(&mut self, ids: HashSet<String>) {
        let changes = self.selection.set_provisional_selection(ids);
        for (id, selected) in &changes {
            self.dispatcher.notify_item_state_changed(id, *selected);
        }
        if !changes.is_empty() {
            self.dispatcher.notify_selection_changed();
        }
    }

    /// Commit the provisional overlay into the confirmed set. The
    /// effective selection is unchanged, so no events fire.
    pub fn apply_provisional_selection(&mut self) {
        self.selection.apply_provisional_selection();
    }

    /// Clear the entire selection, confirmed and provisional, and reset
    /// the anchor. This is a direct replace rather than a per-item toggle
    /// sequence, so the veto hook is not consulted; each removed id still
    /// fires an item event. Clearing an empty selection is a silent
    /// no-op.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            self.anchor.reset();
            return;
        }
        debug!("clearing selection of {} items", self.selection.len());
        let removed = self.selection.clear();
        self.anchor.reset();
        for id in &removed {
            self.dispatcher.notify_item_state_changed(id, false);
        }
        self.dispatcher.notify_selection_changed();
    }

    /// Plain tap semantics: toggle a selected item off, otherwise select
    /// it and move the anchor there.
    fn tap_select(&mut self, position: usize) -> bool {
        let id = self.environment.id_at(position);
        if self.selection.contains(&id) {
            self.attempt_deselect(&id)
        } else {
            let changed = self.attempt_select(&id);
            self.anchor.set_anchor(position);
            changed
        }
    }

    /// Shift-tap semantics: incrementally rework the applied range, or
    /// degrade to a plain select when no anchor exists yet.
    fn shift_select(&mut self, target: usize) -> bool {
        match self.anchor.anchor() {
            Some(anchor) => self.select_range(anchor, target),
            None => {
                let id = self.environment.id_at(target);
                let changed = self.attempt_select(&id);
                self.anchor.set_anchor(target);
                changed
            }
        }
    }

    /// Apply the inclusive anchor..=target range, first undoing whatever
    /// part of the previously applied range falls outside it. The anchor
    /// position is part of every resulting range.
    fn select_range(&mut self, anchor: usize, target: usize) -> bool {
        let next = Range::new(anchor, target);
        let (select, deselect) = Range::diff(self.anchor.applied_range(), next);
        debug!(
            "range {}..={}: selecting {}, deselecting {}",
            next.begin(),
            next.end(),
            select.len(),
            deselect.len()
        );
        let mut changed = false;
        for position in deselect {
            let id = self.environment.id_at(position);
            changed |= self.attempt_deselect(&id);
        }
        for position in select {
            let id = self.environment.id_at(position);
            changed |= self.attempt_select(&id);
        }
        self.anchor.record_applied_range(next);
        changed
    }

    /// Select `id` unless vetoed. In [`SelectionMode::Single`] every
    /// select replaces the previously confirmed item.
    fn attempt_select(&mut self, id: &str) -> bool {
        if self.selection.contains(id) {
            return false;
        }
        if !self.dispatcher.approve_item_state_change(id, true) {
            debug!("select of {id} vetoed");
            return false;
        }
        let mut changed = false;
        if self.mode == SelectionMode::Single {
            changed |= self.replace_confirmed();
        }
        if self.selection.add(id.to_string()) {
            self.dispatcher.notify_item_state_changed(id, true);
            changed = true;
        }
        changed
    }

    /// Deselect `id` unless vetoed.
    fn attempt_deselect(&mut self, id: &str) -> bool {
        if !self.selection.is_confirmed(id) {
            return false;
        }
        if !self.dispatcher.approve_item_state_change(id, false) {
            debug!("deselect of {id} vetoed");
            return false;
        }
        self.selection.remove(id);
        self.dispatcher.notify_item_state_changed(id, false);
        true
    }

    // Single-mode replace path. The at-most-one invariant is structural,
    // so the per-item veto is not consulted for the outgoing item.
    fn replace_confirmed(&mut self) -> bool {
        let ids: Vec<String> = self.selection.confirmed_ids().map(String::from).collect();
        let mut changed = false;
        for id in ids {
            if self.selection.remove(&id) {
                self.dispatcher.notify_item_state_changed(&id, false);
                changed = true;
            }
        }
        changed
    }
}
