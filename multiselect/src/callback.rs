/// Observer of selection changes, with a per-item veto hook.
///
/// All methods have no-op defaults. Callbacks are invoked synchronously
/// while a gesture is being handled and must not re-enter the manager
/// that invoked them.
pub trait SelectionCallback {
    /// Called before an individual confirmed-state flip. Returning
    /// `false` vetoes that one flip; the rest of the gesture's effects on
    /// other ids still proceed.
    fn on_before_item_state_change(&self, _id: &str, _will_select: bool) -> bool {
        true
    }

    /// Fired once per id whose effective membership actually changed,
    /// confirmed and provisional alike.
    fn on_item_state_changed(&self, _id: &str, _selected: bool) {}

    /// Fired once per gesture-level operation that changed at least one
    /// item, after all item-level events for that operation.
    fn on_selection_changed(&self) {}
}

/// Fans selection events out to registered callbacks in registration
/// order.
#[derive(Default)]
pub struct CallbackDispatcher {
    callbacks: Vec<Box<dyn SelectionCallback>>,
}

impl CallbackDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, callback: Box<dyn SelectionCallback>) {
        self.callbacks.push(callback);
    }

    /// Ask every callback to approve a flip; any single veto blocks it.
    pub fn approve_item_state_change(&self, id: &str, will_select: bool) -> bool {
        self.callbacks
            .iter()
            .all(|c| c.on_before_item_state_change(id, will_select))
    }

    pub fn notify_item_state_changed(&self, id: &str, selected: bool) {
        for callback in &self.callbacks {
            callback.on_item_state_changed(id, selected);
        }
    }

    pub fn notify_selection_changed(&self) {
        for callback in &self.callbacks {
            callback.on_selection_changed();
        }
    }
}
