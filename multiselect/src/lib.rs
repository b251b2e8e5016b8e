pub mod anchor;
pub mod callback;
pub mod environment;
pub mod gesture;
pub mod input;
pub mod manager;
pub mod range;
pub mod selection;

pub use anchor::AnchorState;
pub use callback::{CallbackDispatcher, SelectionCallback};
pub use environment::SelectionEnvironment;
pub use gesture::{Gesture, GestureKind, SelectionMode};
pub use input::gesture_from_event;
pub use manager::SelectionManager;
pub use range::Range;
pub use selection::Selection;
