use std::collections::HashSet;
use std::fs::File;

use multiselect::{
    Gesture, SelectionCallback, SelectionEnvironment, SelectionManager, SelectionMode,
};
use simplelog::{Config, LevelFilter, WriteLogger};

/// A fixed list of files standing in for the view layer's adapter.
struct FileList {
    names: Vec<String>,
}

impl FileList {
    fn new() -> Self {
        Self {
            names: (0..30).map(|i| format!("file-{i:02}.txt")).collect(),
        }
    }
}

impl SelectionEnvironment for FileList {
    fn id_at(&self, position: usize) -> String {
        self.names[position].clone()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.names.iter().position(|name| name == id)
    }

    fn item_count(&self) -> usize {
        self.names.len()
    }
}

struct Printer;

impl SelectionCallback for Printer {
    fn on_item_state_changed(&self, id: &str, selected: bool) {
        println!("  {} {id}", if selected { "+" } else { "-" });
    }

    fn on_selection_changed(&self) {
        println!("  (selection changed)");
    }
}

fn show(manager: &SelectionManager<FileList>) {
    let mut selected: Vec<&str> = manager.selection().ids().collect();
    selected.sort_by_key(|id| manager.environment().position_of(id));
    println!("selected ({}): {selected:?}\n", manager.selection().len());
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut manager = SelectionManager::new(FileList::new(), SelectionMode::Multiple);
    manager.register_callback(Box::new(Printer));
    println!("{} files listed\n", manager.environment().item_count());

    println!("long-press on 7 enters selection mode:");
    manager.on_long_press(Gesture::tap(7));
    show(&manager);

    println!("shift-tap on 11 extends the range:");
    manager.on_single_tap_up(Gesture::shift_tap(11));
    show(&manager);

    println!("shift-tap back to 9 shrinks it:");
    manager.on_single_tap_up(Gesture::shift_tap(9));
    show(&manager);

    println!("a plain tap on 20 anchors a second range:");
    manager.on_single_tap_up(Gesture::tap(20));
    manager.on_single_tap_up(Gesture::shift_tap(23));
    show(&manager);

    println!("a drag rectangle previews 25..27 provisionally:");
    let preview: HashSet<String> = (25..=27).map(|p| format!("file-{p:02}.txt")).collect();
    manager.set_provisional_selection(preview);
    show(&manager);

    println!("releasing the drag commits the preview:");
    manager.apply_provisional_selection();
    show(&manager);

    println!("clicking empty space clears everything:");
    manager.on_single_tap_up(Gesture::click(None));
    show(&manager);

    Ok(())
}
