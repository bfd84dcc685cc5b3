//! Support for application configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// The directory (inside the platform data directory) the task file lives under.
/// Feel free to override it when initing this library.
pub static APP_DIR_NAME: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new("taskboard".to_string())));

/// The file name of the durable task slot.
/// Feel free to override it when initing this library.
pub static SLOT_FILE_NAME: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new("tasks.json".to_string())));

/// The well-known location of the durable task slot, e.g.
/// `~/.local/share/taskboard/tasks.json` on Linux.
///
/// Falls back to the current directory on platforms without a data directory.
pub fn default_slot_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR_NAME.lock().unwrap().as_str())
        .join(SLOT_FILE_NAME.lock().unwrap().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_the_configured_names() {
        let path = default_slot_path();
        assert!(path.ends_with("taskboard/tasks.json"));
    }
}
