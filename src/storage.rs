//! This module provides durable storage slots for the task collection

use std::error::Error;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use crate::traits::StorageSlot;

/// A slot that stores the task collection in a local file
#[derive(Debug, PartialEq)]
pub struct FileSlot {
    backing_file: PathBuf,
}

impl FileSlot {
    /// Create a slot over the given backing file.
    /// The file does not have to exist yet: reading a slot whose file is missing
    /// simply yields nothing.
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
        }
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.backing_file
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, Box<dyn Error>> {
        match std::fs::read_to_string(&self.backing_file) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) => {
                if err.kind() == ErrorKind::NotFound {
                    Ok(None)
                } else {
                    Err(format!("Unable to open file {:?}: {}", self.backing_file, err).into())
                }
            },
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.backing_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match std::fs::write(&self.backing_file, contents) {
            Ok(()) => Ok(()),
            Err(err) => Err(format!("Unable to save file {:?}: {}", self.backing_file, err).into()),
        }
    }
}

/// A slot that keeps the stored text in memory.
///
/// Nothing survives the process. This backs unit tests and throw-away demos;
/// real usage goes through the on-disk [`FileSlot`].
#[derive(Debug, Default, PartialEq)]
pub struct MemorySlot {
    contents: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), Box<dyn Error>> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(&dir.path().join("tasks.json"));

        assert_eq!(slot.read().unwrap(), None);

        slot.write("[1, 2, 3]").unwrap();
        assert_eq!(slot.read().unwrap(), Some("[1, 2, 3]".to_string()));

        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn file_slot_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("some").join("nested").join("tasks.json");

        let mut slot = FileSlot::new(&path);
        slot.write("{}").unwrap();
        assert_eq!(slot.read().unwrap(), Some("{}".to_string()));
    }

    #[test]
    fn memory_slot_round_trip() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);

        slot.write("hello").unwrap();
        assert_eq!(slot.read().unwrap(), Some("hello".to_string()));
    }
}
