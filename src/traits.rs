use std::error::Error;

/// A durable slot the task collection can be persisted into.
///
/// A slot holds a single textual value: the serialized form of the whole collection.
/// Every write replaces the previous value entirely.
pub trait StorageSlot {
    /// Returns the currently stored text, or `None` if nothing has ever been stored.
    /// An empty slot is the normal first-run state, not an error.
    fn read(&self) -> Result<Option<String>, Box<dyn Error>>;
    /// Overwrites the stored text with `contents`
    fn write(&mut self, contents: &str) -> Result<(), Box<dyn Error>>;
}
