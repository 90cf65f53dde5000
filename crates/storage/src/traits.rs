use crate::error::StorageError;

/// A named slot of bytes: the entire persistence capability the overlay
/// needs. Each key holds at most one value; `set` overwrites it wholesale.
/// No partial writes are modeled.
pub trait SlotStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}
