use std::collections::HashMap;

use crate::error::StorageError;
use crate::traits::SlotStore;

/// In-memory slot backend for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    slots: HashMap<String, Vec<u8>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Backend for hosts without a durable-storage context: reads see nothing,
/// writes are dropped. Lets the engine run with persistence degraded to a
/// no-op instead of failing.
#[derive(Debug, Default)]
pub struct NullSlot;

impl NullSlot {
    pub fn new() -> Self {
        Self
    }
}

impl SlotStore for NullSlot {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Ok(())
    }
}
