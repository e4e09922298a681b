use super::OwnershipStore;
use crate::error::{CardzError, Result};
use crate::model::OwnershipDocument;
use std::collections::HashMap;

/// In-memory document store for testing logic without filesystem I/O.
#[derive(Default)]
pub struct InMemoryStore {
    docs: HashMap<String, OwnershipDocument>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Test helper: the stored document, if any.
    pub fn document(&self, user_id: &str) -> Option<&OwnershipDocument> {
        self.docs.get(user_id)
    }
}

impl OwnershipStore for InMemoryStore {
    fn load(&self, user_id: &str) -> Result<Option<OwnershipDocument>> {
        Ok(self.docs.get(user_id).cloned())
    }

    fn put(&mut self, user_id: &str, doc: &OwnershipDocument) -> Result<()> {
        if self.simulate_write_error {
            return Err(CardzError::Store("Simulated write error".to_string()));
        }
        self.docs.insert(user_id.to_string(), doc.clone());
        Ok(())
    }
}
