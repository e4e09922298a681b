//! # Storage Layer
//!
//! The [`OwnershipStore`] trait abstracts the per-user document store: one
//! [`OwnershipDocument`] per user id, fetched and written whole.
//!
//! ## Read-modify-write
//!
//! Every mutation persists through [`OwnershipStore::save_card`], which
//! fetches the current document (absent ⇒ empty), overlays the one card
//! entry plus a fresh `lastUpdated`, and writes the whole merged document
//! back. There is no optimistic-concurrency check: when two sessions write
//! concurrently, the last write to complete wins. That race is an accepted
//! limitation inherited from the source system, not something the store
//! papers over (see DESIGN.md).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file per user under `collections/`.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::{CardOwnership, OwnershipDocument};
use chrono::Utc;

pub mod fs;
pub mod memory;

/// Abstract interface for the per-user ownership document store.
pub trait OwnershipStore {
    /// Fetch the document for a user. `Ok(None)` when no document exists yet.
    fn load(&self, user_id: &str) -> Result<Option<OwnershipDocument>>;

    /// Write a whole document, replacing any existing one.
    fn put(&mut self, user_id: &str, doc: &OwnershipDocument) -> Result<()>;

    /// Read-modify-write of a single card entry: overlay `states` and a
    /// fresh `lastUpdated` over the current document, then write it back.
    fn save_card(&mut self, user_id: &str, card_id: &str, states: &CardOwnership) -> Result<()> {
        let mut doc = self.load(user_id)?.unwrap_or_default();
        doc.cards.insert(card_id.to_string(), states.clone());
        doc.last_updated = Some(Utc::now());
        self.put(user_id, &doc)
    }
}
