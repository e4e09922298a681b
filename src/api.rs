//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! cardz operations, regardless of the UI driving them.
//!
//! The facade owns the three pieces of per-invocation state — the store, the
//! merged in-memory [`Collection`], and the [`Session`] — and dispatches to
//! the command functions. It contains no business logic, does no terminal
//! I/O, and returns structured `CmdResult`s for the UI to render.
//!
//! ## Generic Over OwnershipStore
//!
//! `CardzApi<S: OwnershipStore>` is generic over the storage backend:
//! - Production: `CardzApi<FileStore>`
//! - Testing: `CardzApi<InMemoryStore>`

use crate::collection::{Collection, ListFilter};
use crate::commands;
use crate::error::Result;
use crate::model::CardRecord;
use crate::session::{self, Session};
use crate::store::OwnershipStore;

pub struct CardzApi<S: OwnershipStore> {
    store: S,
    collection: Collection,
    session: Session,
}

impl<S: OwnershipStore> CardzApi<S> {
    /// Merge the catalog with the session user's document.
    ///
    /// A failed document read is logged and treated as an empty document, so
    /// the collection still renders (with zero states) when the store is
    /// unreachable.
    pub fn new(store: S, records: Vec<CardRecord>, mut session: Session) -> Self {
        let doc = match store.load(session.uid()) {
            Ok(doc) => doc.unwrap_or_default(),
            Err(e) => {
                log::warn!("failed to load document for {}: {}", session.uid(), e);
                Default::default()
            }
        };
        session.set_owner_label(doc.owner_email.clone());
        let collection = Collection::merge(records, &doc);
        Self { store, collection, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list(&self, filter: &ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.collection, filter)
    }

    pub fn eras(&self) -> Result<commands::CmdResult> {
        commands::list::eras(&self.collection)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.collection)
    }

    pub fn show(&self, card_id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.collection, card_id)
    }

    pub fn increment(&mut self, card_id: &str, key: &str) -> Result<commands::CmdResult> {
        self.mutate(card_id, key, commands::mutate::Mutation::Increment)
    }

    pub fn decrement(&mut self, card_id: &str, key: &str) -> Result<commands::CmdResult> {
        self.mutate(card_id, key, commands::mutate::Mutation::Decrement)
    }

    pub fn toggle_ordered(&mut self, card_id: &str, key: &str) -> Result<commands::CmdResult> {
        self.mutate(card_id, key, commands::mutate::Mutation::ToggleOrdered)
    }

    pub fn toggle_language(
        &mut self,
        card_id: &str,
        key: &str,
        lang: &str,
    ) -> Result<commands::CmdResult> {
        self.mutate(card_id, key, commands::mutate::Mutation::ToggleLanguage(lang.to_string()))
    }

    pub fn share(&self, base_url: &str) -> Result<commands::CmdResult> {
        commands::share::run(&self.session, base_url)
    }

    /// Zero every in-memory state on sign-out. The stored document is
    /// untouched.
    pub fn logout_reset(&mut self) {
        self.collection.reset_ownership();
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    fn mutate(
        &mut self,
        card_id: &str,
        key: &str,
        mutation: commands::mutate::Mutation,
    ) -> Result<commands::CmdResult> {
        commands::mutate::run(
            &mut self.store,
            &mut self.collection,
            &self.session,
            card_id,
            key,
            mutation,
        )
    }
}

pub use commands::mutate::Mutation;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
pub use session::{share_link, share_user_id};
