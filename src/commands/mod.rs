//! # Command Layer
//!
//! The core business logic of cardz. Each command lives in its own submodule
//! and implements plain functions over domain types — no terminal I/O, no
//! argument parsing, no exit codes. That all belongs to the CLI layer.
//!
//! Commands return a structured [`CmdResult`] carrying listed cards, the
//! variation states a mutation touched, derived stats, and leveled messages.
//! The UI decides how to render it.
//!
//! This is where the lion's share of testing lives: every module carries
//! `#[cfg(test)]` tests against [`crate::store::memory::InMemoryStore`].
//!
//! - [`mutate`]: the mutation engine (increment, decrement, toggle-ordered,
//!   toggle-language) with its view-only guard
//! - [`list`]: the filtered and sorted card grid
//! - [`stats`]: aggregate collection statistics
//! - [`show`]: per-card variation detail
//! - [`share`]: the read-only share link

use crate::collection::CollectionStats;
use crate::model::{EnrichedCard, VariationState};
use serde::Serialize;

pub mod list;
pub mod mutate;
pub mod share;
pub mod show;
pub mod stats;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self { level: MessageLevel::Info, content: content.into() }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self { level: MessageLevel::Success, content: content.into() }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self { level: MessageLevel::Warning, content: content.into() }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self { level: MessageLevel::Error, content: content.into() }
    }
}

/// A variation touched by a mutation, with its post-mutation state.
#[derive(Debug, Clone)]
pub struct AffectedVariation {
    pub card_id: String,
    pub card_name: String,
    pub key: String,
    pub state: VariationState,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_cards: Vec<EnrichedCard>,
    pub affected: Vec<AffectedVariation>,
    pub stats: Option<CollectionStats>,
    pub share_url: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cards(mut self, cards: Vec<EnrichedCard>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_stats(mut self, stats: CollectionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_share_url(mut self, url: String) -> Self {
        self.share_url = Some(url);
        self
    }
}
