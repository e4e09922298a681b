//! # Domain Model: Cards, Variations, and Ownership
//!
//! This module defines the core data structures for cardz: [`CardRecord`]
//! (immutable catalog data), [`VariationState`] (per-user ownership of one
//! printing of one card), [`OwnershipDocument`] (the remote per-user
//! document), and [`EnrichedCard`] (a catalog record overlaid with the
//! user's ownership states).
//!
//! ## Cards and Variations
//!
//! A card in the catalog can exist in several physical printings — normal,
//! reverse holo, first edition, promo stamps — called **variations**. The
//! catalog describes each variation with a [`VariationTemplate`] (default
//! language, available languages). Ownership is tracked independently per
//! variation as a [`VariationState`]:
//!
//! ```text
//! { count: how many copies owned,
//!   ordered: an order is pending (only meaningful while count == 0),
//!   languages: which languages are owned (empty while count == 0) }
//! ```
//!
//! ## Invariants
//!
//! - `count` never goes negative (it is a `u32`; decrement saturates).
//! - `languages` is empty exactly when `count == 0` after any mutation.
//! - `ordered` is forced to `false` the moment `count` rises above zero.
//!   Legacy documents may still carry `ordered == true` alongside a positive
//!   count; such entries count as *owned*, never as *ordered*.
//!
//! ## Derived status
//!
//! Each card has exactly one status, with precedence owned > ordered > no:
//! owned if any variation has `count > 0`, else ordered if any variation is
//! pending at count zero, else no.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Catalog-defined metadata for one variation of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationTemplate {
    #[serde(default)]
    pub default_language: Option<String>,
    #[serde(default)]
    pub available_languages: Vec<String>,
}

/// One immutable card record from the static catalog.
///
/// The catalog is not validated; missing fields fall back to serde defaults.
/// A record with no `variations` at all gets a single synthesized `normal`
/// template when the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub era: Option<String>,
    #[serde(default)]
    pub sheet_no: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub variations: BTreeMap<String, VariationTemplate>,
}

/// Per-user mutable ownership data for one variation of one card.
///
/// All fields default, so a partial override stored in a document merges
/// field-by-field over the zero state on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationState {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub ordered: bool,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl VariationState {
    /// The zero state implied by an absent document entry.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Copies beyond one per distinct owned language, available for trade.
    ///
    /// `surplus = max(0, count - max(1, |languages|))`
    pub fn surplus(&self) -> u32 {
        self.count.saturating_sub((self.languages.len() as u32).max(1))
    }

    /// Pending-order check. A legacy `ordered` flag stored alongside a
    /// positive count is ignored here.
    pub fn is_pending(&self) -> bool {
        self.ordered && self.count == 0
    }
}

/// Derived per-card ownership status. Exactly one holds per card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Owned,
    Ordered,
    No,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardStatus::Owned => write!(f, "owned"),
            CardStatus::Ordered => write!(f, "ordered"),
            CardStatus::No => write!(f, "no"),
        }
    }
}

/// Ownership states for all variations of one card, keyed by variation key.
pub type CardOwnership = BTreeMap<String, VariationState>;

/// The remote per-user document: card id -> variation key -> state override,
/// plus the owner's email and a last-updated timestamp.
///
/// The card map is flattened so the JSON shape stays the flat object the
/// original document store used:
///
/// ```json
/// { "card7": { "reverse_holo": { "count": 2 } },
///   "ownerEmail": "x@y.z",
///   "lastUpdated": "2026-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnershipDocument {
    #[serde(rename = "ownerEmail", default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub cards: BTreeMap<String, CardOwnership>,
}

/// A catalog record overlaid with the user's ownership states.
///
/// `states` holds the union of the template's variation keys and whatever
/// keys the document carried. Keys unknown to the template are ignored for
/// status and stats but are preserved when the card is written back, so a
/// save never loses unrelated variation entries.
#[derive(Debug, Clone)]
pub struct EnrichedCard {
    pub record: CardRecord,
    pub states: CardOwnership,
}

impl EnrichedCard {
    /// Enrich a record from a document entry (absent entry implies all-zero).
    pub fn from_document(record: CardRecord, entry: Option<&CardOwnership>) -> Self {
        let mut states = CardOwnership::new();
        for key in record.variations.keys() {
            let state = entry
                .and_then(|e| e.get(key))
                .cloned()
                .unwrap_or_default();
            states.insert(key.clone(), state);
        }
        // Document-only keys ride along untouched.
        if let Some(entry) = entry {
            for (key, state) in entry {
                states.entry(key.clone()).or_insert_with(|| state.clone());
            }
        }
        Self { record, states }
    }

    /// The state for a template variation, zero if never touched.
    pub fn state(&self, key: &str) -> VariationState {
        self.states.get(key).cloned().unwrap_or_default()
    }

    /// Variation states known to the template, in template order.
    pub fn template_states(&self) -> impl Iterator<Item = (&String, &VariationState)> {
        self.record.variations.keys().filter_map(move |key| {
            self.states.get(key).map(|state| (key, state))
        })
    }

    /// Derived status with precedence owned > ordered > no.
    pub fn status(&self) -> CardStatus {
        let mut any_pending = false;
        for (_, state) in self.template_states() {
            if state.count > 0 {
                return CardStatus::Owned;
            }
            if state.is_pending() {
                any_pending = true;
            }
        }
        if any_pending {
            CardStatus::Ordered
        } else {
            CardStatus::No
        }
    }

    /// Total trade surplus across template variations.
    pub fn surplus(&self) -> u32 {
        self.template_states().map(|(_, s)| s.surplus()).sum()
    }

    /// True when any variation has copies available for trade.
    pub fn has_surplus(&self) -> bool {
        self.template_states().any(|(_, s)| s.surplus() > 0)
    }
}
