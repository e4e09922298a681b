//! In-memory collection model.
//!
//! [`Collection`] holds the full catalog enriched with one user's ownership
//! states and derives everything the presentation layer shows: aggregate
//! stats, the filtered-and-sorted grid, and the era list. The whole catalog
//! fits in memory; there is no pagination or indexing.
//!
//! Sorting follows the original behavior: `sheet_no` is parsed the way JS
//! `parseInt` parses it (leading digits, anything else is 0) and the sort is
//! stable for equal keys.

use crate::model::{CardOwnership, CardRecord, CardStatus, EnrichedCard, OwnershipDocument, VariationState};
use serde::Serialize;

/// Aggregate statistics over the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub owned: usize,
    pub ordered: usize,
    pub needed: usize,
    /// `round(100 * owned / total)`, 0 when the collection is empty.
    pub completion: u32,
    /// Cards with at least one variation carrying trade surplus.
    pub tradeable: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filter and ordering for the card grid. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub status: Option<CardStatus>,
    pub era: Option<String>,
    pub order: SortOrder,
    pub trade_only: bool,
}

/// The in-memory card list for one session.
#[derive(Debug, Default)]
pub struct Collection {
    cards: Vec<EnrichedCard>,
}

impl Collection {
    /// Overlay a user's document onto the catalog records.
    pub fn merge(records: Vec<CardRecord>, doc: &OwnershipDocument) -> Self {
        let cards = records
            .into_iter()
            .map(|record| {
                let entry = doc.cards.get(&record.id);
                EnrichedCard::from_document(record, entry)
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[EnrichedCard] {
        &self.cards
    }

    pub fn card(&self, card_id: &str) -> Option<&EnrichedCard> {
        self.cards.iter().find(|c| c.record.id == card_id)
    }

    /// Apply a locally computed state for one variation of one card.
    pub fn apply(&mut self, card_id: &str, key: &str, state: VariationState) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.record.id == card_id) {
            card.states.insert(key.to_string(), state);
        }
    }

    /// Reset every variation to the zero state. Used on sign-out so a
    /// following session never sees the previous user's data; the remote
    /// document is not touched.
    pub fn reset_ownership(&mut self) {
        for card in &mut self.cards {
            for state in card.states.values_mut() {
                *state = VariationState::zero();
            }
        }
    }

    pub fn stats(&self) -> CollectionStats {
        let total = self.cards.len();
        let mut owned = 0;
        let mut ordered = 0;
        let mut needed = 0;
        let mut tradeable = 0;
        for card in &self.cards {
            match card.status() {
                CardStatus::Owned => owned += 1,
                CardStatus::Ordered => ordered += 1,
                CardStatus::No => needed += 1,
            }
            if card.has_surplus() {
                tradeable += 1;
            }
        }
        let completion = if total == 0 {
            0
        } else {
            (100.0 * owned as f64 / total as f64).round() as u32
        };
        CollectionStats { total, owned, ordered, needed, completion, tradeable }
    }

    /// Cards matching the filter, sorted by `sheet_no`.
    pub fn filtered_sorted(&self, filter: &ListFilter) -> Vec<&EnrichedCard> {
        let mut cards: Vec<&EnrichedCard> = self
            .cards
            .iter()
            .filter(|card| {
                let status_match = filter
                    .status
                    .map(|s| card.status() == s)
                    .unwrap_or(true);
                let era_match = filter
                    .era
                    .as_deref()
                    .map(|era| card.record.era.as_deref() == Some(era))
                    .unwrap_or(true);
                let trade_match = !filter.trade_only || card.has_surplus();
                status_match && era_match && trade_match
            })
            .collect();

        match filter.order {
            SortOrder::Asc => cards.sort_by_key(|c| parse_sheet_no(&c.record.sheet_no)),
            SortOrder::Desc => cards.sort_by(|a, b| {
                parse_sheet_no(&b.record.sheet_no).cmp(&parse_sheet_no(&a.record.sheet_no))
            }),
        }
        cards
    }

    /// Distinct era labels in catalog order, for the era filter.
    pub fn eras(&self) -> Vec<String> {
        let mut eras = Vec::new();
        for card in &self.cards {
            if let Some(era) = &card.record.era {
                if !eras.contains(era) {
                    eras.push(era.clone());
                }
            }
        }
        eras
    }

    /// The full ownership map for one card, as written back to the store.
    pub fn card_states(&self, card_id: &str) -> Option<&CardOwnership> {
        self.card(card_id).map(|c| &c.states)
    }
}

/// `sheet_no` parsed the way JS `parseInt` would: leading ASCII digits,
/// everything else (including empty) yields 0.
pub fn parse_sheet_no(raw: &str) -> i64 {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariationTemplate;
    use std::collections::BTreeMap;

    fn record(id: &str, era: Option<&str>, sheet_no: &str) -> CardRecord {
        let mut variations = BTreeMap::new();
        variations.insert(
            "normal".to_string(),
            VariationTemplate {
                default_language: Some("EN".into()),
                available_languages: vec!["EN".into(), "JP".into()],
            },
        );
        CardRecord {
            id: id.into(),
            name: format!("Card {}", id),
            number: "1".into(),
            set: "Base".into(),
            era: era.map(String::from),
            sheet_no: sheet_no.into(),
            image_url: None,
            variations,
        }
    }

    fn doc_with(card_id: &str, key: &str, state: VariationState) -> OwnershipDocument {
        let mut doc = OwnershipDocument::default();
        let mut entry = CardOwnership::new();
        entry.insert(key.into(), state);
        doc.cards.insert(card_id.into(), entry);
        doc
    }

    fn owned_state(count: u32) -> VariationState {
        VariationState { count, ordered: false, languages: vec!["EN".into()] }
    }

    #[test]
    fn merge_defaults_to_zero_state() {
        let collection = Collection::merge(
            vec![record("a", None, "1")],
            &OwnershipDocument::default(),
        );
        assert_eq!(collection.card("a").unwrap().state("normal"), VariationState::zero());
    }

    #[test]
    fn stats_count_each_status_once() {
        let mut doc = doc_with("a", "normal", owned_state(1));
        doc.cards.insert("b".into(), {
            let mut e = CardOwnership::new();
            e.insert("normal".into(), VariationState { ordered: true, ..Default::default() });
            e
        });
        let collection = Collection::merge(
            vec![record("a", None, "1"), record("b", None, "2"), record("c", None, "3")],
            &doc,
        );

        let stats = collection.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.owned, 1);
        assert_eq!(stats.ordered, 1);
        assert_eq!(stats.needed, 1);
        assert_eq!(stats.completion, 33);
        assert_eq!(stats.tradeable, 0);
    }

    #[test]
    fn completion_is_zero_for_empty_collection() {
        let collection = Collection::merge(Vec::new(), &OwnershipDocument::default());
        assert_eq!(collection.stats().completion, 0);
    }

    #[test]
    fn completion_rounds_to_nearest() {
        // 2 of 3 owned -> 66.7 -> 67
        let mut doc = doc_with("a", "normal", owned_state(1));
        doc.cards.insert("b".into(), {
            let mut e = CardOwnership::new();
            e.insert("normal".into(), owned_state(1));
            e
        });
        let collection = Collection::merge(
            vec![record("a", None, "1"), record("b", None, "2"), record("c", None, "3")],
            &doc,
        );
        assert_eq!(collection.stats().completion, 67);
    }

    #[test]
    fn tradeable_counts_surplus_cards() {
        let doc = doc_with("a", "normal", VariationState {
            count: 3,
            ordered: false,
            languages: vec!["EN".into()],
        });
        let collection = Collection::merge(vec![record("a", None, "1")], &doc);
        assert_eq!(collection.stats().tradeable, 1);

        let filter = ListFilter { trade_only: true, ..Default::default() };
        assert_eq!(collection.filtered_sorted(&filter).len(), 1);
    }

    #[test]
    fn filter_by_status_and_era() {
        let doc = doc_with("a", "normal", owned_state(1));
        let collection = Collection::merge(
            vec![record("a", Some("Neo"), "1"), record("b", Some("EX"), "2")],
            &doc,
        );

        let filter = ListFilter {
            status: Some(CardStatus::Owned),
            era: Some("Neo".into()),
            ..Default::default()
        };
        let cards = collection.filtered_sorted(&filter);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].record.id, "a");

        let filter = ListFilter { era: Some("EX".into()), ..Default::default() };
        let cards = collection.filtered_sorted(&filter);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].record.id, "b");
    }

    #[test]
    fn sort_is_stable_and_treats_non_numeric_as_zero() {
        let collection = Collection::merge(
            vec![
                record("x", None, "10"),
                record("first_zero", None, "promo"),
                record("second_zero", None, ""),
                record("y", None, "2"),
            ],
            &OwnershipDocument::default(),
        );

        let asc: Vec<&str> = collection
            .filtered_sorted(&ListFilter::default())
            .iter()
            .map(|c| c.record.id.as_str())
            .collect();
        assert_eq!(asc, vec!["first_zero", "second_zero", "y", "x"]);

        let filter = ListFilter { order: SortOrder::Desc, ..Default::default() };
        let desc: Vec<&str> = collection
            .filtered_sorted(&filter)
            .iter()
            .map(|c| c.record.id.as_str())
            .collect();
        // Ties keep catalog order in both directions.
        assert_eq!(desc, vec!["x", "y", "first_zero", "second_zero"]);
    }

    #[test]
    fn parse_sheet_no_mimics_parse_int() {
        assert_eq!(parse_sheet_no("223"), 223);
        assert_eq!(parse_sheet_no(" 42 "), 42);
        assert_eq!(parse_sheet_no("12b"), 12);
        assert_eq!(parse_sheet_no("promo"), 0);
        assert_eq!(parse_sheet_no(""), 0);
    }

    #[test]
    fn eras_are_distinct_in_catalog_order() {
        let collection = Collection::merge(
            vec![
                record("a", Some("Neo"), "1"),
                record("b", None, "2"),
                record("c", Some("EX"), "3"),
                record("d", Some("Neo"), "4"),
            ],
            &OwnershipDocument::default(),
        );
        assert_eq!(collection.eras(), vec!["Neo".to_string(), "EX".to_string()]);
    }

    #[test]
    fn reset_ownership_zeroes_every_state() {
        let doc = doc_with("a", "normal", owned_state(5));
        let mut collection = Collection::merge(vec![record("a", None, "1")], &doc);
        assert_eq!(collection.stats().owned, 1);

        collection.reset_ownership();
        assert_eq!(collection.stats().owned, 0);
        assert_eq!(collection.card("a").unwrap().state("normal"), VariationState::zero());
    }
}
