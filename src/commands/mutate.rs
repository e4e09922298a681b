//! The mutation engine.
//!
//! Each operation is a pure transform from a variation state (plus its
//! catalog template) to the next state, followed by a persistence step. The
//! local in-memory state is applied first and is NOT rolled back when the
//! save fails; the failure is surfaced as an error-level message instead
//! (the optimistic-local policy of the source system, with the save outcome
//! returned to the caller rather than fired and forgotten).
//!
//! View-only sessions short-circuit before anything is touched.

use crate::collection::Collection;
use crate::commands::{AffectedVariation, CmdMessage, CmdResult};
use crate::error::{CardzError, Result};
use crate::model::{VariationState, VariationTemplate};
use crate::session::Session;
use crate::store::OwnershipStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Increment,
    Decrement,
    ToggleOrdered,
    ToggleLanguage(String),
}

/// `count += 1`, pending-order flag cleared. The first copy seeds the owned
/// languages with the template's default language (if any).
pub fn next_on_increment(state: &VariationState, template: &VariationTemplate) -> VariationState {
    let languages = if state.count == 0 {
        template
            .default_language
            .clone()
            .map(|lang| vec![lang])
            .unwrap_or_default()
    } else {
        state.languages.clone()
    };
    VariationState { count: state.count + 1, ordered: false, languages }
}

/// `count = max(0, count - 1)`; dropping to zero clears the languages.
pub fn next_on_decrement(state: &VariationState) -> VariationState {
    let count = state.count.saturating_sub(1);
    let languages = if count == 0 { Vec::new() } else { state.languages.clone() };
    VariationState { count, ordered: state.ordered, languages }
}

/// Flip the pending-order flag; no-op while copies are owned.
pub fn next_on_toggle_ordered(state: &VariationState) -> VariationState {
    if state.count > 0 {
        return state.clone();
    }
    VariationState { ordered: !state.ordered, ..state.clone() }
}

/// Toggle membership of `lang` in the owned languages. No-op at count zero
/// and for languages the template does not offer.
pub fn next_on_toggle_language(
    state: &VariationState,
    template: &VariationTemplate,
    lang: &str,
) -> VariationState {
    if state.count == 0 || !template.available_languages.iter().any(|l| l == lang) {
        return state.clone();
    }
    let mut languages = state.languages.clone();
    match languages.iter().position(|l| l == lang) {
        Some(pos) => {
            languages.remove(pos);
        }
        None => languages.push(lang.to_string()),
    }
    VariationState { languages, ..state.clone() }
}

pub fn run<S: OwnershipStore>(
    store: &mut S,
    collection: &mut Collection,
    session: &Session,
    card_id: &str,
    key: &str,
    mutation: Mutation,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if session.view_only() {
        result.add_message(CmdMessage::info(
            "Viewing a shared collection: changes are disabled.",
        ));
        return Ok(result);
    }

    let card = collection
        .card(card_id)
        .ok_or_else(|| CardzError::CardNotFound(card_id.to_string()))?;
    let template = card
        .record
        .variations
        .get(key)
        .cloned()
        .ok_or_else(|| CardzError::VariationNotFound {
            card_id: card_id.to_string(),
            key: key.to_string(),
        })?;
    let card_name = card.record.name.clone();
    let current = card.state(key);

    let next = match &mutation {
        Mutation::Increment => next_on_increment(&current, &template),
        Mutation::Decrement => next_on_decrement(&current),
        Mutation::ToggleOrdered => next_on_toggle_ordered(&current),
        Mutation::ToggleLanguage(lang) => next_on_toggle_language(&current, &template, lang),
    };

    if next == current {
        result.add_message(CmdMessage::info(format!(
            "{} ({}): no change",
            card_name, key
        )));
        return Ok(result);
    }

    collection.apply(card_id, key, next.clone());

    result.add_message(CmdMessage::success(describe(&card_name, key, &mutation, &next)));
    result.affected.push(AffectedVariation {
        card_id: card_id.to_string(),
        card_name,
        key: key.to_string(),
        state: next,
    });

    // Persist the whole card entry so document-only variation keys survive.
    let states = collection
        .card_states(card_id)
        .cloned()
        .unwrap_or_default();
    if let Err(e) = store.save_card(session.uid(), card_id, &states) {
        log::error!("save failed for {}/{}: {}", card_id, key, e);
        result.add_message(CmdMessage::error(format!("Failed to save changes: {}", e)));
    }

    Ok(result)
}

fn describe(card_name: &str, key: &str, mutation: &Mutation, next: &VariationState) -> String {
    match mutation {
        Mutation::Increment | Mutation::Decrement => {
            format!("{} ({}): {} owned", card_name, key, next.count)
        }
        Mutation::ToggleOrdered => {
            let verb = if next.ordered { "marked as ordered" } else { "order cleared" };
            format!("{} ({}): {}", card_name, key, verb)
        }
        Mutation::ToggleLanguage(lang) => {
            let verb = if next.languages.iter().any(|l| l == lang) {
                "added"
            } else {
                "removed"
            };
            format!("{} ({}): {} {}", card_name, key, lang, verb)
        }
    }
}
