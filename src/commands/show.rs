use crate::collection::Collection;
use crate::commands::CmdResult;
use crate::error::{CardzError, Result};

/// Per-card detail: the card with all its variation states, for the UI to
/// render however it likes.
pub fn run(collection: &Collection, card_id: &str) -> Result<CmdResult> {
    let card = collection
        .card(card_id)
        .ok_or_else(|| CardzError::CardNotFound(card_id.to_string()))?;
    Ok(CmdResult::default().with_listed_cards(vec![card.clone()]))
}
