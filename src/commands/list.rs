use crate::collection::{Collection, ListFilter};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// The filtered and sorted card grid.
pub fn run(collection: &Collection, filter: &ListFilter) -> Result<CmdResult> {
    let cards: Vec<_> = collection
        .filtered_sorted(filter)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed_cards(cards);
    if result.listed_cards.is_empty() {
        result.add_message(CmdMessage::info("No cards match."));
    }
    Ok(result)
}

/// Distinct era labels, in catalog order.
pub fn eras(collection: &Collection) -> Result<CmdResult> {
    let eras = collection.eras();
    let mut result = CmdResult::default();
    if eras.is_empty() {
        result.add_message(CmdMessage::info("No eras in the catalog."));
    }
    for era in eras {
        result.add_message(CmdMessage::info(era));
    }
    Ok(result)
}
