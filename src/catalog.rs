//! Static catalog loading.
//!
//! The catalog is a JSON array of [`CardRecord`]s read once at startup. The
//! file is trusted as-is (no schema validation); the only repair applied is
//! synthesizing a single `normal` variation template for records that carry
//! no `variations` map at all, so every card has at least one trackable
//! variation. A load failure is fatal to the caller — there is no retry.

use crate::error::{CardzError, Result};
use crate::model::{CardRecord, VariationTemplate};
use std::fs;
use std::path::Path;

pub const DEFAULT_CATALOG_FILENAME: &str = "cards.json";

pub fn load_catalog(path: &Path) -> Result<Vec<CardRecord>> {
    let content = fs::read_to_string(path)
        .map_err(|e| CardzError::Catalog(format!("{}: {}", path.display(), e)))?;

    let mut cards: Vec<CardRecord> = serde_json::from_str(&content)
        .map_err(|e| CardzError::Catalog(format!("{}: {}", path.display(), e)))?;

    for card in &mut cards {
        if card.variations.is_empty() {
            card.variations
                .insert("normal".to_string(), VariationTemplate::default());
        }
    }

    log::info!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}
