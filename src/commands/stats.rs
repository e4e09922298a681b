use crate::collection::Collection;
use crate::commands::CmdResult;
use crate::error::Result;

/// Aggregate collection statistics.
pub fn run(collection: &Collection) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(collection.stats()))
}
