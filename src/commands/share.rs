use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::{self, Session};

/// The read-only share link for the current collection.
pub fn run(session: &Session, base_url: &str) -> Result<CmdResult> {
    let url = session::share_link(base_url, session.uid());
    let mut result = CmdResult::default().with_share_url(url.clone());
    result.add_message(CmdMessage::info(format!(
        "Anyone with this link can view {}'s collection (read-only):",
        session.display_label()
    )));
    result.add_message(CmdMessage::info(url));
    Ok(result)
}
