//! Owner and viewer sessions.
//!
//! Two mutually exclusive entry paths, decided once at startup:
//!
//! - **Owner**: no `user` share parameter. The persisted session (if any) is
//!   restored from `session.json`; writes are enabled.
//! - **Viewer**: a `user=<id>` share parameter pins the session to that uid
//!   without any real authentication. The document is loaded read-only and
//!   its `ownerEmail` is surfaced as the display label. Every mutating entry
//!   point checks [`Session::view_only`] and becomes a no-op.
//!
//! Only owner sessions are persisted; a viewer session lives for one
//! invocation.

use crate::error::{CardzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SESSION_FILENAME: &str = "session.json";

/// Display label for a shared collection whose document carries no owner
/// email (matches the original placeholder).
const SHARED_LABEL: &str = "Shared Collection";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Session {
    Owner {
        uid: String,
        email: String,
    },
    Viewer {
        uid: String,
        #[serde(default)]
        owner_label: Option<String>,
    },
}

impl Session {
    /// Viewer session derived from a share parameter.
    pub fn viewer(uid: impl Into<String>) -> Self {
        Session::Viewer { uid: uid.into(), owner_label: None }
    }

    pub fn uid(&self) -> &str {
        match self {
            Session::Owner { uid, .. } | Session::Viewer { uid, .. } => uid,
        }
    }

    pub fn view_only(&self) -> bool {
        matches!(self, Session::Viewer { .. })
    }

    /// What the header shows: the owner's email, or the shared-collection
    /// label (the document's `ownerEmail` once it is known).
    pub fn display_label(&self) -> &str {
        match self {
            Session::Owner { email, .. } => email,
            Session::Viewer { owner_label, .. } => {
                owner_label.as_deref().unwrap_or(SHARED_LABEL)
            }
        }
    }

    /// Attach the document's `ownerEmail` to a viewer session.
    pub fn set_owner_label(&mut self, label: Option<String>) {
        if let Session::Viewer { owner_label, .. } = self {
            if label.is_some() {
                *owner_label = label;
            }
        }
    }
}

/// Extract the user id from a share link, or pass a bare id through.
///
/// Accepts `https://host/path?user=<id>` (with any other query parameters)
/// as well as `<id>` directly.
pub fn share_user_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once('?') {
        Some((_, query)) => query
            .split('&')
            .find_map(|pair| pair.strip_prefix("user="))
            .filter(|id| !id.is_empty())
            .map(String::from),
        None => Some(trimmed.to_string()),
    }
}

/// The canonical share link for a user id.
pub fn share_link(base_url: &str, uid: &str) -> String {
    format!("{}?user={}", base_url.trim_end_matches('/'), uid)
}

/// Restore the persisted session, if any.
pub fn load(data_dir: &Path) -> Result<Option<Session>> {
    let path = data_dir.join(SESSION_FILENAME);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(CardzError::Io)?;
    let session: Session = serde_json::from_str(&content).map_err(CardzError::Serialization)?;
    Ok(Some(session))
}

/// Persist an owner session. Viewer sessions are never saved.
pub fn save(data_dir: &Path, session: &Session) -> Result<()> {
    if session.view_only() {
        return Ok(());
    }
    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(CardzError::Io)?;
    }
    let path = data_dir.join(SESSION_FILENAME);
    let content = serde_json::to_string_pretty(session).map_err(CardzError::Serialization)?;
    fs::write(path, content).map_err(CardzError::Io)?;
    Ok(())
}

/// Clear the persisted session on sign-out.
pub fn clear(data_dir: &Path) -> Result<()> {
    let path = data_dir.join(SESSION_FILENAME);
    if path.exists() {
        fs::remove_file(path).map_err(CardzError::Io)?;
    }
    Ok(())
}
