//! Local account registry.
//!
//! Accounts live in `users.json` under the data directory: email to uid plus
//! an optional password digest. Federated sign-in creates an account without
//! a password on first use. This is a convenience login for a personal tool,
//! not a hardened credential store; passwords are stored as unsalted SHA-256
//! digests.
//!
//! Error messages mirror the phrasing users of the original service saw, so
//! the CLI reads the same way.

use crate::error::Result;
use crate::model::OwnershipDocument;
use crate::session::Session;
use crate::store::OwnershipStore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const USERS_FILENAME: &str = "users.json";
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already in use. Try signing in instead.")]
    EmailAlreadyInUse,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("No account found with this email. Try signing up first.")]
    UserNotFound,

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Password is too weak (minimum 6 characters)")]
    WeakPassword,

    #[error("Email and password are required")]
    MissingCredentials,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserEntry {
    uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password_hash: Option<String>,
}

/// The on-disk account registry, keyed by email.
#[derive(Debug)]
pub struct AuthRegistry {
    path: PathBuf,
    users: BTreeMap<String, UserEntry>,
}

impl AuthRegistry {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(USERS_FILENAME);
        let users = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, users })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.users)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn sign_up(&mut self, email: &str, password: &str) -> Result<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }
        if !valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword.into());
        }
        if self.users.contains_key(email) {
            return Err(AuthError::EmailAlreadyInUse.into());
        }

        let uid = uuid::Uuid::new_v4().to_string();
        self.users.insert(
            email.to_string(),
            UserEntry { uid: uid.clone(), password_hash: Some(digest(password)) },
        );
        self.persist()?;
        log::info!("account created for {}", email);
        Ok(Session::Owner { uid, email: email.to_string() })
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }
        let entry = self.users.get(email).ok_or(AuthError::UserNotFound)?;
        match &entry.password_hash {
            Some(hash) if *hash == digest(password) => Ok(Session::Owner {
                uid: entry.uid.clone(),
                email: email.to_string(),
            }),
            _ => Err(AuthError::WrongPassword.into()),
        }
    }

    /// Federated sign-in: trust the provider's email, creating a
    /// password-less account on first use. `None` means the user cancelled
    /// the provider flow, which is not an error.
    pub fn sign_in_federated(&mut self, email: Option<&str>) -> Result<Option<Session>> {
        let email = match email {
            Some(e) if !e.is_empty() => e,
            _ => return Ok(None),
        };
        if !valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }

        let uid = match self.users.get(email) {
            Some(entry) => entry.uid.clone(),
            None => {
                let uid = uuid::Uuid::new_v4().to_string();
                self.users.insert(
                    email.to_string(),
                    UserEntry { uid: uid.clone(), password_hash: None },
                );
                self.persist()?;
                uid
            }
        };
        Ok(Some(Session::Owner { uid, email: email.to_string() }))
    }
}

/// Write `ownerEmail` into the user's document if it is not set yet, so
/// shared views can label the collection.
pub fn seed_owner_email<S: OwnershipStore>(store: &mut S, session: &Session) -> Result<()> {
    let email = match session {
        Session::Owner { email, .. } => email.clone(),
        Session::Viewer { .. } => return Ok(()),
    };
    let mut doc = store.load(session.uid())?.unwrap_or_else(OwnershipDocument::default);
    if doc.owner_email.is_none() {
        doc.owner_email = Some(email);
        store.put(session.uid(), &doc)?;
    }
    Ok(())
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

fn digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
