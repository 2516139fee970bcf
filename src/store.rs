//! In-memory user store
//!
//! Exclusive custodian of all user records for the process lifetime. Records
//! are never updated or deleted; the map only grows and is discarded when the
//! process exits.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::User;

/// Keyed collection of user records behind a read-write lock.
///
/// The server runs multiple actix workers, so `insert_unique` holds the write
/// lock across the whole email scan and insert to keep the email-uniqueness
/// invariant. Plain reads only take the read lock.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

/// Result of a guarded insert attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    DuplicateEmail,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record keyed by its id. The caller guarantees id uniqueness and
    /// must have already verified email uniqueness.
    pub fn insert(&self, user: User) {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.insert(user.id.clone(), user);
    }

    /// Insert `user` only if no stored record already has its email.
    ///
    /// `user.email` must already be lower-cased. The check and the insert run
    /// under one write lock so concurrent creates cannot both pass the scan.
    pub fn insert_unique(&self, user: User) -> InsertOutcome {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        if users.values().any(|u| u.email == user.email) {
            return InsertOutcome::DuplicateEmail;
        }
        users.insert(user.id.clone(), user);
        InsertOutcome::Inserted
    }

    /// Exact key lookup.
    pub fn get_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.get(id).cloned()
    }

    /// Linear scan for a record with the given email. Stored emails are
    /// lower-cased at creation, so passing a lower-cased argument makes the
    /// comparison case-insensitive by construction.
    pub fn find_by_email(&self, email_lower: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.values().find(|u| u.email == email_lower).cloned()
    }

    /// All records. Order is unspecified; callers must not depend on it.
    pub fn list_all(&self) -> Vec<User> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
