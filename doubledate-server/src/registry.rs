use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use doubledate_core::{PublicUser, RegistryError, RegistryResult, User, UserPatch, UserStats};

/// In-memory registry of user records, keyed by id.
///
/// Internally synchronized; handlers treat it as a single logically-atomic
/// structure and never hold references across await points. State lives for
/// the life of the process only.
#[derive(Clone, Default)]
pub struct UserRegistry {
    users: Arc<DashMap<String, User>>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent. The entry API makes the check-and-insert atomic, so
    /// concurrent creates of the same id commit exactly one record.
    pub fn create(&self, id: &str, secret_key: &str) -> RegistryResult<PublicUser> {
        if id.is_empty() || secret_key.is_empty() {
            return Err(RegistryError::InvalidInput(
                "id + openaiKey required".to_string(),
            ));
        }

        match self.users.entry(id.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists(id.to_string())),
            Entry::Vacant(entry) => {
                let user = entry.insert(User::new(id, secret_key));
                Ok(PublicUser::from(&*user))
            }
        }
    }

    /// Public projections of all records. Iteration order is unspecified.
    pub fn list(&self) -> Vec<PublicUser> {
        self.users
            .iter()
            .map(|entry| PublicUser::from(entry.value()))
            .collect()
    }

    pub fn delete(&self, id: &str) -> RegistryResult<()> {
        self.users
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Applies the patch in place. Absent fields leave the record untouched;
    /// last-writer-wins under concurrent updates.
    pub fn update(&self, id: &str, patch: UserPatch) -> RegistryResult<PublicUser> {
        let mut user = self
            .users
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        if let Some(secret_key) = patch.secret_key {
            user.secret_key = secret_key;
        }
        if let Some(locale) = patch.locale {
            user.locale = locale;
        }
        user.last_updated = Some(Utc::now());

        Ok(PublicUser::from(&*user))
    }

    /// Stats lookup for the public read path. Absent ids and unset fields
    /// both produce the sentinel defaults, so the response never reveals
    /// whether an id exists.
    pub fn stats(&self, id: &str) -> UserStats {
        self.users
            .get(id)
            .map(|user| UserStats::from(user.value()))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
