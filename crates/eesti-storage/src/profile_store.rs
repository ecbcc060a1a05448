//! User profile persistence
//!
//! Defaults-or-persisted on open, whole-record atomic commit. No
//! field-level validation is applied here; empty strings pass through.
//! The document store guards its name fields, this store deliberately
//! does not (preserved asymmetry from the original application).

use std::sync::Arc;

use eesti_core::{ProfileUpdate, UserProfile};

use crate::local_store::{LocalStore, PROFILE_KEY};

/// Persistent user profile store
pub struct ProfileStore {
    store: Arc<dyn LocalStore>,
    profile: UserProfile,
}

impl ProfileStore {
    /// Open the store, loading the persisted profile or the default
    pub fn open(store: Arc<dyn LocalStore>) -> Self {
        let profile = match store.get(PROFILE_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "malformed persisted profile, using default");
                UserProfile::default()
            }),
            None => UserProfile::default(),
        };
        Self { store, profile }
    }

    /// Current profile
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Replace the whole record and persist
    pub fn commit(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.save();
    }

    /// Merge a partial update into the record and persist
    pub fn update(&mut self, update: ProfileUpdate) {
        self.profile.apply(update);
        self.save();
    }

    fn save(&self) {
        let json = match serde_json::to_string(&self.profile) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize profile, skipping save");
                return;
            }
        };
        if let Err(err) = self.store.put(PROFILE_KEY, &json) {
            tracing::warn!(%err, "failed to persist profile");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::MemoryStore;

    #[test]
    fn test_defaults_on_missing() {
        let store = Arc::new(MemoryStore::new());
        let profiles = ProfileStore::open(store);
        assert_eq!(profiles.profile(), &UserProfile::default());
    }

    #[test]
    fn test_defaults_on_malformed() {
        let store = Arc::new(MemoryStore::new());
        store.put(PROFILE_KEY, "][").unwrap();
        let profiles = ProfileStore::open(store);
        assert_eq!(profiles.profile(), &UserProfile::default());
    }

    #[test]
    fn test_commit_round_trip() {
        let store = Arc::new(MemoryStore::new());
        let mut profiles = ProfileStore::open(store.clone());

        profiles.update(ProfileUpdate {
            first_name: Some("MARI".to_string()),
            last_name: Some("MAASIKAS".to_string()),
            ..Default::default()
        });

        let reloaded = ProfileStore::open(store);
        assert_eq!(reloaded.profile().display_name(), "MARI MAASIKAS");
        assert_eq!(reloaded.profile().gender, "Mees");
    }

    #[test]
    fn test_empty_fields_persist_unchecked() {
        let store = Arc::new(MemoryStore::new());
        let mut profiles = ProfileStore::open(store.clone());

        let mut edited = profiles.profile().clone();
        edited.first_name = String::new();
        profiles.commit(edited);

        let reloaded = ProfileStore::open(store);
        assert_eq!(reloaded.profile().first_name, "");
    }
}
