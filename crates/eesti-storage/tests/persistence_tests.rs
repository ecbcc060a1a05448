//! File-backed persistence tests
//!
//! Exercise the document and profile stores against a real directory,
//! covering the round-trip, fallback, and merge behaviors.

use std::sync::Arc;

use eesti_core::{default_documents, ProfileUpdate, UserProfile, FIELD_LAST_NAME};
use eesti_storage::{DocumentStore, FileStore, LocalStore, ProfileStore, DOCUMENTS_KEY};

fn file_store(dir: &tempfile::TempDir) -> Arc<FileStore> {
    Arc::new(FileStore::new(dir.path()))
}

#[test]
fn first_run_seeds_defaults_and_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let docs = DocumentStore::open(file_store(&dir));

    assert_eq!(docs.documents(), default_documents().as_slice());
    // load alone writes nothing; only mutations persist
    assert!(!dir.path().join("eesti-app-documents.json").exists());
}

#[test]
fn document_round_trip_reproduces_field_maps_and_photo() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let mut docs = DocumentStore::open(store.clone());
    let mut edited = docs.get("3").unwrap().fields.clone();
    edited.insert("KATEGOORIAD".to_string(), "B, C".to_string());
    docs.commit_fields("3", &edited).unwrap();
    docs.attach_photo("3", "image/jpeg", b"not-really-a-jpeg").unwrap();

    let reloaded = DocumentStore::open(store);
    let license = reloaded.get("3").unwrap();
    assert_eq!(license.fields, docs.get("3").unwrap().fields);
    assert_eq!(license.fields.get("KATEGOORIAD").unwrap(), "B, C");
    assert!(license
        .photo
        .as_deref()
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));
    // untouched documents still match their defaults
    assert_eq!(reloaded.get("1").unwrap(), &default_documents()[0]);
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store
        .put(DOCUMENTS_KEY, r#"{"not":"an array"}"#)
        .unwrap();

    let docs = DocumentStore::open(store);
    assert_eq!(docs.documents(), default_documents().as_slice());
}

#[test]
fn name_guard_holds_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let mut docs = DocumentStore::open(store.clone());
    let mut edited = docs.get("2").unwrap().fields.clone();
    edited.insert(FIELD_LAST_NAME.to_string(), String::new());
    edited.insert("KODAKONDSUS".to_string(), "FIN".to_string());
    docs.commit_fields("2", &edited).unwrap();

    let reloaded = DocumentStore::open(store);
    let passport = reloaded.get("2").unwrap();
    assert_eq!(passport.fields.get(FIELD_LAST_NAME).unwrap(), "VIHRA");
    assert_eq!(passport.fields.get("KODAKONDSUS").unwrap(), "FIN");
}

#[test]
fn profile_round_trip_independent_of_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let mut profiles = ProfileStore::open(store.clone());
    profiles.update(ProfileUpdate {
        personal_code: Some("45604115050".to_string()),
        first_name: Some("Mari".to_string()),
        last_name: Some("Maasikas".to_string()),
        ..Default::default()
    });

    // documents untouched by the profile write
    let docs = DocumentStore::open(store.clone());
    assert_eq!(docs.documents(), default_documents().as_slice());

    let reloaded = ProfileStore::open(store);
    assert_eq!(reloaded.profile().display_name(), "Mari Maasikas");
    assert_eq!(reloaded.profile().personal_code, "45604115050");
}

#[test]
fn profile_defaults_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = ProfileStore::open(file_store(&dir));
    assert_eq!(profiles.profile(), &UserProfile::default());
}
