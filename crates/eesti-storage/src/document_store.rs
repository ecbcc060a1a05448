//! Document list persistence
//!
//! The wallet's document list is seeded from the fixed default set and
//! thereafter loaded from the documents key, merging each persisted
//! record onto the default template at the same index. Missing fields in
//! a persisted record fall back to the template value; records beyond
//! the default set are dropped and a short list is topped up with the
//! remaining defaults, so the store always holds exactly the default
//! document count. Every mutation persists immediately, best-effort.

use std::sync::Arc;

use base64::Engine;
use chrono::NaiveDate;
use serde::Deserialize;

use eesti_core::document::{default_documents, guarded_fields, Document, FieldMap};
use eesti_core::DocumentType;

use crate::error::{Error, Result};
use crate::local_store::{LocalStore, DOCUMENTS_KEY};

/// Persisted document record with per-field fallback
///
/// Old blobs may carry keys the model no longer stores (for example a
/// `status` tag); they are ignored. A missing field takes the default
/// template's value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PersistedDocument {
    id: Option<String>,
    #[serde(rename = "type")]
    doc_type: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    valid_until: Option<NaiveDate>,
    personal_code: Option<String>,
    document_number: Option<String>,
    issued_by: Option<String>,
    gradient: Option<String>,
    flag_colors: Option<Vec<String>>,
    data: Option<FieldMap>,
    photo: Option<String>,
}

impl PersistedDocument {
    fn merge_onto(self, template: &Document) -> Document {
        Document {
            id: self.id.unwrap_or_else(|| template.id.clone()),
            doc_type: self
                .doc_type
                .map(|t| DocumentType::from_tag(&t))
                .unwrap_or(template.doc_type),
            title: self.title.unwrap_or_else(|| template.title.clone()),
            subtitle: self.subtitle.unwrap_or_else(|| template.subtitle.clone()),
            valid_until: self.valid_until.unwrap_or(template.valid_until),
            personal_code: self.personal_code.or_else(|| template.personal_code.clone()),
            document_number: self
                .document_number
                .unwrap_or_else(|| template.document_number.clone()),
            issued_by: self.issued_by.unwrap_or_else(|| template.issued_by.clone()),
            gradient: self.gradient.unwrap_or_else(|| template.gradient.clone()),
            flag_colors: self.flag_colors.unwrap_or_else(|| template.flag_colors.clone()),
            fields: self.data.unwrap_or_else(|| template.fields.clone()),
            photo: self.photo.or_else(|| template.photo.clone()),
        }
    }
}

/// Persistent document list store
pub struct DocumentStore {
    store: Arc<dyn LocalStore>,
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Open the store, loading persisted documents or the default set
    pub fn open(store: Arc<dyn LocalStore>) -> Self {
        let documents = load_documents(store.as_ref());
        Self { store, documents }
    }

    /// All documents in fixed order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by id
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Commit an edited field map to a document
    ///
    /// The name-field guard applies: a blank name field in `edited` is
    /// replaced by its current value before commit. Persists immediately.
    pub fn commit_fields(&mut self, id: &str, edited: &FieldMap) -> Result<()> {
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::NotFound(format!("document {id}")))?;
        doc.fields = guarded_fields(&doc.fields, edited);
        self.save();
        Ok(())
    }

    /// Attach a photo to a document as an inline-encoded data URL
    ///
    /// No size or type validation beyond what the caller already did.
    /// Persists immediately.
    pub fn attach_photo(&mut self, id: &str, mime: &str, bytes: &[u8]) -> Result<()> {
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| Error::NotFound(format!("document {id}")))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        doc.photo = Some(format!("data:{mime};base64,{encoded}"));
        self.save();
        Ok(())
    }

    /// Serialize and write the document list, best-effort
    ///
    /// Write failures are swallowed; the application never refuses to
    /// render over a persistence error.
    pub fn save(&self) {
        let json = match serde_json::to_string(&self.documents) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize documents, skipping save");
                return;
            }
        };
        if let Err(err) = self.store.put(DOCUMENTS_KEY, &json) {
            tracing::warn!(%err, "failed to persist documents");
        }
    }
}

fn load_documents(store: &dyn LocalStore) -> Vec<Document> {
    let defaults = default_documents();
    let Some(raw) = store.get(DOCUMENTS_KEY) else {
        return defaults;
    };
    let persisted: Vec<PersistedDocument> = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(%err, "malformed persisted documents, using defaults");
            return defaults;
        }
    };

    if persisted.len() > defaults.len() {
        tracing::warn!(
            extra = persisted.len() - defaults.len(),
            "persisted document list longer than default set, dropping extras"
        );
    }

    let mut merged: Vec<Document> = persisted
        .into_iter()
        .zip(defaults.iter())
        .map(|(record, template)| record.merge_onto(template))
        .collect();
    merged.extend(defaults.into_iter().skip(merged.len()));
    merged
}
