//! Eesti app domain core
//!
//! This crate implements the domain model for the mock Estonian
//! digital-identity wallet: identity documents with ordered field maps,
//! the user profile, the e-services catalog, validity-status derivation,
//! and the sensitive-field masking rules.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod profile;
pub mod sensitive;
pub mod service;
pub mod status;

pub use document::{
    default_documents, guarded_fields, Document, DocumentType, FieldMap, FIELD_FIRST_NAME,
    FIELD_LAST_NAME, NAME_FIELDS,
};
pub use error::{Error, Result};
pub use profile::{UserProfile, ProfileUpdate};
pub use sensitive::{display_value, is_sensitive, MASK_PLACEHOLDER, SENSITIVE_FIELDS};
pub use service::{
    default_services, service_count_label, Service, ServiceItem, ServiceStatus,
};
pub use status::{status_on, DocumentStatus, EXPIRY_WARNING_DAYS};
