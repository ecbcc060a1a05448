//! Local persistence for the Eesti app
//!
//! Mirrors the browser local-storage model of the original application:
//! plain JSON blobs under two fixed keys, one for the document list and
//! one for the user profile. All persistence is best-effort; read or
//! parse failures fall back to the default datasets and write failures
//! are swallowed (logged, never surfaced).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clipboard;
pub mod document_store;
pub mod error;
pub mod local_store;
pub mod profile_store;

pub use clipboard::{
    ClipboardPlatform, CopyIndicator, MockClipboard, COPIED_INDICATOR_MS,
};
pub use document_store::DocumentStore;
pub use error::{Error, Result};
pub use local_store::{FileStore, LocalStore, MemoryStore, DOCUMENTS_KEY, PROFILE_KEY};
pub use profile_store::ProfileStore;
