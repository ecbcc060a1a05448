//! Wallet session state machine
//!
//! Drives the document wallet: a list screen of stacked cards and a
//! detail screen per document with viewing and editing modes. Sensitive
//! values are masked in viewing mode until revealed; reveal state never
//! survives a selection change. Edits go through a scratch buffer and
//! commit through the document store, which enforces the name-field
//! guard.

use std::sync::Arc;
use std::time::Instant;

use eesti_core::document::{Document, FieldMap, NAME_FIELDS};
use eesti_core::{display_value, is_sensitive, Error, Result};
use eesti_storage::{ClipboardPlatform, CopyIndicator, DocumentStore};

/// Wallet screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Stacked card list
    List,
    /// Detail view of one document
    Detail {
        /// Open document id
        id: String,
    },
}

/// Detail-screen mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    /// Read-only, masking applies
    Viewing,
    /// Editing the scratch buffer, values always shown
    Editing,
}

/// One wallet session over the document store
pub struct WalletSession {
    documents: DocumentStore,
    clipboard: Arc<dyn ClipboardPlatform>,
    indicator: CopyIndicator,
    screen: Screen,
    mode: DetailMode,
    show_sensitive: bool,
    scratch: Option<FieldMap>,
    qr_visible: bool,
}

impl WalletSession {
    /// Create a session on the list screen
    pub fn new(documents: DocumentStore, clipboard: Arc<dyn ClipboardPlatform>) -> Self {
        Self {
            documents,
            clipboard,
            indicator: CopyIndicator::new(),
            screen: Screen::List,
            mode: DetailMode::Viewing,
            show_sensitive: false,
            scratch: None,
            qr_visible: false,
        }
    }

    /// Documents in fixed list order
    pub fn documents(&self) -> &[Document] {
        self.documents.documents()
    }

    /// Current screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current detail mode
    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    /// Whether sensitive values are currently revealed
    pub fn show_sensitive(&self) -> bool {
        self.show_sensitive
    }

    /// The open document, if on the detail screen
    pub fn current(&self) -> Option<&Document> {
        match &self.screen {
            Screen::Detail { id } => self.documents.get(id),
            Screen::List => None,
        }
    }

    /// Open a document's detail view
    ///
    /// Always starts masked, regardless of what was revealed before.
    pub fn open(&mut self, id: &str) -> Result<()> {
        if self.documents.get(id).is_none() {
            return Err(Error::DocumentNotFound(id.to_string()));
        }
        self.screen = Screen::Detail { id: id.to_string() };
        self.mode = DetailMode::Viewing;
        self.show_sensitive = false;
        self.scratch = None;
        self.qr_visible = false;
        self.indicator.cancel();
        Ok(())
    }

    /// Return to the list screen, discarding any in-progress edit
    pub fn back(&mut self) {
        self.screen = Screen::List;
        self.mode = DetailMode::Viewing;
        self.show_sensitive = false;
        self.scratch = None;
        self.indicator.cancel();
    }

    /// Toggle sensitive-value visibility (viewing mode only)
    pub fn toggle_sensitive(&mut self) -> Result<bool> {
        self.require_detail()?;
        self.show_sensitive = !self.show_sensitive;
        Ok(self.show_sensitive)
    }

    /// Enter edit mode, snapshotting the live field map
    pub fn begin_edit(&mut self) -> Result<()> {
        let doc = self
            .current()
            .ok_or_else(|| Error::FlowState("no document open".to_string()))?;
        if self.mode == DetailMode::Editing {
            return Err(Error::FlowState("already editing".to_string()));
        }
        self.scratch = Some(doc.fields.clone());
        self.mode = DetailMode::Editing;
        Ok(())
    }

    /// Change a field in the scratch buffer
    ///
    /// Clearing a name field to blank is silently retained as-is, the
    /// same in-place rejection the original input handler applied.
    pub fn set_field(&mut self, label: &str, value: &str) -> Result<()> {
        if self.mode != DetailMode::Editing {
            return Err(Error::FlowState("not editing".to_string()));
        }
        if NAME_FIELDS.contains(&label) && value.trim().is_empty() {
            tracing::debug!(label, "ignored attempt to clear a name field");
            return Ok(());
        }
        let scratch = self
            .scratch
            .as_mut()
            .ok_or_else(|| Error::FlowState("no edit in progress".to_string()))?;
        scratch.insert(label.to_string(), value.to_string());
        Ok(())
    }

    /// Discard the scratch buffer and return to viewing
    pub fn cancel_edit(&mut self) -> Result<()> {
        if self.mode != DetailMode::Editing {
            return Err(Error::FlowState("not editing".to_string()));
        }
        self.scratch = None;
        self.mode = DetailMode::Viewing;
        Ok(())
    }

    /// Commit the scratch buffer and return to viewing
    ///
    /// The store applies the name-field guard before commit, so a blank
    /// name that slipped into the buffer reverts to its pre-edit value.
    pub fn save_edit(&mut self) -> Result<()> {
        if self.mode != DetailMode::Editing {
            return Err(Error::FlowState("not editing".to_string()));
        }
        let id = match &self.screen {
            Screen::Detail { id } => id.clone(),
            Screen::List => return Err(Error::FlowState("no document open".to_string())),
        };
        let scratch = self
            .scratch
            .take()
            .ok_or_else(|| Error::FlowState("no edit in progress".to_string()))?;
        self.documents
            .commit_fields(&id, &scratch)
            .map_err(|e| Error::Storage(e.to_string()))?;
        self.mode = DetailMode::Viewing;
        Ok(())
    }

    /// Rendered label/value rows for the open document
    ///
    /// Editing shows the scratch buffer unmasked; viewing masks the
    /// sensitive labels unless revealed.
    pub fn field_rows(&self) -> Result<Vec<(String, String)>> {
        let doc = self
            .current()
            .ok_or_else(|| Error::FlowState("no document open".to_string()))?;
        let rows = match (&self.mode, &self.scratch) {
            (DetailMode::Editing, Some(scratch)) => scratch
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            _ => doc
                .fields
                .iter()
                .map(|(k, v)| {
                    (
                        k.clone(),
                        display_value(k, v, self.show_sensitive).to_string(),
                    )
                })
                .collect(),
        };
        Ok(rows)
    }

    /// Copy a sensitive field's literal value to the clipboard
    ///
    /// Only allowed in viewing mode with sensitive values revealed, and
    /// only for sensitive labels. Starts the transient copied indicator,
    /// superseding a pending one.
    pub fn copy_field(&mut self, label: &str, now: Instant) -> Result<()> {
        self.require_detail()?;
        if self.mode != DetailMode::Viewing {
            return Err(Error::FlowState("copy is only available while viewing".to_string()));
        }
        if !self.show_sensitive {
            return Err(Error::FlowState("sensitive values are hidden".to_string()));
        }
        if !is_sensitive(label) {
            return Err(Error::FlowState(format!("field {label} is not copyable")));
        }
        let doc = self
            .current()
            .ok_or_else(|| Error::FlowState("no document open".to_string()))?;
        let value = doc
            .fields
            .get(label)
            .ok_or_else(|| Error::Validation(format!("unknown field {label}")))?
            .clone();
        self.clipboard.copy(&value);
        self.indicator.mark_copied(label, now);
        Ok(())
    }

    /// Field currently showing the copied indicator, if unexpired
    ///
    /// Polling past the deadline also frees the indicator slot.
    pub fn copied_field(&self, now: Instant) -> Option<String> {
        self.indicator.expire(now);
        self.indicator.copied_field(now)
    }

    /// Clear the clipboard and drop any pending copied indicator
    pub fn clear_clipboard(&self) {
        self.clipboard.clear();
        self.indicator.cancel();
    }

    /// Attach a photo to the open document and persist
    pub fn attach_photo(&mut self, mime: &str, bytes: &[u8]) -> Result<()> {
        let id = match &self.screen {
            Screen::Detail { id } => id.clone(),
            Screen::List => return Err(Error::FlowState("no document open".to_string())),
        };
        self.documents
            .attach_photo(&id, mime, bytes)
            .map_err(|e| Error::Storage(e.to_string()))
    }

    /// Show the static QR overlay (list screen only)
    pub fn show_qr(&mut self) -> Result<()> {
        if self.screen != Screen::List {
            return Err(Error::FlowState("scan overlay opens from the list".to_string()));
        }
        self.qr_visible = true;
        Ok(())
    }

    /// Dismiss the QR overlay (backdrop click or explicit close)
    pub fn dismiss_qr(&mut self) {
        self.qr_visible = false;
    }

    /// Whether the QR overlay is showing
    pub fn qr_visible(&self) -> bool {
        self.qr_visible
    }

    fn require_detail(&self) -> Result<()> {
        match self.screen {
            Screen::Detail { .. } => Ok(()),
            Screen::List => Err(Error::FlowState("no document open".to_string())),
        }
    }
}
