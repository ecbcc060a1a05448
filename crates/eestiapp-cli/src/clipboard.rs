//! Terminal clipboard
//!
//! The shell has no system clipboard; copied values are held in memory
//! for the lifetime of the session and echoed back on copy.

use std::sync::Mutex;

use eesti_storage::ClipboardPlatform;

/// Remembers the last copied value for the shell session
#[derive(Default)]
pub struct TerminalClipboard {
    content: Mutex<Option<String>>,
}

impl TerminalClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardPlatform for TerminalClipboard {
    fn copy(&self, text: &str) -> bool {
        match self.content.lock() {
            Ok(mut content) => {
                *content = Some(text.to_string());
                true
            }
            Err(_) => false,
        }
    }

    fn paste(&self) -> Option<String> {
        self.content.lock().ok().and_then(|c| c.clone())
    }

    fn clear(&self) -> bool {
        match self.content.lock() {
            Ok(mut content) => {
                *content = None;
                true
            }
            Err(_) => false,
        }
    }
}
