//! Copy-to-clipboard indicator
//!
//! Copying a sensitive field flips a transient "copied" marker on that
//! field for a fixed 1.5 s before reverting. Exactly one field can show
//! the marker at a time; a newer copy cancels the pending timer of the
//! prior one explicitly. The indicator is poll-based (the caller passes
//! the current instant), so a disposed view simply stops polling and no
//! stale callback ever fires.

use parking_lot::RwLock;
use std::time::{Duration, Instant};

/// How long the "copied" indicator stays visible, in milliseconds
pub const COPIED_INDICATOR_MS: u64 = 1500;

#[derive(Debug, Clone)]
struct PendingCopy {
    field: String,
    deadline: Instant,
}

/// Transient copied-field indicator with an explicit cancellable timer
#[derive(Default)]
pub struct CopyIndicator {
    pending: RwLock<Option<PendingCopy>>,
}

impl CopyIndicator {
    /// Create an idle indicator
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `field` as just copied, superseding any pending indicator
    pub fn mark_copied(&self, field: &str, now: Instant) {
        // overwriting the slot cancels the superseded timer
        *self.pending.write() = Some(PendingCopy {
            field: field.to_string(),
            deadline: now + Duration::from_millis(COPIED_INDICATOR_MS),
        });
    }

    /// The field currently showing the indicator, if its timer has not
    /// yet expired at `now`
    pub fn copied_field(&self, now: Instant) -> Option<String> {
        let pending = self.pending.read();
        pending
            .as_ref()
            .filter(|p| now < p.deadline)
            .map(|p| p.field.clone())
    }

    /// Drop an expired indicator so it no longer occupies the slot
    pub fn expire(&self, now: Instant) {
        let mut pending = self.pending.write();
        if pending.as_ref().is_some_and(|p| now >= p.deadline) {
            *pending = None;
        }
    }

    /// Cancel any pending indicator
    pub fn cancel(&self) {
        *self.pending.write() = None;
    }
}

/// Platform clipboard interface
pub trait ClipboardPlatform: Send + Sync {
    /// Copy text to the clipboard
    fn copy(&self, text: &str) -> bool;

    /// Get current clipboard content
    fn paste(&self) -> Option<String>;

    /// Clear the clipboard
    fn clear(&self) -> bool;
}

/// Mock clipboard for testing
#[derive(Default)]
pub struct MockClipboard {
    content: RwLock<Option<String>>,
}

impl MockClipboard {
    /// Create an empty mock clipboard
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardPlatform for MockClipboard {
    fn copy(&self, text: &str) -> bool {
        *self.content.write() = Some(text.to_string());
        true
    }

    fn paste(&self) -> Option<String> {
        self.content.read().clone()
    }

    fn clear(&self) -> bool {
        *self.content.write() = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_lifecycle() {
        let indicator = CopyIndicator::new();
        let t0 = Instant::now();

        assert!(indicator.copied_field(t0).is_none());

        indicator.mark_copied("ISIKUKOOD", t0);
        assert_eq!(indicator.copied_field(t0).as_deref(), Some("ISIKUKOOD"));
        assert_eq!(
            indicator
                .copied_field(t0 + Duration::from_millis(1400))
                .as_deref(),
            Some("ISIKUKOOD")
        );
        assert!(indicator
            .copied_field(t0 + Duration::from_millis(1500))
            .is_none());
    }

    #[test]
    fn test_newer_copy_supersedes() {
        let indicator = CopyIndicator::new();
        let t0 = Instant::now();

        indicator.mark_copied("ISIKUKOOD", t0);
        let t1 = t0 + Duration::from_millis(500);
        indicator.mark_copied("DOKUMENDI NUMBER", t1);

        // only one field at a time, timer restarted from the new copy
        assert_eq!(
            indicator.copied_field(t1).as_deref(),
            Some("DOKUMENDI NUMBER")
        );
        assert_eq!(
            indicator
                .copied_field(t1 + Duration::from_millis(1400))
                .as_deref(),
            Some("DOKUMENDI NUMBER")
        );
        assert!(indicator
            .copied_field(t1 + Duration::from_millis(1500))
            .is_none());
    }

    #[test]
    fn test_expire_and_cancel() {
        let indicator = CopyIndicator::new();
        let t0 = Instant::now();

        indicator.mark_copied("PASSI NUMBER", t0);
        indicator.expire(t0 + Duration::from_millis(2000));
        assert!(indicator.copied_field(t0).is_none());

        indicator.mark_copied("PASSI NUMBER", t0);
        indicator.cancel();
        assert!(indicator.copied_field(t0).is_none());
    }

    #[test]
    fn test_mock_clipboard() {
        let clipboard = MockClipboard::new();
        assert!(clipboard.paste().is_none());

        clipboard.copy("30303039914");
        assert_eq!(clipboard.paste().as_deref(), Some("30303039914"));

        clipboard.clear();
        assert!(clipboard.paste().is_none());
    }
}
