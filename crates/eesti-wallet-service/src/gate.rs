//! Access gate
//!
//! The first of the two cosmetic gates: a fixed shared-secret comparison.
//! The submitted code is hex-encoded before comparison against the
//! expected hex, which keeps the plain string out of the source but
//! provides no confidentiality. Unlimited retries, no lockout.

use eesti_core::Error;

/// Hex encoding of the expected access code
pub const ACCESS_CODE_HEX: &str = "6c316c6c61";

/// Access-code gate state
#[derive(Debug, Default)]
pub struct AccessGate {
    unlocked: bool,
    error: Option<String>,
}

impl AccessGate {
    /// Create a closed gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit an access code
    ///
    /// Returns whether the gate is now open. A correct code opens the
    /// gate exactly once; repeating it is a no-op. A wrong code leaves
    /// the gate closed and sets the fixed error message.
    pub fn submit(&mut self, code: &str) -> bool {
        if hex::encode(code.as_bytes()) == ACCESS_CODE_HEX {
            if !self.unlocked {
                self.unlocked = true;
                tracing::info!("access gate opened");
            }
            self.error = None;
            true
        } else {
            self.error = Some(Error::InvalidAccessCode.user_message());
            false
        }
    }

    /// Whether the gate is open
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Error message from the last failed submission, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_code_stays_closed() {
        let mut gate = AccessGate::new();
        assert!(!gate.submit("parool"));
        assert!(!gate.is_unlocked());
        assert_eq!(gate.error(), Some("Vale kood. Proovi uuesti."));

        assert!(!gate.submit(""));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn test_correct_code_opens_once() {
        let mut gate = AccessGate::new();
        assert!(gate.submit("l1lla"));
        assert!(gate.is_unlocked());
        assert!(gate.error().is_none());

        // idempotent on repeat correct submission
        assert!(gate.submit("l1lla"));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut gate = AccessGate::new();
        assert!(!gate.submit("L1LLA")); // case matters
        assert!(gate.submit("l1lla"));
        assert!(gate.error().is_none());
    }

    #[test]
    fn test_expected_hex_matches_code() {
        assert_eq!(hex::encode("l1lla".as_bytes()), ACCESS_CODE_HEX);
    }
}
