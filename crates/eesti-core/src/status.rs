//! Validity status derivation
//!
//! Status is a pure projection of the validity date against a supplied
//! "today"; it is recomputed on every read and never stored, so it can
//! never go stale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Documents expiring within this many days are flagged
pub const EXPIRY_WARNING_DAYS: i64 = 90;

/// Derived document validity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    /// Valid, expiry more than the warning window away
    Active,
    /// Valid but expiring within the warning window
    ExpiringSoon,
    /// Validity date has passed
    Expired,
}

impl DocumentStatus {
    /// Estonian badge label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "✓ Kehtiv",
            DocumentStatus::ExpiringSoon => "Aegub varsti",
            DocumentStatus::Expired => "Aegunud",
        }
    }
}

/// Derive status from a validity date and the current date
///
/// Negative day delta means expired; a delta strictly under
/// [`EXPIRY_WARNING_DAYS`] means expiring soon; everything else is active.
pub fn status_on(valid_until: NaiveDate, today: NaiveDate) -> DocumentStatus {
    let days = (valid_until - today).num_days();
    if days < 0 {
        DocumentStatus::Expired
    } else if days < EXPIRY_WARNING_DAYS {
        DocumentStatus::ExpiringSoon
    } else {
        DocumentStatus::Active
    }
}
