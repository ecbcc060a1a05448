//! Sensitive-field masking rules
//!
//! A fixed set of field labels is classified sensitive: the personal code
//! and the document number of each document type. Masked values render as
//! a fixed placeholder whose length never varies with the real value.

/// Field labels whose values are masked until explicitly revealed
pub const SENSITIVE_FIELDS: [&str; 4] = [
    "ISIKUKOOD",
    "DOKUMENDI NUMBER",
    "PASSI NUMBER",
    "JUHILOA NUMBER",
];

/// Fixed mask placeholder (length-independent of the real value)
pub const MASK_PLACEHOLDER: &str = "••••••••••";

/// Check whether a field label is classified sensitive
pub fn is_sensitive(label: &str) -> bool {
    SENSITIVE_FIELDS.contains(&label)
}

/// Value to render for a field in viewing mode
///
/// Sensitive fields show the placeholder unless `revealed`; everything
/// else always shows the stored value.
pub fn display_value<'a>(label: &str, value: &'a str, revealed: bool) -> &'a str {
    if is_sensitive(label) && !revealed {
        MASK_PLACEHOLDER
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_set() {
        assert!(is_sensitive("ISIKUKOOD"));
        assert!(is_sensitive("DOKUMENDI NUMBER"));
        assert!(is_sensitive("PASSI NUMBER"));
        assert!(is_sensitive("JUHILOA NUMBER"));
        assert!(!is_sensitive("PEREKONNANIMI"));
        assert!(!is_sensitive("SÜNNIAEG"));
        assert!(!is_sensitive("KEHTIB KUNI"));
    }

    #[test]
    fn test_masked_placeholder_is_fixed() {
        assert_eq!(display_value("ISIKUKOOD", "30303039914", false), MASK_PLACEHOLDER);
        assert_eq!(display_value("PASSI NUMBER", "x", false), MASK_PLACEHOLDER);
        // identical placeholder regardless of real value length
        assert_eq!(
            display_value("ISIKUKOOD", "30303039914", false),
            display_value("PASSI NUMBER", "x", false)
        );
    }

    #[test]
    fn test_revealed_and_plain_values() {
        assert_eq!(display_value("ISIKUKOOD", "30303039914", true), "30303039914");
        assert_eq!(display_value("SUGU", "Mees", false), "Mees");
        assert_eq!(display_value("SUGU", "Mees", true), "Mees");
    }
}
