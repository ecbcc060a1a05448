//! Identity documents
//!
//! The wallet holds a fixed set of three documents (ID card, passport,
//! driver's license), each carrying an insertion-ordered label→value map
//! of printed fields. Documents are seeded from the default set on first
//! run and mutated in place afterwards; the user can never delete one.

use chrono::NaiveDate;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::status::{status_on, DocumentStatus};

/// Last-name field label
pub const FIELD_LAST_NAME: &str = "PEREKONNANIMI";

/// First-name field label
pub const FIELD_FIRST_NAME: &str = "EESNIMI";

/// Field labels that must never be emptied by an edit
pub const NAME_FIELDS: [&str; 2] = [FIELD_LAST_NAME, FIELD_FIRST_NAME];

/// Ordered label→value map of a document's printed fields
pub type FieldMap = IndexMap<String, String>;

/// Document type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    /// National identity card
    IdCard,
    /// EU passport
    Passport,
    /// Driver's license
    DriversLicense,
}

impl DocumentType {
    /// Storage tag used in persisted records
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentType::IdCard => "id-card",
            DocumentType::Passport => "passport",
            DocumentType::DriversLicense => "drivers-license",
        }
    }

    /// Parse a storage tag, falling back to the ID-card type for
    /// unrecognized values (mirrors the icon-map fallback on load)
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "passport" => DocumentType::Passport,
            "drivers-license" => DocumentType::DriversLicense,
            _ => DocumentType::IdCard,
        }
    }

    /// Display glyph shown on the stacked card for this type
    ///
    /// Purely presentational and derived, never serialized.
    pub fn glyph(&self) -> &'static str {
        match self {
            DocumentType::IdCard => "estonian-flag",
            DocumentType::Passport => "biometric-passport",
            DocumentType::DriversLicense => "eu-flag",
        }
    }
}

/// Identity document record
///
/// `status` is deliberately absent: validity status is derived from
/// `valid_until` at read time (see [`crate::status`]). Legacy persisted
/// blobs may still carry a `status` key; it is ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique, stable identifier
    pub id: String,
    /// Document type
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Display title (e.g. "ID-kaart")
    pub title: String,
    /// Display subtitle (e.g. "Isikutunnistus")
    pub subtitle: String,
    /// Validity date
    pub valid_until: NaiveDate,
    /// Personal identification code (ID card only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_code: Option<String>,
    /// Document number
    pub document_number: String,
    /// Issuing authority
    pub issued_by: String,
    /// Card background gradient style tag
    pub gradient: String,
    /// Flag stripe colors for the card header
    pub flag_colors: Vec<String>,
    /// Ordered printed fields
    #[serde(rename = "data")]
    pub fields: FieldMap,
    /// Attached photo as an inline-encoded data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Document {
    /// Derive validity status as of `today`
    pub fn status_as_of(&self, today: NaiveDate) -> DocumentStatus {
        status_on(self.valid_until, today)
    }
}

/// Apply the name-field guard to an edited field map
///
/// Any name field submitted blank (or missing) is replaced by its value
/// from `prior`, so a committed edit can never empty it. All other fields
/// are taken from `edited` as-is, preserving their order.
pub fn guarded_fields(prior: &FieldMap, edited: &FieldMap) -> FieldMap {
    let mut out = edited.clone();
    for name in NAME_FIELDS {
        let blank = out.get(name).map_or(true, |v| v.trim().is_empty());
        if blank {
            if let Some(prev) = prior.get(name) {
                out.insert(name.to_string(), prev.clone());
            }
        }
    }
    out
}

fn field_map(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

static DEFAULT_DOCUMENTS: Lazy<Vec<Document>> = Lazy::new(|| {
    vec![
        Document {
            id: "1".to_string(),
            doc_type: DocumentType::IdCard,
            title: "ID-kaart".to_string(),
            subtitle: "Isikutunnistus".to_string(),
            valid_until: NaiveDate::from_ymd_opt(2029, 12, 15).unwrap(),
            personal_code: Some("30303039914".to_string()),
            document_number: "AC2002136".to_string(),
            issued_by: "Politsei- ja Piirivalveamet".to_string(),
            gradient: "from-[#d6e6f5] to-[#e8f0f8]".to_string(),
            flag_colors: vec![
                "#0072CE".to_string(),
                "#000000".to_string(),
                "#FFFFFF".to_string(),
            ],
            fields: field_map(&[
                ("PEREKONNANIMI", "VIHRA"),
                ("EESNIMI", "TOM"),
                ("SUGU", "Mees"),
                ("ISIKUKOOD", "30303039914"),
                ("SÜNNIAEG", "03.03.1903"),
                ("KEHTIB KUNI", "16.11.2026"),
                ("DOKUMENDI NUMBER", "AC2002136"),
            ]),
            photo: None,
        },
        Document {
            id: "2".to_string(),
            doc_type: DocumentType::Passport,
            title: "Pass".to_string(),
            subtitle: "Euroopa Liidu pass".to_string(),
            valid_until: NaiveDate::from_ymd_opt(2028, 6, 20).unwrap(),
            personal_code: None,
            document_number: "ES0000000".to_string(),
            issued_by: "Politsei- ja Piirivalveamet".to_string(),
            gradient: "from-[#6b2d7b] to-[#4a1a5e]".to_string(),
            flag_colors: vec![
                "#0072CE".to_string(),
                "#000000".to_string(),
                "#FFFFFF".to_string(),
            ],
            fields: field_map(&[
                ("PEREKONNANIMI", "VIHRA"),
                ("EESNIMI", "TOM"),
                ("PASSI NUMBER", "ES0000000"),
                ("SÜNNIAEG", "03.03.1903"),
                ("SUGU", "Mees"),
                ("KODAKONDSUS", "EST"),
                ("KEHTIB KUNI", "20.06.2028"),
                ("VÄLJASTAJA", "Politsei- ja Piirivalveamet"),
            ]),
            photo: None,
        },
        Document {
            id: "3".to_string(),
            doc_type: DocumentType::DriversLicense,
            title: "Juhiluba".to_string(),
            subtitle: "Kategooria B".to_string(),
            valid_until: NaiveDate::from_ymd_opt(2032, 3, 10).unwrap(),
            personal_code: None,
            document_number: "EE0000000".to_string(),
            issued_by: "Maanteeamet".to_string(),
            gradient: "from-[#f0b8c8] to-[#e8a0b5]".to_string(),
            flag_colors: vec!["#003399".to_string(), "#FFCC00".to_string()],
            fields: field_map(&[
                ("PEREKONNANIMI", "VIHRA"),
                ("EESNIMI", "TOM"),
                ("JUHILOA NUMBER", "EE0000000"),
                ("SÜNNIAEG", "03.03.1903"),
                ("KATEGOORIAD", "B"),
                ("VÄLJASTATUD", "10.03.2022"),
                ("KEHTIB KUNI", "10.03.2032"),
                ("VÄLJASTAJA", "Maanteeamet"),
            ]),
            photo: None,
        },
    ]
});

/// The fixed default document set seeded on first run
pub fn default_documents() -> Vec<Document> {
    DEFAULT_DOCUMENTS.clone()
}
