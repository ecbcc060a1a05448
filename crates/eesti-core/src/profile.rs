//! User profile record
//!
//! A flat personal-data record persisted independently of the documents.
//! The profile editor applies no field-level validation: empty strings
//! are accepted, unlike the document name-field guard. That asymmetry is
//! preserved from the original application on purpose.

use serde::{Deserialize, Serialize};

/// User profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Personal identification code
    pub personal_code: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Birth date, free-form display text (DD.MM.YYYY)
    pub birth_date: String,
    /// Gender, free-form display text
    pub gender: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            personal_code: "30303039914".to_string(),
            first_name: "TOM".to_string(),
            last_name: "VIHRA".to_string(),
            birth_date: "03.03.1903".to_string(),
            gender: "Mees".to_string(),
        }
    }
}

impl UserProfile {
    /// Display name, "FIRST LAST"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merge a partial update into this record
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(v) = update.personal_code {
            self.personal_code = v;
        }
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.birth_date {
            self.birth_date = v;
        }
        if let Some(v) = update.gender {
            self.gender = v;
        }
    }
}

/// Partial profile update (unset fields keep their current value)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New personal code
    pub personal_code: Option<String>,
    /// New first name
    pub first_name: Option<String>,
    /// New last name
    pub last_name: Option<String>,
    /// New birth date
    pub birth_date: Option<String>,
    /// New gender
    pub gender: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let p = UserProfile::default();
        assert_eq!(p.personal_code, "30303039914");
        assert_eq!(p.display_name(), "TOM VIHRA");
    }

    #[test]
    fn test_partial_update() {
        let mut p = UserProfile::default();
        p.apply(ProfileUpdate {
            first_name: Some("MARI".to_string()),
            last_name: Some("MAASIKAS".to_string()),
            ..Default::default()
        });
        assert_eq!(p.display_name(), "MARI MAASIKAS");
        assert_eq!(p.birth_date, "03.03.1903");
    }

    #[test]
    fn test_empty_strings_accepted() {
        // no guard here, unlike document name fields
        let mut p = UserProfile::default();
        p.apply(ProfileUpdate {
            first_name: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(p.first_name, "");
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(json["personalCode"], "30303039914");
        assert_eq!(json["firstName"], "TOM");
        assert_eq!(json["birthDate"], "03.03.1903");
    }
}
