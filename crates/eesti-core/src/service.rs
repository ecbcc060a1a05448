//! E-services catalog
//!
//! Mock government services shown in the services hub. The catalog is
//! seeded with six defaults and supports add/remove only; services are
//! never persisted.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Service status tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Active, shown green
    Active,
    /// Needs attention, shown orange
    Attention,
    /// No highlight
    #[default]
    Normal,
}

/// Sub-item of a service (title/value/status row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    /// Row title
    pub title: String,
    /// Row value text
    pub value: String,
    /// Optional status tag (defaults to normal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
}

impl ServiceItem {
    fn new(title: &str, value: &str, status: ServiceStatus) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            status: Some(status),
        }
    }
}

/// A service card in the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Icon name
    #[serde(rename = "iconName")]
    pub icon: String,
    /// Optional badge text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Optional unread-notification count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<u32>,
    /// Status tag
    pub status: ServiceStatus,
    /// Optional sub-item rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ServiceItem>>,
}

impl Service {
    /// Create a user-added service with a fresh `custom-` identifier
    ///
    /// A blank description falls back to the fixed placeholder text.
    pub fn custom(title: &str, description: &str) -> Self {
        let description = if description.trim().is_empty() {
            "Kohandatud teenus".to_string()
        } else {
            description.trim().to_string()
        };
        Self {
            id: format!("custom-{}", Uuid::new_v4()),
            title: title.trim().to_string(),
            description,
            icon: "Heart".to_string(),
            badge: None,
            notifications: None,
            status: ServiceStatus::Normal,
            items: None,
        }
    }
}

/// Estonian count label: "1 teenus", "N teenust"
pub fn service_count_label(count: usize) -> String {
    if count == 1 {
        "1 teenus".to_string()
    } else {
        format!("{count} teenust")
    }
}

static DEFAULT_SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        Service {
            id: "prescriptions".to_string(),
            title: "Retseptid".to_string(),
            description: "Aktiivsed ja kasutatud retseptid".to_string(),
            icon: "Pill".to_string(),
            badge: Some("3 aktiivset".to_string()),
            notifications: Some(1),
            status: ServiceStatus::Active,
            items: Some(vec![
                ServiceItem::new("Paratsetamool 500mg", "2 tabletti päevas", ServiceStatus::Active),
                ServiceItem::new("Vitamiin D3", "1 kapsel päevas", ServiceStatus::Active),
                ServiceItem::new("Omega-3", "Uuendamist vajab", ServiceStatus::Attention),
            ]),
        },
        Service {
            id: "children".to_string(),
            title: "Lapsed".to_string(),
            description: "Laste andmed ja teenused".to_string(),
            icon: "Baby".to_string(),
            badge: Some("1 laps".to_string()),
            notifications: None,
            status: ServiceStatus::Normal,
            items: Some(vec![
                ServiceItem::new("Anna Maasikas", "15 aastat", ServiceStatus::Normal),
                ServiceItem::new("Kool", "Tallinna Reaalgümnaasium", ServiceStatus::Normal),
                ServiceItem::new("Tervisekontroll", "Järgmine: 15.02.2025", ServiceStatus::Normal),
            ]),
        },
        Service {
            id: "vehicles".to_string(),
            title: "Sõidukid".to_string(),
            description: "Registreeritud sõidukid ja kindlustus".to_string(),
            icon: "Car".to_string(),
            badge: Some("2 sõidukit".to_string()),
            notifications: Some(1),
            status: ServiceStatus::Attention,
            items: Some(vec![
                ServiceItem::new("Toyota Corolla 2020", "ABC123", ServiceStatus::Normal),
                ServiceItem::new("Liikluskindlustus", "Aegub 20.02.2025", ServiceStatus::Attention),
            ]),
        },
        Service {
            id: "insurance".to_string(),
            title: "Kindlustused".to_string(),
            description: "Tervis- ja liikluskindlustus".to_string(),
            icon: "Shield".to_string(),
            badge: None,
            notifications: None,
            status: ServiceStatus::Normal,
            items: Some(vec![
                ServiceItem::new("Tervisekindlustus", "Aktiivne", ServiceStatus::Active),
                ServiceItem::new("Hambaravi hüvitis", "120€ aastas", ServiceStatus::Normal),
            ]),
        },
        Service {
            id: "benefits".to_string(),
            title: "Toetused".to_string(),
            description: "Aktiivsed toetused ja hüvitised".to_string(),
            icon: "Wallet".to_string(),
            badge: Some("Uus avaldus".to_string()),
            notifications: Some(1),
            status: ServiceStatus::Active,
            items: Some(vec![
                ServiceItem::new("Lapsetoetus", "80€/kuu", ServiceStatus::Active),
                ServiceItem::new("Eluasemetoetus", "Läbivaatamisel", ServiceStatus::Attention),
            ]),
        },
        Service {
            id: "documents".to_string(),
            title: "Dokumendid".to_string(),
            description: "Ametlikud tõendid ja avaldused".to_string(),
            icon: "FileText".to_string(),
            badge: None,
            notifications: None,
            status: ServiceStatus::Normal,
            items: Some(vec![
                ServiceItem::new("Töötõend", "Väljastatud 10.01.2025", ServiceStatus::Normal),
                ServiceItem::new("Sissetulekutõend", "Väljastatud 05.01.2025", ServiceStatus::Normal),
            ]),
        },
    ]
});

/// The default service catalog
pub fn default_services() -> Vec<Service> {
    DEFAULT_SERVICES.clone()
}
