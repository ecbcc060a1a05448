//! Services hub
//!
//! The grid of mock government e-services. Seeded with the default
//! catalog; the user can add custom services and remove any. Never
//! persisted, by design.

use eesti_core::{default_services, service_count_label, Error, Result, Service};

/// In-memory services catalog
pub struct ServicesHub {
    services: Vec<Service>,
}

impl Default for ServicesHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ServicesHub {
    /// Create a hub with the default catalog
    pub fn new() -> Self {
        Self {
            services: default_services(),
        }
    }

    /// All services in display order
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Estonian count label for the header badge
    pub fn count_label(&self) -> String {
        service_count_label(self.services.len())
    }

    /// Add a custom service; the title must not be blank
    ///
    /// Returns the id of the new service.
    pub fn add(&mut self, title: &str, description: &str) -> Result<String> {
        if title.trim().is_empty() {
            return Err(Error::Validation("service title must not be blank".to_string()));
        }
        let service = Service::custom(title, description);
        let id = service.id.clone();
        self.services.push(service);
        Ok(id)
    }

    /// Remove a service by id
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.services.len();
        self.services.retain(|s| s.id != id);
        if self.services.len() == before {
            return Err(Error::ServiceNotFound(id.to_string()));
        }
        Ok(())
    }
}
