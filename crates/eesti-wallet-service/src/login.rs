//! Simulated national-authentication login
//!
//! The second gate: pick one of a fixed set of authentication methods
//! and confirm. Confirmation waits a fixed artificial delay and then
//! unconditionally marks the flow authenticated; no verification of any
//! kind happens.

use std::time::Duration;

use eesti_core::{Error, Result};

/// Fixed artificial delay before the simulated login completes
pub const LOGIN_DELAY_MS: u64 = 2000;

/// Authentication method option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Smart-ID (recommended)
    SmartId,
    /// Mobiil-ID
    MobileId,
    /// ID-kaart (not yet available)
    IdCard,
}

impl AuthMethod {
    /// All methods, in display order
    pub fn all() -> &'static [AuthMethod] {
        &[AuthMethod::SmartId, AuthMethod::MobileId, AuthMethod::IdCard]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            AuthMethod::SmartId => "Smart-ID",
            AuthMethod::MobileId => "Mobiil-ID",
            AuthMethod::IdCard => "ID-kaart",
        }
    }

    /// Estonian description line
    pub fn description(&self) -> &'static str {
        match self {
            AuthMethod::SmartId => "Logi sisse nutitelefoniga",
            AuthMethod::MobileId => "Logi sisse SIM-kaardiga",
            AuthMethod::IdCard => "Logi sisse ID-kaardiga",
        }
    }

    /// Whether the method can currently be selected
    pub fn is_available(&self) -> bool {
        !matches!(self, AuthMethod::IdCard)
    }

    /// Badge text shown next to the method, if any
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            AuthMethod::SmartId => Some("Soovitatav"),
            AuthMethod::IdCard => Some("Peagi"),
            AuthMethod::MobileId => None,
        }
    }
}

/// Method-selection login flow
#[derive(Debug, Default)]
pub struct LoginFlow {
    selected: Option<AuthMethod>,
    authenticated: bool,
}

impl LoginFlow {
    /// Create a fresh, unauthenticated flow
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an authentication method
    pub fn select(&mut self, method: AuthMethod) -> Result<()> {
        if !method.is_available() {
            return Err(Error::FlowState(format!(
                "method {} is not available",
                method.name()
            )));
        }
        self.selected = Some(method);
        Ok(())
    }

    /// Currently selected method
    pub fn selected(&self) -> Option<AuthMethod> {
        self.selected
    }

    /// Confirm the selection and complete the simulated login
    ///
    /// Waits the fixed artificial delay, then unconditionally marks the
    /// flow authenticated.
    pub async fn confirm(&mut self) -> Result<()> {
        let method = self
            .selected
            .ok_or_else(|| Error::FlowState("no authentication method selected".to_string()))?;

        tokio::time::sleep(Duration::from_millis(LOGIN_DELAY_MS)).await;
        self.authenticated = true;
        tracing::info!(method = method.name(), "simulated login complete");
        Ok(())
    }

    /// Whether the flow has completed
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Reset to the unauthenticated state (logout)
    pub fn reset(&mut self) {
        self.selected = None;
        self.authenticated = false;
    }
}
