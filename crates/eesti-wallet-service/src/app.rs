//! Application shell
//!
//! Composes the two gates and the main view: access code, then the
//! simulated login, then a tab switch between the document wallet and
//! the services hub. Logout returns to the login screen and resets the
//! active tab.

use std::sync::Arc;

use eesti_core::Result;
use eesti_storage::{ClipboardPlatform, DocumentStore, LocalStore, ProfileStore};

use crate::gate::AccessGate;
use crate::login::{AuthMethod, LoginFlow};
use crate::services::ServicesHub;
use crate::session::WalletSession;

/// Main-view tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Document wallet
    #[default]
    Documents,
    /// Services hub
    Services,
}

/// Top-level screen, derived from gate and login state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    /// Access-code entry
    Gate,
    /// Method-selection login
    Login,
    /// Authenticated main view
    Main,
}

/// The application shell
pub struct AppShell {
    gate: AccessGate,
    login: LoginFlow,
    session: WalletSession,
    services: ServicesHub,
    profiles: ProfileStore,
    tab: ActiveTab,
}

impl AppShell {
    /// Build the shell over a local store and a clipboard platform
    pub fn new(store: Arc<dyn LocalStore>, clipboard: Arc<dyn ClipboardPlatform>) -> Self {
        let documents = DocumentStore::open(store.clone());
        let profiles = ProfileStore::open(store);
        Self {
            gate: AccessGate::new(),
            login: LoginFlow::new(),
            session: WalletSession::new(documents, clipboard),
            services: ServicesHub::new(),
            profiles,
            tab: ActiveTab::default(),
        }
    }

    /// Which top-level screen to show
    pub fn screen(&self) -> AppScreen {
        if !self.gate.is_unlocked() {
            AppScreen::Gate
        } else if !self.login.is_authenticated() {
            AppScreen::Login
        } else {
            AppScreen::Main
        }
    }

    /// Submit the access code
    pub fn enter_code(&mut self, code: &str) -> bool {
        self.gate.submit(code)
    }

    /// Gate state (for the error message)
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Select a login method
    pub fn select_method(&mut self, method: AuthMethod) -> Result<()> {
        self.login.select(method)
    }

    /// Confirm the simulated login
    pub async fn confirm_login(&mut self) -> Result<()> {
        self.login.confirm().await
    }

    /// Login flow state
    pub fn login(&self) -> &LoginFlow {
        &self.login
    }

    /// Active main-view tab
    pub fn tab(&self) -> ActiveTab {
        self.tab
    }

    /// Switch the main-view tab
    pub fn set_tab(&mut self, tab: ActiveTab) {
        self.tab = tab;
    }

    /// Header display name from the profile
    pub fn header_name(&self) -> String {
        self.profiles.profile().display_name()
    }

    /// Wallet session
    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Wallet session, mutable
    pub fn session_mut(&mut self) -> &mut WalletSession {
        &mut self.session
    }

    /// Services hub
    pub fn services(&self) -> &ServicesHub {
        &self.services
    }

    /// Services hub, mutable
    pub fn services_mut(&mut self) -> &mut ServicesHub {
        &mut self.services
    }

    /// Profile store
    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    /// Profile store, mutable
    pub fn profiles_mut(&mut self) -> &mut ProfileStore {
        &mut self.profiles
    }

    /// Log out: back to the login screen, tab reset to documents
    ///
    /// The access gate stays open; only the simulated login resets. Any
    /// copied sensitive value is cleared from the clipboard.
    pub fn logout(&mut self) {
        self.login.reset();
        self.tab = ActiveTab::Documents;
        self.session.back();
        self.session.clear_clipboard();
    }
}
