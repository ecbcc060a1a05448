//! Eesti app flows
//!
//! The application layer over the domain core and the local stores: the
//! access gate, the simulated national login, the wallet session state
//! machine, the services hub, and the shell that composes them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod app;
pub mod gate;
pub mod login;
pub mod services;
pub mod session;

pub use app::{ActiveTab, AppScreen, AppShell};
pub use gate::{AccessGate, ACCESS_CODE_HEX};
pub use login::{AuthMethod, LoginFlow, LOGIN_DELAY_MS};
pub use services::ServicesHub;
pub use session::{DetailMode, Screen, WalletSession};
