//! Shell command set and dispatch

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eesti_core::ProfileUpdate;
use eesti_storage::ClipboardPlatform;
use eesti_wallet_service::{ActiveTab, AppScreen, AppShell, AuthMethod};

use crate::clipboard::TerminalClipboard;

/// Interactive shell command line
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct Shell {
    #[command(subcommand)]
    pub command: Command,
}

/// Commands available in the shell
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit the access code
    Unlock {
        /// Access code
        code: String,
    },
    /// Select a login method (smart-id, mobiil-id, id-kaart)
    Select {
        /// Method name
        method: String,
    },
    /// Confirm the simulated login
    Login,
    /// Show the current screen and tab
    Status,
    /// List documents
    Docs,
    /// Open a document by id
    Open {
        /// Document id
        id: String,
    },
    /// Return to the document list
    Back,
    /// Show the open document's fields
    Show,
    /// Toggle sensitive-value visibility
    Reveal,
    /// Start editing the open document
    Edit,
    /// Set a field value while editing
    Set {
        /// Field label
        label: String,
        /// New value
        value: String,
    },
    /// Commit the edit
    Save,
    /// Discard the edit
    Cancel,
    /// Copy a sensitive field value
    Copy {
        /// Field label
        label: String,
    },
    /// Attach a photo file to the open document
    Photo {
        /// Image file path
        path: String,
    },
    /// Open or close the scan-document overlay
    Scan {
        /// Close instead of open
        #[arg(long)]
        close: bool,
    },
    /// List services
    Services,
    /// Add a custom service
    AddService {
        /// Service title
        title: String,
        /// Optional description
        #[arg(default_value = "")]
        description: String,
    },
    /// Remove a service by id
    RemoveService {
        /// Service id
        id: String,
    },
    /// Show the profile
    Profile,
    /// Update a profile field (first-name, last-name, personal-code, birth-date, gender)
    SetProfile {
        /// Field name
        field: String,
        /// New value
        value: String,
    },
    /// Switch the main tab (docs or services)
    Tab {
        /// Tab name
        tab: String,
    },
    /// Log out
    Logout,
    /// Exit the shell
    Quit,
}

fn parse_method(name: &str) -> Option<AuthMethod> {
    match name.to_lowercase().as_str() {
        "smart-id" | "smartid" => Some(AuthMethod::SmartId),
        "mobiil-id" | "mobile-id" | "mobiilid" => Some(AuthMethod::MobileId),
        "id-kaart" | "id-card" | "idkaart" => Some(AuthMethod::IdCard),
        _ => None,
    }
}

fn mime_for(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Outcome of one dispatched command
pub enum Outcome {
    /// Keep reading commands
    Continue,
    /// Exit the shell
    Quit,
}

/// Check whether `command` is allowed on the current screen
///
/// The wallet, services, and profile commands only exist behind both
/// gates; the gate and login commands only on their own screens. Returns
/// the rejection message to print, or `None` when allowed.
fn screen_block(screen: AppScreen, command: &Command) -> Option<&'static str> {
    if matches!(command, Command::Status | Command::Quit) {
        return None;
    }
    match screen {
        AppScreen::Gate => match command {
            Command::Unlock { .. } => None,
            _ => Some("Sisesta kõigepealt juurdepääsukood (unlock <kood>)"),
        },
        AppScreen::Login => match command {
            Command::Select { .. } | Command::Login => None,
            _ => Some("Logi kõigepealt sisse (select <meetod>, login)"),
        },
        AppScreen::Main => match command {
            Command::Unlock { .. } | Command::Select { .. } | Command::Login => {
                Some("Oled juba sisse logitud")
            }
            _ => None,
        },
    }
}

/// Execute one command against the shell
pub async fn dispatch(
    app: &mut AppShell,
    clipboard: &Arc<TerminalClipboard>,
    command: Command,
) -> Result<Outcome> {
    if let Some(message) = screen_block(app.screen(), &command) {
        println!("{message}");
        return Ok(Outcome::Continue);
    }
    match command {
        Command::Unlock { code } => {
            if app.enter_code(&code) {
                println!("Tere tulemast!");
            } else if let Some(message) = app.gate().error() {
                println!("{message}");
            }
        }
        Command::Select { method } => match parse_method(&method) {
            Some(method) => match app.select_method(method) {
                Ok(()) => println!("{} valitud", method.name()),
                Err(err) => println!("{}", err.user_message()),
            },
            None => println!("Tundmatu meetod: {method}"),
        },
        Command::Login => match app.confirm_login().await {
            Ok(()) => println!("Sisse logitud ({})", app.header_name()),
            Err(err) => println!("{}", err.user_message()),
        },
        Command::Status => {
            let screen = match app.screen() {
                AppScreen::Gate => "juurdepääsukood",
                AppScreen::Login => "sisselogimine",
                AppScreen::Main => "põhivaade",
            };
            let tab = match app.tab() {
                ActiveTab::Documents => "Dokumendid",
                ActiveTab::Services => "Teenused",
            };
            println!("{screen} / {tab}");
        }
        Command::Docs => {
            let today = chrono::Local::now().date_naive();
            for doc in app.session().documents() {
                println!(
                    "{}  {}  [{}]  {}",
                    doc.id,
                    doc.title,
                    doc.doc_type.tag(),
                    doc.status_as_of(today).label()
                );
            }
        }
        Command::Open { id } => match app.session_mut().open(&id) {
            Ok(()) => {
                if let Some(doc) = app.session().current() {
                    println!("{} — {}", doc.title, doc.subtitle);
                }
            }
            Err(err) => println!("{}", err.user_message()),
        },
        Command::Back => {
            app.session_mut().back();
        }
        Command::Show => match app.session().field_rows() {
            Ok(rows) => {
                let copied = app.session().copied_field(Instant::now());
                for (label, value) in rows {
                    let marker = if copied.as_deref() == Some(label.as_str()) {
                        "  ✓"
                    } else {
                        ""
                    };
                    println!("{label}: {value}{marker}");
                }
            }
            Err(err) => println!("{}", err.user_message()),
        },
        Command::Reveal => match app.session_mut().toggle_sensitive() {
            Ok(true) => println!("Kuva isikuandmed"),
            Ok(false) => println!("Peida isikuandmed"),
            Err(err) => println!("{}", err.user_message()),
        },
        Command::Edit => {
            if let Err(err) = app.session_mut().begin_edit() {
                println!("{}", err.user_message());
            }
        }
        Command::Set { label, value } => {
            if let Err(err) = app.session_mut().set_field(&label, &value) {
                println!("{}", err.user_message());
            }
        }
        Command::Save => {
            if let Err(err) = app.session_mut().save_edit() {
                println!("{}", err.user_message());
            }
        }
        Command::Cancel => {
            if let Err(err) = app.session_mut().cancel_edit() {
                println!("{}", err.user_message());
            }
        }
        Command::Copy { label } => match app.session_mut().copy_field(&label, Instant::now()) {
            Ok(()) => {
                if let Some(value) = clipboard.paste() {
                    println!("Kopeeritud: {value}");
                }
            }
            Err(err) => println!("{}", err.user_message()),
        },
        Command::Photo { path } => match std::fs::read(&path) {
            Ok(bytes) => {
                let mime = mime_for(&path);
                match app.session_mut().attach_photo(mime, &bytes) {
                    Ok(()) => println!("Foto lisatud"),
                    Err(err) => println!("{}", err.user_message()),
                }
            }
            Err(err) => println!("Faili lugemine ebaõnnestus: {err}"),
        },
        Command::Scan { close } => {
            if close {
                app.session_mut().dismiss_qr();
            } else {
                match app.session_mut().show_qr() {
                    Ok(()) => println!("Skaneeri dokumenti (QR)"),
                    Err(err) => println!("{}", err.user_message()),
                }
            }
        }
        Command::Services => {
            println!("Minu teenused ({})", app.services().count_label());
            for service in app.services().services() {
                let badge = service
                    .badge
                    .as_deref()
                    .map(|b| format!("  [{b}]"))
                    .unwrap_or_default();
                println!(
                    "{}  {} — {}{}",
                    service.id, service.title, service.description, badge
                );
            }
        }
        Command::AddService { title, description } => {
            match app.services_mut().add(&title, &description) {
                Ok(id) => println!("Lisatud: {id}"),
                Err(err) => println!("{}", err.user_message()),
            }
        }
        Command::RemoveService { id } => match app.services_mut().remove(&id) {
            Ok(()) => println!("Eemaldatud"),
            Err(err) => println!("{}", err.user_message()),
        },
        Command::Profile => {
            let profile = app.profiles().profile();
            println!("{}", profile.display_name());
            println!("Isikukood: {}", profile.personal_code);
            println!("Sünniaeg: {}", profile.birth_date);
            println!("Sugu: {}", profile.gender);
        }
        Command::SetProfile { field, value } => {
            let mut update = ProfileUpdate::default();
            match field.as_str() {
                "first-name" => update.first_name = Some(value),
                "last-name" => update.last_name = Some(value),
                "personal-code" => update.personal_code = Some(value),
                "birth-date" => update.birth_date = Some(value),
                "gender" => update.gender = Some(value),
                other => {
                    println!("Tundmatu väli: {other}");
                    return Ok(Outcome::Continue);
                }
            }
            app.profiles_mut().update(update);
            println!("Salvestatud");
        }
        Command::Tab { tab } => match tab.as_str() {
            "docs" | "documents" => app.set_tab(ActiveTab::Documents),
            "services" => app.set_tab(ActiveTab::Services),
            other => println!("Tundmatu vaade: {other}"),
        },
        Command::Logout => {
            app.logout();
            println!("Välja logitud");
        }
        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Continue)
}
