//! Interactive shell for the Eesti app wallet
//!
//! Drives the full application flow from the terminal: access code,
//! simulated login, then the document wallet and services hub. One
//! command per line; `help` lists the commands.

#![forbid(unsafe_code)]

mod clipboard;
mod commands;

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use eesti_storage::{FileStore, LocalStore};
use eesti_wallet_service::{AppScreen, AppShell};
use tracing_subscriber::EnvFilter;

use crate::clipboard::TerminalClipboard;
use crate::commands::{dispatch, Outcome, Shell};

fn prompt_for(app: &AppShell) -> &'static str {
    match app.screen() {
        AppScreen::Gate => "kood> ",
        AppScreen::Login => "login> ",
        AppScreen::Main => "eesti> ",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store: Arc<dyn LocalStore> = Arc::new(FileStore::open_default()?);
    let clipboard = Arc::new(TerminalClipboard::new());
    let mut app = AppShell::new(store, clipboard.clone());

    println!("eesti • riigi äpp");
    println!("Sisesta juurdepääsukood (unlock <kood>), help näitab käske.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        print!("{}", prompt_for(&app));
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let words = match shlex::split(trimmed) {
            Some(words) if !words.is_empty() => words,
            _ => {
                println!("Vigane sisend");
                continue;
            }
        };

        match Shell::try_parse_from(words) {
            Ok(shell) => match dispatch(&mut app, &clipboard, shell.command).await? {
                Outcome::Continue => {}
                Outcome::Quit => break,
            },
            Err(err) => {
                // clap renders help/usage output itself
                print!("{err}");
            }
        }
    }

    Ok(())
}
