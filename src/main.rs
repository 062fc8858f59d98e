// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Movie Discovery TUI.
//!
//! A terminal front end for browsing and searching The Movie Database.
//!
//! The user types into a search box; once typing pauses for the debounce
//! interval the query is sent to the catalog, and the results area shows a
//! spinner, an error message, or a table of movie cards. With an empty query
//! the most popular movies are listed.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * A **Command Worker** performs catalog requests off the UI thread.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state and the debounce timer.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod api;
mod components;
mod config;
mod debounce;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use std::{
    path::PathBuf,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::{
    actions::{
        commands::{AppCommand, spawn_command_worker},
        events::{AppEvent, Focus, dispatch_fetch, process_events},
    },
    api::{MovieSource, tmdb::TmdbClient},
    components::{MovieList, SearchBox},
    config::AppConfig,
    debounce::Debouncer,
    model::discovery::Discovery,
    theme::Theme,
    util::term::{self, Tui},
};

/// Period of the UI tick, which bounds how late a settled query is noticed.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub search_box: SearchBox,
    pub movie_list: MovieList,

    pub debouncer: Debouncer<String>,
    pub discovery: Discovery,

    pub spinner_frame: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let debouncer = Debouncer::new(String::new(), config.debounce_interval());

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::SearchInput,
            event_tx,
            event_rx,
            command_tx,
            search_box: SearchBox::new(),
            movie_list: MovieList::new(),
            debouncer,
            discovery: Discovery::new(),
            spinner_frame: 0,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, builds the catalog client, then
/// manages the terminal lifecycle around the event loop. Startup failures such
/// as a missing API key are reported before the terminal is touched.
fn main() -> Result<()> {
    let config_path = config::config_path()?;
    let config = config::load_config_from(&config_path)?;

    let log_dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let _log_guard = logging::init_logging(&log_dir, &config.log_level)?;
    info!(version = env!("CARGO_PKG_VERSION"), config = %config_path.display(), "starting");

    let settings = config.tmdb_settings(std::env::var(config::API_KEY_ENV).ok())?;
    let source: Arc<dyn MovieSource> =
        Arc::new(TmdbClient::new(settings).context("Failed to create HTTP client")?);

    let (command_tx, command_rx) = mpsc::channel();
    let mut app = App::new(config, command_tx);

    term::install_panic_hook();
    let background = Theme::to_hex(app.theme.background_colour);
    let mut terminal = term::setup_terminal(background.as_deref())?;
    let res = run(&mut terminal, &mut app, source, command_rx);
    term::restore_terminal(&mut terminal);

    info!("exiting");
    res.context("Application error occurred")
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to perform catalog requests.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to drive the debounce timer and the loading spinner.
///
/// Popular movies are requested straight away, then control passes to
/// [`process_events`] until the user quits.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Tui,
    app: &mut App,
    source: Arc<dyn MovieSource>,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    spawn_command_worker(source, command_rx, app.event_tx.clone());

    // Translate raw key presses to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // The empty query is settled from the start, so the first listing does
    // not wait for the debounce interval.
    dispatch_fetch(app, String::new())?;

    process_events(terminal, app)
}
