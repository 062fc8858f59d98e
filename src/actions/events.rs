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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), the debounce timer (ticks), fetch results
//! from the background worker, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: [`handle_event`] updates the [`App`] state, polls the
//!    debouncer, and dispatches fetches to the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error};

use crate::{
    App,
    actions::commands::AppCommand,
    api::FetchOutcome,
    components::QueryDelegate,
    render::draw,
    util::term::Tui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    QueryChanged(String),
    MoviesFetched { seq: u64, outcome: FetchOutcome },

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed. Any query still waiting out the debounce interval is dropped on
/// the way out.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !handle_event(app, event, Instant::now())? {
            break;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    app.debouncer.cancel();

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
pub(crate) fn handle_event(app: &mut App, event: AppEvent, now: Instant) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),

        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            if let Some(query) = app.debouncer.poll(now) {
                dispatch_fetch(app, query)?;
            }
        }

        AppEvent::QueryChanged(query) => app.debouncer.update(query, now),

        AppEvent::MoviesFetched { seq, outcome } => {
            if app.discovery.complete(seq, outcome) {
                let len = app.discovery.state().movies().len();
                app.movie_list.reset(len);
            }
        }

        AppEvent::Error(message) => error!(%message, "background task failed"),
    }

    Ok(true)
}

/// Starts a fetch for a settled query.
pub(crate) fn dispatch_fetch(app: &mut App, query: String) -> Result<()> {
    debug!(%query, "query settled");
    let ticket = app.discovery.begin(query);
    app.command_tx.send(AppCommand::FetchMovies(ticket))?;
    Ok(())
}

/// Routes a key press to the focused component.
///
/// * **Search box**: editing keys change the query; `Tab`, `Down` and `Enter`
///   move to the results.
/// * **Results**: navigation keys move the cursor; `Tab` or `/` returns to the
///   search box; `q` or `Esc` quits.
///
/// `Ctrl-C` quits from anywhere.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.command_tx.send(AppCommand::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::SearchInput => match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.focus = Focus::Results,
            _ => {
                app.search_box.process_event(&event, &app.event_tx);
            }
        },

        Focus::Results => {
            let len = app.discovery.state().movies().len();
            if app.movie_list.process_event(&event, len) {
                return Ok(());
            }

            match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => app.focus = Focus::SearchInput,
                KeyCode::Char('q') | KeyCode::Esc => app.command_tx.send(AppCommand::ExitApplication)?,
                _ => {}
            }
        }
    }

    Ok(())
}

impl QueryDelegate for Sender<AppEvent> {
    fn on_query_changed(&self, query: String) {
        // Only fails once the event loop has gone, nothing left to update
        let _ = self.send(AppEvent::QueryChanged(query));
    }
}
