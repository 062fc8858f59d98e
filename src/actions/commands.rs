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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to keep network requests
//! off the main UI thread. A dedicated worker loop receives [`AppCommand`]s
//! and broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Each fetch runs on its own thread so a slow response never holds up a newer
//! one. A fetch that has been superseded is simply left to finish, its result
//! is ignored by the UI.

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use anyhow::Result;
use tracing::{debug, error, info_span};

use crate::{
    actions::events::AppEvent,
    api::MovieSource,
    model::discovery::FetchTicket,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    FetchMovies(FetchTicket),
    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// # Arguments
///
/// * `source` - The movie catalog used to answer fetches.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    source: Arc<dyn MovieSource>,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            if let Err(e) = handle_command(&source, command, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
        debug!("command channel closed, worker exiting");
    })
}

fn handle_command(
    source: &Arc<dyn MovieSource>,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::FetchMovies(ticket) => {
            let source = Arc::clone(source);
            let event_tx = event_tx.clone();
            thread::spawn(move || {
                if let Err(e) = run_fetch(source.as_ref(), ticket, &event_tx) {
                    error!(error = %e, "failed to deliver fetch result");
                }
            });
        }
        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

/// Performs one catalog request and posts the outcome back to the UI.
fn run_fetch(source: &dyn MovieSource, ticket: FetchTicket, event_tx: &Sender<AppEvent>) -> Result<()> {
    let _span = info_span!("fetch", seq = ticket.seq).entered();

    let outcome = source.fetch(&ticket.request);
    debug!(ok = outcome.is_ok(), "fetch finished");

    event_tx.send(AppEvent::MoviesFetched {
        seq: ticket.seq,
        outcome,
    })?;

    Ok(())
}
