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

//! Terminal session lifecycle.
//!
//! Entering and leaving the alternate screen, raw mode, and painting the
//! emulator background through OSC escape sequences (OSC 11 to set, OSC 111 to
//! reset). Most modern emulators (XTerm, iTerm2, Alacritty, Kitty) honour
//! these.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

fn set_terminal_bg(hex_colour: &str) {
    print!("\x1b]11;{}\x07", hex_colour);
    io::stdout().flush().ok();
}

fn reset_terminal_bg() {
    print!("\x1b]111\x07");
    io::stdout().flush().ok();
}

/// Puts the terminal into raw mode on the alternate screen, painted with
/// `background_hex` when given.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
pub(crate) fn setup_terminal(background_hex: Option<&str>) -> Result<Tui> {
    // Without this the emulator's own background shows as a thin outline
    if let Some(hex) = background_hex {
        set_terminal_bg(hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Best-effort reversal of [`setup_terminal`].
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Makes sure a panic on the UI thread does not leave the terminal in raw
/// mode with the message hidden on the alternate screen.
pub(crate) fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
        reset_terminal_bg();
        default_hook(info);
    }));
}
