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

//! Input handling for the search box.
//!
//! Editing keys are delegated to the managed `tui_input` component; `Esc`
//! clears the query.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{QueryDelegate, SearchBox};

impl SearchBox {
    /// Applies a key event to the query, notifying `delegate` if the text
    /// changed. Returns `true` if the event was consumed.
    pub(crate) fn process_event(&mut self, event: &Event, delegate: &impl QueryDelegate) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if key_event.code == KeyCode::Esc {
            if !self.input.value().is_empty() {
                self.input.reset();
                delegate.on_query_changed(String::new());
            }
            return true;
        }

        let before = self.input.value().to_string();
        let handled = self.input.handle_event(event).is_some();

        if self.input.value() != before {
            delegate.on_query_changed(self.input.value().to_string());
        }

        handled
    }
}
