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

//! Movie results list and keyboard navigation.
//!
//! The list does not own the movies, they live in the
//! [`DisplayState`](crate::model::discovery::DisplayState). It keeps only the
//! table cursor, and is told the number of rows whenever it navigates.

mod event;
mod render;

pub(crate) use render::MovieListContext;

use ratatui::widgets::TableState;

#[derive(Debug, Default)]
pub(crate) struct MovieList {
    table_state: TableState,
}

impl MovieList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor back to the top of a freshly loaded list.
    pub(crate) fn reset(&mut self, len: usize) {
        self.table_state.select(if len == 0 { None } else { Some(0) });
        *self.table_state.offset_mut() = 0;
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }
}
