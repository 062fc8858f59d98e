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

//! Search query input.
//!
//! The search box owns the text being edited and nothing else. Every edit is
//! reported through a [`QueryDelegate`], which is the only way the rest of the
//! application learns about the query.

mod event;
mod render;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Search through thousands of movies";

pub(crate) trait QueryDelegate {
    fn on_query_changed(&self, query: String);
}

#[derive(Debug, Default)]
pub(crate) struct SearchBox {
    input: Input,
}

impl SearchBox {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }
}
