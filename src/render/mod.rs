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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod header;
pub(crate) mod icons;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    actions::events::Focus,
    components::MovieListContext,
    render::{header::draw_header, status::draw_status},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the title header, the search box,
/// the results area and a one-line status bar.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], &app.theme);

    app.search_box.draw(f, outer[1], &app.theme, app.focus == Focus::SearchInput);

    let ctx = MovieListContext {
        state: app.discovery.state(),
        image_base_url: &app.config.image_base_url,
        spinner_frame: app.spinner_frame,
        focused: app.focus == Focus::Results,
    };
    app.movie_list.draw(f, outer[2], &ctx, &app.theme);

    draw_status(f, outer[3], app);
}
