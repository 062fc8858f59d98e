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

//! Render the status bar: what the results area is showing, and key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, actions::events::Focus};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(44)])
        .split(area);

    let muted = Style::default().fg(app.theme.muted_fg);
    let accent = Style::default().fg(app.theme.accent_colour);

    let subject = match app.discovery.query() {
        "" => "popular movies".to_string(),
        query => format!("\"{query}\""),
    };

    let state = app.discovery.state();
    let summary = if app.debouncer.is_pending() {
        "typing...".to_string()
    } else if state.is_loading() {
        format!("searching {subject}")
    } else if state.error_message().is_some() {
        format!("failed to load {subject}")
    } else {
        let count = state.movies().len();
        match app.movie_list.selected() {
            Some(i) if app.focus == Focus::Results => format!("{} of {count} for {subject}", i + 1),
            _ => format!("{count} results for {subject}"),
        }
    };

    f.render_widget(Paragraph::new(Line::from(Span::styled(format!(" {summary}"), muted))), chunks[0]);

    let hints = match app.focus {
        Focus::SearchInput => "Tab results  Esc clear  ^C quit ",
        Focus::Results => "j/k move  / search  q quit ",
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, accent))).alignment(Alignment::Right),
        chunks[1],
    );
}
