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

//! Render the application title and tagline.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{render::icons::ICON_SEARCH, theme::Theme};

const TITLE: &str = "Get Movie Info";
const TAGLINE: &str = "You'll Enjoy Without the Hassle";

pub(crate) fn draw_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{ICON_SEARCH} "), Style::default().fg(theme.accent_colour)),
            Span::styled(TITLE, bold.fg(theme.card_title_fg)),
        ]),
        Line::from(vec![
            Span::styled("Movies ", bold.fg(theme.accent_colour)),
            Span::styled(TAGLINE, Style::default().fg(theme.muted_fg)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
