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

//! Render the search box, its placeholder, and the text cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::Span,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{SearchBox, search_box::PLACEHOLDER},
    theme::Theme,
};

impl SearchBox {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_colour = if focused { theme.focus_border_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(Span::from(" Search ").bold().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        let width = usize::from(inner.width.max(1));
        let scroll = self.input.visual_scroll(width);

        let paragraph = if self.input.value().is_empty() {
            Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_fg)))
        } else {
            Paragraph::new(self.input.value()).scroll((0, scroll as u16))
        };

        f.render_widget(paragraph.block(block), area);

        if focused {
            let x = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + x, inner.y));
        }
    }
}
