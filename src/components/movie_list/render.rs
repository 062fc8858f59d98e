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

//! UI rendering logic for the movie list.
//!
//! Draws exactly one of the three display states: a spinner while loading, the
//! error message, or the table of movie cards.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table, Wrap},
};

use crate::{
    components::MovieList,
    model::{MovieSummary, discovery::DisplayState},
    render::icons::{ICON_STAR, SPINNER_FRAMES},
    theme::Theme,
    util::format::{NO_POSTER, format_rating, language_code, poster_url, release_year},
};

/// Per-frame inputs for drawing the list.
pub(crate) struct MovieListContext<'a> {
    pub(crate) state: &'a DisplayState,
    pub(crate) image_base_url: &'a str,
    pub(crate) spinner_frame: usize,
    pub(crate) focused: bool,
}

impl MovieList {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &MovieListContext<'_>, theme: &Theme) {
        let border_colour = if ctx.focused { theme.focus_border_colour } else { theme.border_colour };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(Span::from(" All Movies ").bold().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));

        match ctx.state {
            DisplayState::Loading => {
                let frame = SPINNER_FRAMES[ctx.spinner_frame % SPINNER_FRAMES.len()];
                let spinner = Paragraph::new(Line::from(vec![
                    Span::styled(frame, Style::default().fg(theme.accent_colour)),
                    Span::raw(" Loading movies..."),
                ]))
                .alignment(Alignment::Center)
                .block(block);
                f.render_widget(spinner, area);
            }
            DisplayState::Error(message) => {
                let error = Paragraph::new(message.as_str())
                    .style(Style::default().fg(theme.error_fg))
                    .wrap(Wrap { trim: true })
                    .block(block);
                f.render_widget(error, area);
            }
            DisplayState::Results(movies) if movies.is_empty() => {
                let empty = Paragraph::new("No movies found")
                    .style(Style::default().fg(theme.muted_fg))
                    .alignment(Alignment::Center)
                    .block(block);
                f.render_widget(empty, area);
            }
            DisplayState::Results(movies) => self.draw_cards(f, area, block, movies, ctx.image_base_url, theme),
        }
    }

    fn draw_cards(
        &mut self,
        f: &mut Frame,
        area: Rect,
        block: Block<'_>,
        movies: &[MovieSummary],
        image_base_url: &str,
        theme: &Theme,
    ) {
        let rows = movies.iter().map(|movie| {
            let poster = poster_url(image_base_url, movie.poster_path.as_deref());
            let poster = match poster {
                Some(url) => Line::from(url).style(Style::default().fg(theme.card_poster_fg)),
                None => Line::from(NO_POSTER).style(Style::default().fg(theme.card_poster_fg).italic()),
            };

            Row::new(vec![
                Cell::from(Line::from(movie.title.as_str()).style(Style::default().fg(theme.card_title_fg).bold())),
                Cell::from(Line::from(vec![
                    Span::styled(ICON_STAR, Style::default().fg(theme.card_rating_fg)),
                    Span::raw(" "),
                    Span::styled(format_rating(movie.vote_average), Style::default().fg(theme.card_rating_fg)),
                ])),
                Cell::from(Line::from(release_year(movie.release_date.as_deref())).style(Style::default().fg(theme.card_year_fg))),
                Cell::from(Line::from(language_code(&movie.original_language)).style(Style::default().fg(theme.card_language_fg))),
                Cell::from(poster),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Length(8),
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Min(0),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Rating"),
                Cell::from("Year"),
                Cell::from("Lang"),
                Cell::from("Poster"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(state: &DisplayState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        let mut list = MovieList::new();
        list.reset(state.movies().len());

        terminal
            .draw(|f| {
                let area = f.area();
                let ctx = MovieListContext {
                    state,
                    image_base_url: "https://img",
                    spinner_frame: 0,
                    focused: true,
                };
                list.draw(f, area, &ctx, &Theme::default());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn loading_shows_spinner() {
        assert!(render(&DisplayState::Loading).contains("Loading movies..."));
    }

    #[test]
    fn error_shows_message() {
        let text = render(&DisplayState::Error("Failed to fetch movies".to_string()));

        assert!(text.contains("Failed to fetch movies"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn results_show_cards_with_placeholder_poster() {
        let mut movie = MovieSummary::sample(1, "Heat");
        movie.poster_path = None;

        let text = render(&DisplayState::Results(vec![movie]));

        assert!(text.contains("Heat"));
        assert!(text.contains("7.5"));
        assert!(text.contains("1999"));
        assert!(text.contains("EN"));
        assert!(text.contains(NO_POSTER));
    }
}
