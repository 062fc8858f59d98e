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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and the
//! hexadecimal strings used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) card_title_fg: Color,
    pub(crate) card_rating_fg: Color,
    pub(crate) card_year_fg: Color,
    pub(crate) card_language_fg: Color,
    pub(crate) card_poster_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(3, 0, 20),
            accent_colour: Color::Rgb(171, 139, 255),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(211, 192, 255),
            muted_fg: Color::Rgb(162, 161, 166),
            error_fg: Color::Rgb(239, 68, 68),

            card_title_fg: Color::Rgb(255, 255, 255),
            card_rating_fg: Color::Rgb(255, 215, 0),
            card_year_fg: Color::Rgb(162, 161, 166),
            card_language_fg: Color::Rgb(179, 157, 219),
            card_poster_fg: Color::Rgb(110, 110, 130),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, or `None` if the colour is not an `Rgb` variant.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
