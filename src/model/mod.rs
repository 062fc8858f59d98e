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

//! Domain models and core data structures.
//!
//! This module defines the movie entities rendered by the application, and
//! the display state that drives the results area.

pub(crate) mod discovery;

use serde::Deserialize;

/// A single movie as returned by the catalog listing and search endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct MovieSummary {
    pub(crate) id: i64,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) vote_average: f64,
    #[serde(default)]
    pub(crate) poster_path: Option<String>,
    #[serde(default)]
    pub(crate) release_date: Option<String>,
    #[serde(default)]
    pub(crate) original_language: String,
}

#[cfg(test)]
impl MovieSummary {
    pub(crate) fn sample(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            vote_average: 7.5,
            poster_path: Some(format!("/{id}.jpg")),
            release_date: Some("1999-03-31".to_string()),
            original_language: "en".to_string(),
        }
    }
}
