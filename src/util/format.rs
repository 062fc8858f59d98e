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

//! Conversion of movie fields into the short strings shown on result cards.

const NOT_AVAILABLE: &str = "N/A";

pub(crate) const NO_POSTER: &str = "no poster";

/// Formats an average rating to one decimal place, or `N/A` for unrated
/// movies.
///
/// ```ignore
/// assert_eq!(format_rating(7.456), "7.5");
/// assert_eq!(format_rating(0.0), "N/A");
/// ```
pub(crate) fn format_rating(vote_average: f64) -> String {
    if vote_average > 0.0 {
        format!("{:.1}", vote_average)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Extracts the year from an ISO `YYYY-MM-DD` release date.
pub(crate) fn release_year(release_date: Option<&str>) -> &str {
    match release_date {
        Some(date) if date.len() >= 4 && date.is_char_boundary(4) => &date[..4],
        _ => NOT_AVAILABLE,
    }
}

pub(crate) fn language_code(original_language: &str) -> String {
    if original_language.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        original_language.to_uppercase()
    }
}

/// Builds the poster image URL, or `None` when the movie has no poster.
pub(crate) fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", image_base_url.trim_end_matches('/'), p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_has_one_decimal_place() {
        assert_eq!(format_rating(7.456), "7.5");
        assert_eq!(format_rating(10.0), "10.0");
        assert_eq!(format_rating(0.0), "N/A");
    }

    #[test]
    fn year_comes_from_date_prefix() {
        assert_eq!(release_year(Some("2010-07-15")), "2010");
        assert_eq!(release_year(Some("")), "N/A");
        assert_eq!(release_year(None), "N/A");
    }

    #[test]
    fn language_is_upper_cased() {
        assert_eq!(language_code("fr"), "FR");
        assert_eq!(language_code(""), "N/A");
    }

    #[test]
    fn poster_url_joins_image_base() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500/", Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(poster_url("https://image.tmdb.org/t/p/w500", None), None);
        assert_eq!(poster_url("https://image.tmdb.org/t/p/w500", Some("")), None);
    }
}
