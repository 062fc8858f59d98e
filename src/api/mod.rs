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

//! Movie catalog API access.
//!
//! This module describes the two catalog requests the application makes, the
//! response payload they return, and the [`MovieSource`] seam through which
//! the command worker performs them. [`tmdb`] provides the HTTP
//! implementation.

pub(crate) mod tmdb;

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use thiserror::Error;

use crate::model::MovieSummary;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

pub(crate) const FAILED_TO_FETCH: &str = "Failed to fetch movies";
pub(crate) const UNEXPECTED_FAILURE: &str = "Error fetching movies, please try again later.";

// Characters left intact by JavaScript's `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Connection settings for the movie catalog.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TmdbSettings {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Option<Duration>,
}

impl TmdbSettings {
    pub(crate) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub(crate) fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub(crate) fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A catalog request derived from a settled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MovieRequest {
    /// Popular movies, used when the query is empty.
    Discover,
    Search(String),
}

impl MovieRequest {
    pub(crate) fn for_query(query: &str) -> Self {
        if query.is_empty() {
            Self::Discover
        } else {
            Self::Search(query.to_string())
        }
    }

    /// Builds the full request URL against `base_url`.
    pub(crate) fn url(&self, base_url: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        match self {
            Self::Discover => format!("{base_url}/discover/movie?sort_by=popularity.desc"),
            Self::Search(query) => format!(
                "{base_url}/search/movie?query={}",
                utf8_percent_encode(query, QUERY_COMPONENT)
            ),
        }
    }
}

/// Response body of the listing and search endpoints.
///
/// Besides the `results` list, a failed lookup may be reported in-band with
/// `"Response": "False"` and an `"Error"` message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct MoviePage {
    #[serde(default)]
    pub(crate) results: Option<Vec<MovieSummary>>,
    #[serde(rename = "Response", default)]
    pub(crate) response: Option<String>,
    #[serde(rename = "Error", default)]
    pub(crate) error: Option<String>,
}

impl MoviePage {
    pub(crate) fn is_rejected(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The message shown in the results area for this failure.
    pub(crate) fn user_message(&self) -> &'static str {
        match self {
            Self::Status(_) => FAILED_TO_FETCH,
            Self::Http(_) | Self::Decode(_) => UNEXPECTED_FAILURE,
        }
    }
}

pub(crate) type FetchOutcome = Result<MoviePage, FetchError>;

/// Something that can answer catalog requests.
pub(crate) trait MovieSource: Send + Sync {
    fn fetch(&self, request: &MovieRequest) -> FetchOutcome;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_discovers_popular_movies() {
        let request = MovieRequest::for_query("");

        assert_eq!(request, MovieRequest::Discover);
        assert_eq!(
            request.url(DEFAULT_BASE_URL),
            "https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc"
        );
    }

    #[test]
    fn search_query_is_percent_encoded() {
        let request = MovieRequest::for_query("Amélie & the 100% (Fun!) ~ride*?/#");

        assert_eq!(
            request.url("http://localhost:8080/3/"),
            "http://localhost:8080/3/search/movie?query=Am%C3%A9lie%20%26%20the%20100%25%20(Fun!)%20~ride*%3F%2F%23"
        );
    }

    #[test]
    fn whitespace_query_is_still_a_search() {
        assert_eq!(MovieRequest::for_query(" "), MovieRequest::Search(" ".to_string()));
    }

    #[test]
    fn rejected_payload_is_detected() {
        let page: MoviePage =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();

        assert!(page.is_rejected());
        assert_eq!(page.error.as_deref(), Some("Movie not found!"));
        assert_eq!(page.results, None);
    }

    #[test]
    fn status_errors_map_to_fetch_failure_message() {
        assert_eq!(FetchError::Status(401).user_message(), FAILED_TO_FETCH);

        let decode = serde_json::from_str::<MoviePage>("<html>").unwrap_err();
        assert_eq!(FetchError::Decode(decode).user_message(), UNEXPECTED_FAILURE);
    }

    #[test]
    fn settings_default_to_public_endpoint() {
        let settings = TmdbSettings::new("key");

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, None);
    }
}
