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

//! Fetch-and-render state for the results area.
//!
//! [`Discovery`] owns the current [`DisplayState`] and the sequence number of
//! the most recently dispatched fetch. A fetch is started with
//! [`Discovery::begin`], which yields a [`FetchTicket`] for the command worker,
//! and finished with [`Discovery::complete`]. Results belonging to a ticket
//! that has since been superseded are dropped, so only the latest query ever
//! reaches the screen.

use tracing::{debug, error};

use crate::{
    api::{FAILED_TO_FETCH, FetchOutcome, MovieRequest},
    model::MovieSummary,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DisplayState {
    Loading,
    Error(String),
    Results(Vec<MovieSummary>),
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::Results(vec![])
    }
}

impl DisplayState {
    /// Interprets the outcome of a catalog request.
    pub(crate) fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome {
            Err(e) => {
                error!(error = %e, "Error while fetching movies");
                Self::Error(e.user_message().to_string())
            }
            Ok(page) if page.is_rejected() => {
                let message = page
                    .error
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FAILED_TO_FETCH.to_string());
                Self::Error(message)
            }
            Ok(page) => Self::Results(page.results.unwrap_or_default()),
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub(crate) fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn movies(&self) -> &[MovieSummary] {
        match self {
            Self::Results(movies) => movies,
            _ => &[],
        }
    }
}

/// A dispatched fetch, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FetchTicket {
    pub(crate) seq: u64,
    pub(crate) request: MovieRequest,
}

#[derive(Debug, Default)]
pub(crate) struct Discovery {
    state: DisplayState,
    current_seq: u64,
    query: String,
}

impl Discovery {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch for `query`, superseding any fetch still in flight.
    pub(crate) fn begin(&mut self, query: String) -> FetchTicket {
        self.current_seq += 1;
        self.state = DisplayState::Loading;

        let request = MovieRequest::for_query(&query);
        self.query = query;

        debug!(seq = self.current_seq, query = %self.query, "fetch started");

        FetchTicket {
            seq: self.current_seq,
            request,
        }
    }

    /// Applies the outcome of fetch `seq`.
    ///
    /// Returns `false`, leaving the state untouched, when `seq` is not the
    /// latest dispatched fetch.
    pub(crate) fn complete(&mut self, seq: u64, outcome: FetchOutcome) -> bool {
        if seq != self.current_seq {
            debug!(seq, current = self.current_seq, "discarding stale fetch result");
            return false;
        }

        self.state = DisplayState::from_outcome(outcome);
        true
    }

    pub(crate) fn state(&self) -> &DisplayState {
        &self.state
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::{FetchError, MoviePage, UNEXPECTED_FAILURE};

    fn page(movies: Vec<MovieSummary>) -> FetchOutcome {
        Ok(MoviePage {
            results: Some(movies),
            ..MoviePage::default()
        })
    }

    #[test]
    fn starts_with_empty_results() {
        let discovery = Discovery::new();

        assert_eq!(discovery.state(), &DisplayState::Results(vec![]));
        assert!(!discovery.state().is_loading());
    }

    #[test]
    fn empty_query_requests_discover_listing() {
        let mut discovery = Discovery::new();

        let ticket = discovery.begin(String::new());

        assert_eq!(ticket.request, MovieRequest::Discover);
    }

    #[test]
    fn loading_brackets_a_successful_fetch() {
        let mut discovery = Discovery::new();
        let movies = vec![MovieSummary::sample(1, "Heat"), MovieSummary::sample(2, "Ronin")];

        let ticket = discovery.begin("de niro".to_string());
        assert_eq!(ticket.request, MovieRequest::Search("de niro".to_string()));
        assert!(discovery.state().is_loading());

        assert!(discovery.complete(ticket.seq, page(movies.clone())));
        assert!(!discovery.state().is_loading());
        assert_eq!(discovery.state(), &DisplayState::Results(movies));
    }

    #[test]
    fn loading_brackets_a_failed_fetch_and_clears_previous_error() {
        let mut discovery = Discovery::new();

        let first = discovery.begin("x".to_string());
        discovery.complete(first.seq, Err(FetchError::Status(500)));
        assert_eq!(discovery.state().error_message(), Some(FAILED_TO_FETCH));

        let second = discovery.begin("y".to_string());
        assert_eq!(discovery.state(), &DisplayState::Loading);
        assert_eq!(discovery.state().error_message(), None);

        discovery.complete(second.seq, Err(FetchError::Status(503)));
        assert!(!discovery.state().is_loading());
    }

    #[test]
    fn transport_failure_shows_fetch_error_with_no_movies() {
        let state = DisplayState::from_outcome(Err(FetchError::Status(404)));

        assert_eq!(state, DisplayState::Error("Failed to fetch movies".to_string()));
        assert!(state.movies().is_empty());
    }

    #[test]
    fn empty_results_are_not_an_error() {
        assert_eq!(DisplayState::from_outcome(page(vec![])), DisplayState::Results(vec![]));
    }

    #[test]
    fn missing_results_become_empty_list() {
        let state = DisplayState::from_outcome(Ok(MoviePage::default()));

        assert_eq!(state, DisplayState::Results(vec![]));
    }

    #[test]
    fn rejected_payload_uses_its_message() {
        let state = DisplayState::from_outcome(Ok(MoviePage {
            results: None,
            response: Some("False".to_string()),
            error: Some("Too many results.".to_string()),
        }));

        assert_eq!(state, DisplayState::Error("Too many results.".to_string()));
    }

    #[test]
    fn rejected_payload_without_message_uses_fallback() {
        let state = DisplayState::from_outcome(Ok(MoviePage {
            results: Some(vec![MovieSummary::sample(1, "Ignored")]),
            response: Some("False".to_string()),
            error: Some(String::new()),
        }));

        assert_eq!(state, DisplayState::Error(FAILED_TO_FETCH.to_string()));
    }

    #[test]
    fn unexpected_failure_uses_generic_message() {
        let decode = serde_json::from_str::<MoviePage>("{").unwrap_err();

        let state = DisplayState::from_outcome(Err(FetchError::Decode(decode)));

        assert_eq!(state, DisplayState::Error(UNEXPECTED_FAILURE.to_string()));
    }

    #[test]
    fn stale_result_is_discarded_and_newer_one_applied() {
        let mut discovery = Discovery::new();

        let older = discovery.begin("ali".to_string());
        let newer = discovery.begin("alien".to_string());

        // The older request resolves last in wall-clock order relative to the
        // newer dispatch, it must not replace the pending state.
        assert!(!discovery.complete(older.seq, page(vec![MovieSummary::sample(1, "Ali")])));
        assert!(discovery.state().is_loading());

        assert!(discovery.complete(newer.seq, page(vec![MovieSummary::sample(2, "Alien")])));
        assert_eq!(discovery.state().movies()[0].title, "Alien");
        assert_eq!(discovery.query(), "alien");

        // A straggler arriving after the newer result changes nothing either.
        assert!(!discovery.complete(older.seq, Err(FetchError::Status(500))));
        assert_eq!(discovery.state().movies()[0].title, "Alien");
    }
}
