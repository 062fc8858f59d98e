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

//! HTTP implementation of [`MovieSource`] for The Movie Database API.

use reqwest::{blocking::Client, header::ACCEPT};
use tracing::debug;

use crate::api::{FetchError, FetchOutcome, MoviePage, MovieRequest, MovieSource, TmdbSettings};

const USER_AGENT: &str = concat!("movieui/", env!("CARGO_PKG_VERSION"));

pub(crate) struct TmdbClient {
    client: Client,
    settings: TmdbSettings,
}

impl TmdbClient {
    /// Creates a client for the configured catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built, for
    /// example when the TLS backend fails to initialise.
    pub(crate) fn new(settings: TmdbSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }
}

impl MovieSource for TmdbClient {
    fn fetch(&self, request: &MovieRequest) -> FetchOutcome {
        let url = request.url(&self.settings.base_url);
        debug!(%url, "requesting movies");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.settings.api_key)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let page: MoviePage = serde_json::from_str(&body)?;
        debug!(
            results = page.results.as_ref().map_or(0, Vec::len),
            "movies received"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use pretty_assertions::assert_eq;

    use super::*;

    /// Serves exactly one HTTP response and hands back the raw request text.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                request.extend_from_slice(&chunk[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/3"), handle)
    }

    fn client(base_url: String) -> TmdbClient {
        TmdbClient::new(TmdbSettings::new("secret-token").with_base_url(base_url)).unwrap()
    }

    #[test]
    fn search_sends_encoded_query_and_credentials() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"results": [{"id": 11, "title": "Star Wars", "vote_average": 8.2,
                "poster_path": "/sw.jpg", "release_date": "1977-05-25", "original_language": "en"}]}"#,
        );

        let page = client(base_url)
            .fetch(&MovieRequest::for_query("star wars & more"))
            .unwrap();
        let request = server.join().unwrap();

        assert!(
            request.starts_with("GET /3/search/movie?query=star%20wars%20%26%20more HTTP/1.1"),
            "unexpected request: {request}"
        );
        let lowered = request.to_ascii_lowercase();
        assert!(lowered.contains("authorization: bearer secret-token"));
        assert!(lowered.contains("accept: application/json"));

        let results = page.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Star Wars");
    }

    #[test]
    fn discover_hits_popularity_listing() {
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", r#"{"results": []}"#);

        let page = client(base_url).fetch(&MovieRequest::Discover).unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("GET /3/discover/movie?sort_by=popularity.desc HTTP/1.1"));
        assert_eq!(page.results, Some(vec![]));
    }

    #[test]
    fn non_success_status_is_reported() {
        let (base_url, server) = serve_once(
            "HTTP/1.1 401 Unauthorized",
            r#"{"status_message": "Invalid API key"}"#,
        );

        let result = client(base_url).fetch(&MovieRequest::Discover);
        server.join().unwrap();

        assert!(matches!(result, Err(FetchError::Status(401))));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", "not json");

        let result = client(base_url).fetch(&MovieRequest::Discover);
        server.join().unwrap();

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}
