use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;
use log::{info, warn};
use thiserror::Error;

use crate::config::RunConfig;
use crate::delay_manager;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: StatusCode },
}

pub struct Fetcher {
    client: Client,
    retries: u32,
}

impl Fetcher {
    pub fn new(config: &RunConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Fetcher {
            client,
            retries: config.retries,
        }
    }

    #[cfg(test)]
    fn with_retries(retries: u32) -> Self {
        let config = RunConfig {
            retries,
            ..RunConfig::default()
        };
        Fetcher::new(&config)
    }

    /// One GET, body on 2xx. Retries up to `config.retries` extra times with
    /// a short randomized backoff between attempts.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let mut last_err = None;

        for attempt in 0..=self.retries {
            if attempt > 0 {
                delay_manager::retry_backoff(attempt);
            }

            info!("Fetching URL: {} (attempt {} of {})", url, attempt + 1, self.retries + 1);
            match self.fetch_once(url) {
                Ok(body) => {
                    info!("Successfully fetched {} ({} bytes)", url, body.len());
                    return Ok(body);
                }
                Err(e) => {
                    warn!("Fetch attempt {} failed for {}: {}", attempt + 1, url, e);
                    last_err = Some(e);
                }
            }
        }

        // Loop runs at least once, so last_err is always set here.
        Err(last_err.unwrap())
    }

    fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(resp.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn returns_body_on_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/CVPR2024");
            then.status(200).body("<html>papers</html>");
        });

        let fetcher = Fetcher::with_retries(0);
        let body = fetcher.fetch(&server.url("/CVPR2024")).unwrap();

        mock.assert();
        assert_eq!(body, "<html>papers</html>");
    }

    #[test]
    fn non_2xx_is_a_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let fetcher = Fetcher::with_retries(0);
        let err = fetcher.fetch(&server.url("/missing")).unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn retries_bounded_by_config() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/flaky");
            then.status(500);
        });

        let fetcher = Fetcher::with_retries(2);
        assert!(fetcher.fetch(&server.url("/flaky")).is_err());

        // 1 initial attempt + 2 retries
        mock.assert_hits(3);
    }
}
