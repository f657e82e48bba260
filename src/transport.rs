//! Pluggable HTTP transport.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;

use crate::error::{Error, Result};

/// Performs a single blocking GET and returns the raw body.
///
/// Implementations must report any status other than 200 as
/// [`Error::Transport`]. The client holds one transport for its whole
/// lifetime and may call it from several threads at once.
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the response body.
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Default transport backed by a blocking `reqwest` client.
///
/// Redirects are followed; connections are pooled by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the given timeout and User-Agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| Error::Config(format!("invalid user agent: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, application/xml"));

        let http_client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { http_client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http_client.get(url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Transport {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}
