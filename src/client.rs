//! Main Bitly client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::api::{Bundles, Domains, LinkMetrics, Links, UserInfoHistory, UserMetrics};
use crate::error::{Error, Result};
use crate::params::{normalize, RawParams};
use crate::request::build_url;
use crate::response::{decode, Format, ResponseData};
use crate::transport::{HttpTransport, Transport};
use crate::version::{build_user_agent, API_VERSION_PREFIX};

/// API host (TLS). Used unless the builder is told otherwise.
pub const SECURE_API_URL: &str = "https://api-ssl.bit.ly";

/// API host without TLS. Never selected automatically.
pub const API_URL: &str = "http://api.bit.ly";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    access_token: String,
    format_tag: String,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            format_tag: Format::default().as_str().to_string(),
            base_url: SECURE_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            transport: None,
            user_agent_suffix: None,
        }
    }

    /// Set the response format.
    pub fn format(mut self, format: Format) -> Self {
        self.format_tag = format.as_str().to_string();
        self
    }

    /// Set the response format by wire tag. Unknown tags fail in [`build`](Self::build).
    pub fn format_tag(mut self, tag: impl Into<String>) -> Self {
        self.format_tag = tag.into();
        self
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of [`HttpTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if self.access_token.is_empty() {
            return Err(Error::Config("access token is required".into()));
        }

        let format: Format = self.format_tag.parse()?;

        let parsed = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        if parsed.scheme() != "https" {
            warn!(
                base_url = %self.base_url,
                "API base URL is not using HTTPS. This is insecure."
            );
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let user_agent = build_user_agent(self.user_agent_suffix.as_deref());
                Arc::new(HttpTransport::new(self.timeout, &user_agent)?)
            }
        };

        Ok(Client {
            access_token: self.access_token,
            format,
            base_url: self.base_url,
            transport,
        })
    }
}

/// The Bitly v3 API client.
///
/// Cheap to clone; clones share the transport. Endpoint groups are reached
/// through [`bundles`](Self::bundles), [`links`](Self::links) and friends.
///
/// # Example
///
/// ```rust,no_run
/// use bitly::Client;
///
/// fn main() -> Result<(), bitly::Error> {
///     let client = Client::new("your-access-token")?;
///
///     let data = client.links().shorten("http://example.com/", None)?;
///     println!("{:?}", data.as_json());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    access_token: String,
    format: Format,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client with default settings (JSON over the secure host).
    pub fn new(access_token: impl Into<String>) -> Result<Client> {
        ClientBuilder::new(access_token).build()
    }

    /// Create a new client builder.
    pub fn builder(access_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(access_token)
    }

    /// Response format bound at construction.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `path` (relative to `/v3`) and return the decoded
    /// payload.
    ///
    /// Exactly one request is made. Transport and decoding errors are
    /// returned unchanged.
    pub fn get(&self, path: &str, params: RawParams) -> Result<ResponseData> {
        let query = normalize(&params, &self.access_token, self.format);
        let url = build_url(
            &self.base_url,
            &format!("{API_VERSION_PREFIX}{path}"),
            &query,
        )?;

        debug!(path = path, format = %self.format, "Calling API");
        let body = self.transport.get(&url)?;

        decode(self.format, &body)
    }

    // === Endpoint groups ===

    /// Bundles API.
    pub fn bundles(&self) -> Bundles {
        Bundles::new(self.clone())
    }

    /// Domains API.
    pub fn domains(&self) -> Domains {
        Domains::new(self.clone())
    }

    /// Links API.
    pub fn links(&self) -> Links {
        Links::new(self.clone())
    }

    /// Per-link metrics API.
    pub fn link_metrics(&self) -> LinkMetrics {
        LinkMetrics::new(self.clone())
    }

    /// User metrics API.
    pub fn user_metrics(&self) -> UserMetrics {
        UserMetrics::new(self.clone())
    }

    /// User info and history API.
    pub fn user_info_history(&self) -> UserInfoHistory {
        UserInfoHistory::new(self.clone())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("format", &self.format)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use serde_json::json;
    use tracing_test::traced_test;

    const SHORTEN_OK: &str =
        r#"{"status_code":200,"status_txt":"OK","data":{"url":"http://bit.ly/abc","hash":"abc"}}"#;

    #[test]
    fn test_shorten_end_to_end() {
        let stub = StubTransport::body(SHORTEN_OK);
        let client = Client::builder("TOK").transport(stub.clone()).build().unwrap();

        let data = client.links().shorten("http://example.com/", None).unwrap();
        assert_eq!(
            data,
            ResponseData::Json(json!({"url": "http://bit.ly/abc", "hash": "abc"}))
        );

        let urls = stub.requests();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with("https://api-ssl.bit.ly/v3/shorten?"));
        assert!(urls[0].contains("longUrl=http%3A%2F%2Fexample.com%2F&access_token=TOK&format=json"));
    }

    #[test]
    fn test_transport_error_propagates() {
        let stub = StubTransport::status(503);
        let client = Client::builder("TOK").transport(stub.clone()).build().unwrap();

        let err = client.links().shorten("http://example.com/", None).unwrap_err();
        assert!(matches!(err, Error::Transport { status: 503 }));
        assert_eq!(stub.requests().len(), 1);
    }

    #[test]
    fn test_nested_list_fails_before_io() {
        use crate::params::QueryValue;

        let stub = StubTransport::body(SHORTEN_OK);
        let client = Client::builder("TOK").transport(stub.clone()).build().unwrap();

        let nested = QueryValue::List(vec![QueryValue::List(vec!["a".into()])]);
        let err = client
            .get("/bundle/reorder", RawParams::new().with("link", nested))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidQueryShape { .. }));
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn test_format_is_bound_at_construction() {
        let stub = StubTransport::body(
            "<response><status_code>200</status_code><status_txt>OK</status_txt>\
             <data><login>someone</login></data></response>",
        );
        let client = Client::builder("TOK")
            .format_tag("xml")
            .transport(stub.clone())
            .build()
            .unwrap();
        assert_eq!(client.format(), Format::Xml);

        let data = client.user_info_history().info(None, None).unwrap();
        assert_eq!(data.as_xml().unwrap().child_text("login"), Some("someone"));
        assert!(stub.requests()[0].ends_with("/v3/user/info?access_token=TOK&format=xml"));
    }

    #[test]
    fn test_build_validation() {
        let err = Client::builder("").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Client::builder("TOK").format_tag("yaml").build().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref t) if t == "yaml"));

        let err = Client::builder("TOK").base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let stub = StubTransport::body(SHORTEN_OK);
        let client = Client::builder("TOK")
            .base_url("https://proxy.example.com/")
            .transport(stub.clone())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://proxy.example.com");

        client.links().shorten("http://example.com/", None).unwrap();
        assert!(stub.requests()[0].starts_with("https://proxy.example.com/v3/shorten?"));
    }

    #[test]
    #[traced_test]
    fn test_insecure_base_url_warns() {
        let client = Client::builder("TOK")
            .base_url(API_URL)
            .transport(StubTransport::body(SHORTEN_OK))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), API_URL);
        assert!(logs_contain("not using HTTPS"));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = Client::builder("SECRET")
            .transport(StubTransport::body(SHORTEN_OK))
            .build()
            .unwrap();
        assert!(!format!("{client:?}").contains("SECRET"));
    }
}
