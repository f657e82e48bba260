//! Rust client for the Bitly v3 REST API.
//!
//! Every endpoint is a plain HTTP GET with its arguments in the query string.
//! Responses come wrapped in an envelope carrying `status_code`, `status_txt`
//! and `data`; the client unwraps it and hands back the `data` payload, or an
//! [`Error`] saying which layer failed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bitly::{Client, Format};
//!
//! fn main() -> Result<(), bitly::Error> {
//!     let client = Client::builder("your-access-token")
//!         .format(Format::Json)
//!         .build()?;
//!
//!     let data = client.links().shorten("http://example.com/", None)?;
//!     println!("{:?}", data.as_json());
//!     Ok(())
//! }
//! ```
//!
//! The client is blocking. Swap the HTTP layer by implementing [`Transport`]
//! and passing it to [`ClientBuilder::transport`].

mod api;
mod client;
mod error;
mod params;
mod request;
mod response;
mod transport;
mod types;
mod version;
mod xml;

#[cfg(test)]
mod testing;

pub use api::{
    Api, ApiFactory, ApiGroup, Bundles, Domains, LinkHistoryQuery, LinkMetrics, Links,
    UserInfoHistory, UserMetrics,
};
pub use client::{Client, ClientBuilder, API_URL, SECURE_API_URL};
pub use error::{Error, Result};
pub use params::{normalize, QueryParams, QueryValue, RawParams, ACCESS_TOKEN_KEY, FORMAT_KEY};
pub use request::build_url;
pub use response::{
    decode, decode_tagged, EnvelopeDecoder, Format, JsonDecoder, ResponseData, XmlDecoder,
};
pub use transport::{HttpTransport, Transport};
pub use types::*;
pub use version::{build_user_agent, API_VERSION_PREFIX, SDK_VERSION};
pub use xml::XmlElement;
