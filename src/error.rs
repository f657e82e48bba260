//! Error types for the Bitly SDK.

use thiserror::Error;

use crate::response::Format;

/// Result type for Bitly operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Status text the service reports when the caller is throttled.
const RATE_LIMIT_STATUS_TXT: &str = "RATE_LIMIT_EXCEEDED";

/// Error types for the Bitly SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP layer answered with a status other than 200.
    #[error("Failed to call API. status code: {status}")]
    Transport {
        /// HTTP status code observed by the transport
        status: u16,
    },

    /// Network failure before any HTTP status was available.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body could not be parsed as the declared format.
    #[error("Malformed {format} response: {reason}")]
    MalformedResponse {
        /// Format the body was expected to be in
        format: Format,
        /// Parser diagnostic
        reason: String,
    },

    /// The response format tag is not one the service understands.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The envelope reported a non-success application status.
    #[error("API response error ({status_code}): {status_txt}")]
    Api {
        /// Envelope `status_code`
        status_code: u16,
        /// Envelope `status_txt`
        status_txt: String,
    },

    /// A list parameter contained another list.
    #[error("Invalid query string: parameter `{key}` contains a nested list")]
    InvalidQueryShape {
        /// Offending parameter name
        key: String,
    },

    /// No endpoint group is registered under this name.
    #[error("Unknown API group: {0}")]
    UnknownApiGroup(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A decoded JSON payload did not match the requested type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A decoded XML payload did not match the requested type.
    #[error("XML error: {0}")]
    XmlPayload(#[from] quick_xml::DeError),
}

impl Error {
    /// Envelope status code and text, if this is an application-level error.
    pub fn api_status(&self) -> Option<(u16, &str)> {
        match self {
            Error::Api {
                status_code,
                status_txt,
            } => Some((*status_code, status_txt.as_str())),
            _ => None,
        }
    }

    /// Whether the service rejected the call because of rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.api_status(), Some((_, txt)) if txt == RATE_LIMIT_STATUS_TXT)
    }

    pub(crate) fn malformed(format: Format, reason: impl ToString) -> Self {
        Error::MalformedResponse {
            format,
            reason: reason.to_string(),
        }
    }
}
