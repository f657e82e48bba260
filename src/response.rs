//! Response envelope decoding.
//!
//! Every response body carries `status_code`, `status_txt` and `data`. A call
//! succeeded only when the code is 200 and the text is `OK`; anything else is
//! reported as [`Error::Api`], whatever the HTTP layer said.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::xml::{parse_document, XmlElement};

const SUCCESS_CODE: u16 = 200;
const SUCCESS_TXT: &str = "OK";

/// Response format requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON document.
    #[default]
    Json,
    /// XML document.
    Xml,
}

impl Format {
    /// Wire tag sent as the `format` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// Decoder for bodies in this format.
    pub fn decoder(self) -> &'static dyn EnvelopeDecoder {
        match self {
            Format::Json => &JsonDecoder,
            Format::Xml => &XmlDecoder,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Payload of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// The `data` field of a JSON envelope, verbatim.
    Json(Value),
    /// The `<data>` element of an XML envelope, verbatim.
    Xml(XmlElement),
}

impl ResponseData {
    /// The JSON payload, if this response was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseData::Json(v) => Some(v),
            ResponseData::Xml(_) => None,
        }
    }

    /// The `<data>` element, if this response was XML.
    pub fn as_xml(&self) -> Option<&XmlElement> {
        match self {
            ResponseData::Xml(e) => Some(e),
            ResponseData::Json(_) => None,
        }
    }

    /// Consume the response, keeping the JSON payload.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ResponseData::Json(v) => Some(v),
            ResponseData::Xml(_) => None,
        }
    }

    /// Deserialize the payload into a typed value.
    ///
    /// XML payloads go through `quick_xml::de`, with `<data>` as the root,
    /// so child elements map onto struct fields.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            ResponseData::Json(v) => Ok(serde_json::from_value(v)?),
            ResponseData::Xml(e) => Ok(quick_xml::de::from_str(&e.to_xml())?),
        }
    }
}

/// Turns a raw response body into its payload or a classified error.
pub trait EnvelopeDecoder: Send + Sync {
    /// Decode `body`, returning the `data` payload on success.
    fn decode(&self, body: &[u8]) -> Result<ResponseData>;
}

/// Decoder for JSON envelopes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

#[derive(Deserialize)]
struct JsonEnvelope {
    status_code: u16,
    status_txt: String,
    #[serde(default)]
    data: Value,
}

impl EnvelopeDecoder for JsonDecoder {
    fn decode(&self, body: &[u8]) -> Result<ResponseData> {
        let envelope: JsonEnvelope =
            serde_json::from_slice(body).map_err(|e| Error::malformed(Format::Json, e))?;

        check_status(envelope.status_code, envelope.status_txt)?;
        Ok(ResponseData::Json(envelope.data))
    }
}

/// Decoder for XML envelopes.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl EnvelopeDecoder for XmlDecoder {
    fn decode(&self, body: &[u8]) -> Result<ResponseData> {
        let mut root = parse_document(body).map_err(|e| Error::malformed(Format::Xml, e))?;

        let status_code = root
            .child_text("status_code")
            .ok_or_else(|| Error::malformed(Format::Xml, "missing <status_code>"))?;
        let status_code: u16 = status_code.trim().parse().map_err(|_| {
            Error::malformed(
                Format::Xml,
                format!("invalid <status_code>: {status_code:?}"),
            )
        })?;
        let status_txt = root
            .child_text("status_txt")
            .ok_or_else(|| Error::malformed(Format::Xml, "missing <status_txt>"))?
            .trim()
            .to_string();

        check_status(status_code, status_txt)?;
        let data = root
            .take_child("data")
            .unwrap_or_else(|| XmlElement::new("data"));
        Ok(ResponseData::Xml(data))
    }
}

fn check_status(status_code: u16, status_txt: String) -> Result<()> {
    if status_code == SUCCESS_CODE && status_txt == SUCCESS_TXT {
        return Ok(());
    }
    Err(Error::Api {
        status_code,
        status_txt,
    })
}

/// Decode a body in the given format.
pub fn decode(format: Format, body: &[u8]) -> Result<ResponseData> {
    format.decoder().decode(body)
}

/// Decode a body whose format is named by a wire tag.
///
/// Unknown tags fail before the body is looked at.
pub fn decode_tagged(tag: &str, body: &[u8]) -> Result<ResponseData> {
    decode(tag.parse()?, body)
}
