//! URL construction for GET requests.

use url::form_urlencoded::byte_serialize;

use crate::error::{Error, Result};
use crate::params::{QueryParams, QueryValue};

/// Build a fully-qualified URL from a base host, a relative path and
/// normalized parameters.
///
/// Host and path are concatenated verbatim. The query string is always
/// prefixed with `?`, so an empty parameter set yields a trailing bare `?`.
/// List values expand to one pair per element; nested lists are rejected
/// before anything is serialized.
pub fn build_url(base_host: &str, path: &str, params: &QueryParams) -> Result<String> {
    let mut pairs = Vec::with_capacity(params.len());

    for (key, value) in params.iter() {
        let key_enc = encode(key);
        match value {
            QueryValue::List(items) => {
                for item in items {
                    let scalar = scalar(item).ok_or_else(|| Error::InvalidQueryShape {
                        key: key.to_string(),
                    })?;
                    pairs.push(format!("{}={}", key_enc, encode(&scalar)));
                }
            }
            QueryValue::CommaList(fields) => {
                let joined: Vec<String> = fields.iter().map(|f| encode(f)).collect();
                pairs.push(format!("{}={}", key_enc, joined.join(",")));
            }
            QueryValue::Str(s) => pairs.push(format!("{}={}", key_enc, encode(s))),
            QueryValue::Int(i) => pairs.push(format!("{}={}", key_enc, i)),
            QueryValue::Bool(b) => pairs.push(format!("{}={}", key_enc, b)),
        }
    }

    Ok(format!("{}{}?{}", base_host, path, pairs.join("&")))
}

fn scalar(value: &QueryValue) -> Option<String> {
    match value {
        QueryValue::Str(s) => Some(s.clone()),
        QueryValue::Int(i) => Some(i.to_string()),
        QueryValue::Bool(b) => Some(b.to_string()),
        QueryValue::List(_) | QueryValue::CommaList(_) => None,
    }
}

fn encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}
