//! Query parameter values and argument normalization.
//!
//! Endpoint methods collect their arguments into [`RawParams`], where an
//! argument the caller did not supply is recorded as absent. [`normalize`]
//! turns that into the [`QueryParams`] actually sent: absent entries dropped,
//! booleans spelled `"true"`/`"false"`, and the access token and response
//! format appended under their reserved keys.

use crate::response::Format;

/// Reserved key carrying the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Reserved key carrying the response format tag.
pub const FORMAT_KEY: &str = "format";

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Plain string.
    Str(String),
    /// Integer, sent in decimal.
    Int(i64),
    /// Boolean. Replaced by `Str("true"|"false")` during normalization.
    Bool(bool),
    /// Sent as one `key=value` pair per element, in order.
    List(Vec<QueryValue>),
    /// Sent as a single pair whose elements are joined with literal commas.
    CommaList(Vec<String>),
}

impl QueryValue {
    /// Field names to be sent joined by commas.
    pub fn fields(names: &[&str]) -> Self {
        QueryValue::CommaList(names.iter().map(|n| n.to_string()).collect())
    }

    fn canonicalize(self) -> Self {
        match self {
            QueryValue::Bool(b) => QueryValue::Str(if b { "true" } else { "false" }.to_string()),
            QueryValue::List(items) => {
                QueryValue::List(items.into_iter().map(QueryValue::canonicalize).collect())
            }
            other => other,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        QueryValue::Str(v.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        QueryValue::Str(v)
    }
}

impl From<&String> for QueryValue {
    fn from(v: &String) -> Self {
        QueryValue::Str(v.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(v: bool) -> Self {
        QueryValue::Bool(v)
    }
}

impl From<i64> for QueryValue {
    fn from(v: i64) -> Self {
        QueryValue::Int(v)
    }
}

impl From<i32> for QueryValue {
    fn from(v: i32) -> Self {
        QueryValue::Int(v.into())
    }
}

impl From<u32> for QueryValue {
    fn from(v: u32) -> Self {
        QueryValue::Int(v.into())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(v: &[&str]) -> Self {
        QueryValue::List(v.iter().map(|s| QueryValue::from(*s)).collect())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        QueryValue::List(v.into_iter().map(QueryValue::Str).collect())
    }
}

/// Caller-supplied arguments, in insertion order, before normalization.
///
/// Setting a key twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl RawParams {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a present value.
    pub fn with(self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.with_opt(key, Some(value))
    }

    /// Add a value that may be absent. `None` is recorded and later dropped.
    pub fn with_opt<V: Into<QueryValue>>(mut self, key: &str, value: Option<V>) -> Self {
        let value = value.map(Into::into);
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// Add a list that is treated as absent when empty.
    ///
    /// An empty list puts no pairs on the wire whether or not it is present.
    pub fn with_list(self, key: &str, values: &[&str]) -> Self {
        let value = (!values.is_empty()).then(|| QueryValue::from(values));
        self.with_opt(key, value)
    }

    /// Add a comma-joined field list. An empty list is still sent, as `key=`.
    pub fn with_fields(self, key: &str, fields: &[&str]) -> Self {
        self.with(key, QueryValue::fields(fields))
    }

    /// Iterate over the raw entries, absent ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&QueryValue>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

/// Normalized, ordered query parameters ready to serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any existing value for `key` in place.
    pub fn insert(&mut self, key: &str, value: impl Into<QueryValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize caller arguments into the parameters sent on the wire.
///
/// Caller-supplied values for the reserved keys are discarded; the bound
/// token and format are always appended last.
pub fn normalize(raw: &RawParams, access_token: &str, format: Format) -> QueryParams {
    let mut params = QueryParams::new();

    for (key, value) in raw.iter() {
        if key == ACCESS_TOKEN_KEY || key == FORMAT_KEY {
            continue;
        }
        if let Some(value) = value {
            params.insert(key, value.clone().canonicalize());
        }
    }

    params.insert(ACCESS_TOKEN_KEY, access_token);
    params.insert(FORMAT_KEY, format.as_str());
    params
}
