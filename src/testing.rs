//! Test doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::transport::Transport;

/// Transport that answers every request with one canned outcome and
/// remembers the URLs it was asked for.
pub(crate) struct StubTransport {
    outcome: std::result::Result<Vec<u8>, u16>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    pub(crate) fn body(body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(body.as_bytes().to_vec()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn status(status: u16) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(status),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Path and decoded query pairs of the most recent request.
    pub(crate) fn last_request(&self) -> (String, Vec<(String, String)>) {
        let url = self.requests().pop().expect("no request was made");
        let parsed = url::Url::parse(&url).expect("requested URL is absolute");
        let pairs = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        (parsed.path().to_string(), pairs)
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.outcome {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(Error::Transport { status: *status }),
        }
    }
}

/// Empty success envelope.
pub(crate) const OK_BODY: &str = r#"{"status_code":200,"status_txt":"OK","data":{}}"#;

/// JSON client whose transport always answers with [`OK_BODY`].
pub(crate) fn stub_client() -> (Client, Arc<StubTransport>) {
    let stub = StubTransport::body(OK_BODY);
    let client = Client::builder("TOK")
        .transport(stub.clone())
        .build()
        .expect("stub client builds");
    (client, stub)
}

/// Build the expected query pairs, with the bound token and format appended.
pub(crate) fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .chain([("access_token", "TOK"), ("format", "json")].iter())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
