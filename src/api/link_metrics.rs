//! Link metrics API.

use crate::client::Client;
use crate::error::Result;
use crate::params::RawParams;
use crate::response::ResponseData;
use crate::types::MetricsQuery;

/// Per-link metrics (`/v3/link/*`).
///
/// `countries`, `referrers`, `referrers_by_domain` and `referring_domains`
/// do not accept `rollup`; it is left out of those requests.
#[derive(Debug, Clone)]
pub struct LinkMetrics {
    client: Client,
}

impl LinkMetrics {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client this group sends requests through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn windowed(
        &self,
        path: &str,
        link: &str,
        query: &MetricsQuery,
        with_rollup: bool,
    ) -> Result<ResponseData> {
        self.client.get(
            path,
            query.apply(RawParams::new().with("link", link), with_rollup),
        )
    }

    /// Clicks on a link.
    pub fn clicks(&self, link: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/link/clicks", link, query, true)
    }

    /// Clicks on a link, by country.
    pub fn countries(&self, link: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/link/countries", link, query, false)
    }

    /// Users who have encoded this long link.
    ///
    /// `limit` ranges 1..=500 here (service default 50).
    pub fn encoders(
        &self,
        link: &str,
        my_network: Option<bool>,
        limit: Option<u32>,
        expand_user: Option<bool>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/link/encoders",
            RawParams::new()
                .with("link", link)
                .with_opt("my_network", my_network)
                .with_opt("limit", limit)
                .with_opt("expand_user", expand_user),
        )
    }

    /// Number of users who have shortened this link.
    pub fn encoders_count(&self, link: &str) -> Result<ResponseData> {
        self.client
            .get("/link/encoders_count", RawParams::new().with("link", link))
    }

    /// Referring sites of a link.
    pub fn referrers(&self, link: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/link/referrers", link, query, false)
    }

    /// Referrers grouped by referring domain.
    pub fn referrers_by_domain(&self, link: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/link/referrers_by_domain", link, query, false)
    }

    /// Referring domains of a link.
    pub fn referring_domains(&self, link: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/link/referring_domains", link, query, false)
    }

    /// Shares of a link.
    pub fn shares(&self, link: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/link/shares", link, query, true)
    }
}
