//! User metrics API.
//!
//! Aggregates over every link of the authenticated user. Requests go to the
//! documented `/v3/user/*` paths.

use crate::client::Client;
use crate::error::Result;
use crate::params::RawParams;
use crate::response::ResponseData;
use crate::types::MetricsQuery;

/// Metrics across all of the user's links.
#[derive(Debug, Clone)]
pub struct UserMetrics {
    client: Client,
}

impl UserMetrics {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client this group sends requests through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn windowed(&self, path: &str, query: &MetricsQuery, with_rollup: bool) -> Result<ResponseData> {
        self.client
            .get(path, query.apply(RawParams::new(), with_rollup))
    }

    /// Clicks across all of the user's links.
    pub fn clicks(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/clicks", query, true)
    }

    /// Clicks by country.
    pub fn countries(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/countries", query, true)
    }

    /// Most clicked links. Does not accept `rollup`.
    pub fn popular_links(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/popular_links", query, false)
    }

    /// Clicks by referring page.
    pub fn referrers(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/referrers", query, true)
    }

    /// Clicks by referring domain.
    pub fn referring_domains(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/referring_domains", query, true)
    }

    /// Number of shares made by the user.
    pub fn share_counts(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/share_counts", query, true)
    }

    /// Shares broken down by network.
    pub fn share_counts_by_share_type(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/share_counts_by_share_type", query, true)
    }

    /// Number of links shortened by the user.
    pub fn shorten_counts(&self, query: &MetricsQuery) -> Result<ResponseData> {
        self.windowed("/user/shorten_counts", query, true)
    }
}
