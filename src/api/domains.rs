//! Domains API.

use crate::client::Client;
use crate::error::Result;
use crate::params::RawParams;
use crate::response::ResponseData;
use crate::types::MetricsQuery;

/// Branded short domains and tracking domains.
#[derive(Debug, Clone)]
pub struct Domains {
    client: Client,
}

impl Domains {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client this group sends requests through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Whether `domain` (e.g. `nyti.ms`) is a Bitly Pro short domain.
    pub fn bitly_pro_domain(&self, domain: &str) -> Result<ResponseData> {
        self.client
            .get("/bitly_pro_domain", RawParams::new().with("domain", domain))
    }

    /// Clicks on links pointing into a tracking domain.
    ///
    /// `domain` is one returned by `/v3/user/tracking_domain_list`.
    pub fn tracking_domain_clicks(&self, domain: &str, query: &MetricsQuery) -> Result<ResponseData> {
        self.client.get(
            "/user/tracking_domain_clicks",
            query.apply(RawParams::new().with("domain", domain), true),
        )
    }

    /// Number of links shortened into a tracking domain.
    pub fn tracking_domain_shorten_counts(
        &self,
        domain: &str,
        query: &MetricsQuery,
    ) -> Result<ResponseData> {
        self.client.get(
            "/user/tracking_domain_shorten_counts",
            query.apply(RawParams::new().with("domain", domain), true),
        )
    }
}
