//! Endpoint groups and the registry that constructs them by name.

mod bundles;
mod domains;
mod link_metrics;
mod links;
mod user_info_history;
mod user_metrics;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use bundles::Bundles;
pub use domains::Domains;
pub use link_metrics::LinkMetrics;
pub use links::Links;
pub use user_info_history::{LinkHistoryQuery, UserInfoHistory};
pub use user_metrics::UserMetrics;

use crate::client::{Client, ClientBuilder};
use crate::error::{Error, Result};
use crate::response::Format;
use crate::transport::Transport;

/// Endpoint group identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiGroup {
    Bundles,
    Domains,
    Links,
    LinkMetrics,
    UserMetrics,
    UserInfoHistory,
}

impl ApiGroup {
    /// Every registered group.
    pub const ALL: [ApiGroup; 6] = [
        ApiGroup::Bundles,
        ApiGroup::Domains,
        ApiGroup::Links,
        ApiGroup::LinkMetrics,
        ApiGroup::UserMetrics,
        ApiGroup::UserInfoHistory,
    ];

    /// Registry name of this group.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiGroup::Bundles => "bundles",
            ApiGroup::Domains => "domains",
            ApiGroup::Links => "links",
            ApiGroup::LinkMetrics => "link_metrics",
            ApiGroup::UserMetrics => "user_metrics",
            ApiGroup::UserInfoHistory => "user_info_history",
        }
    }

    fn constructor(self) -> fn(Client) -> Api {
        match self {
            ApiGroup::Bundles => |c| Api::Bundles(Bundles::new(c)),
            ApiGroup::Domains => |c| Api::Domains(Domains::new(c)),
            ApiGroup::Links => |c| Api::Links(Links::new(c)),
            ApiGroup::LinkMetrics => |c| Api::LinkMetrics(LinkMetrics::new(c)),
            ApiGroup::UserMetrics => |c| Api::UserMetrics(UserMetrics::new(c)),
            ApiGroup::UserInfoHistory => |c| Api::UserInfoHistory(UserInfoHistory::new(c)),
        }
    }
}

impl fmt::Display for ApiGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiGroup {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        ApiGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == name)
            .ok_or_else(|| Error::UnknownApiGroup(name.to_string()))
    }
}

/// A constructed endpoint group.
#[derive(Debug, Clone)]
pub enum Api {
    Bundles(Bundles),
    Domains(Domains),
    Links(Links),
    LinkMetrics(LinkMetrics),
    UserMetrics(UserMetrics),
    UserInfoHistory(UserInfoHistory),
}

impl Api {
    /// Group this handle belongs to.
    pub fn group(&self) -> ApiGroup {
        match self {
            Api::Bundles(_) => ApiGroup::Bundles,
            Api::Domains(_) => ApiGroup::Domains,
            Api::Links(_) => ApiGroup::Links,
            Api::LinkMetrics(_) => ApiGroup::LinkMetrics,
            Api::UserMetrics(_) => ApiGroup::UserMetrics,
            Api::UserInfoHistory(_) => ApiGroup::UserInfoHistory,
        }
    }
}

/// Builds endpoint groups for one access token.
pub struct ApiFactory {
    access_token: String,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiFactory {
    /// Create a factory for `access_token` using the default transport.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            transport: None,
        }
    }

    /// Share `transport` between every group this factory creates.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Construct the client for `group` in the given format.
    pub fn create(&self, group: ApiGroup, format: Format) -> Result<Api> {
        let mut builder = ClientBuilder::new(self.access_token.clone()).format(format);
        if let Some(transport) = &self.transport {
            builder = builder.transport(Arc::clone(transport));
        }
        Ok(group.constructor()(builder.build()?))
    }

    /// Construct a group from its registry name and a format tag.
    pub fn create_named(&self, name: &str, format_tag: &str) -> Result<Api> {
        self.create(name.parse()?, format_tag.parse()?)
    }
}
