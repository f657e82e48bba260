//! User info and history API.

use crate::client::Client;
use crate::error::Result;
use crate::params::RawParams;
use crate::response::ResponseData;

/// Filters for [`UserInfoHistory::link_history`]. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHistoryQuery<'a> {
    /// Restrict to a single short link.
    pub link: Option<&'a str>,
    /// 1..=100 (service default 50).
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Epoch seconds.
    pub created_before: Option<i64>,
    /// Epoch seconds.
    pub created_after: Option<i64>,
    /// Epoch seconds.
    pub modified_after: Option<i64>,
    /// Include the id of the client app that created each link.
    pub expand_client_id: Option<bool>,
    /// `Some(true)` for archived links only, `Some(false)` to exclude them.
    pub archived: Option<bool>,
    /// `Some(true)` for private links only, `Some(false)` for public ones.
    pub private: Option<bool>,
    /// Another login, for enterprise accounts.
    pub user: Option<&'a str>,
}

/// Account information and link history.
#[derive(Debug, Clone)]
pub struct UserInfoHistory {
    client: Client,
}

impl UserInfoHistory {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client this group sends requests through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Account information, for the token owner unless `login` is given.
    pub fn info(&self, login: Option<&str>, full_name: Option<&str>) -> Result<ResponseData> {
        self.client.get(
            "/user/info",
            RawParams::new()
                .with_opt("login", login)
                .with_opt("full_name", full_name),
        )
    }

    /// Links in the user's history, newest first.
    pub fn link_history(&self, query: &LinkHistoryQuery<'_>) -> Result<ResponseData> {
        self.client.get(
            "/user/link_history",
            RawParams::new()
                .with_opt("link", query.link)
                .with_opt("limit", query.limit)
                .with_opt("offset", query.offset)
                .with_opt("created_before", query.created_before)
                .with_opt("created_after", query.created_after)
                .with_opt("modified_after", query.modified_after)
                .with_opt("expand_client_id", query.expand_client_id)
                .with_opt("archived", query.archived)
                .with_opt("private", query.private)
                .with_opt("user", query.user),
        )
    }

    /// Links shortened by the user's network.
    pub fn network_history(
        &self,
        offset: Option<u32>,
        expand_client_id: Option<bool>,
        limit: Option<u32>,
        expand_user: Option<bool>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/user/network_history",
            RawParams::new()
                .with_opt("offset", offset)
                .with_opt("expand_client_id", expand_client_id)
                .with_opt("limit", limit)
                .with_opt("expand_user", expand_user),
        )
    }

    /// Tracking domains configured for the account.
    pub fn tracking_domain_list(&self) -> Result<ResponseData> {
        self.client.get("/user/tracking_domain_list", RawParams::new())
    }
}

#[cfg(test)]
mod tests {
    use super::LinkHistoryQuery;
    use crate::testing::{expected, stub_client};

    #[test]
    fn test_info() {
        let (client, stub) = stub_client();
        client
            .user_info_history()
            .info(Some("someone"), None)
            .unwrap();

        let (path, query) = stub.last_request();
        assert_eq!(path, "/v3/user/info");
        assert_eq!(query, expected(&[("login", "someone")]));
    }

    #[test]
    fn test_link_history_sends_expand_client_id() {
        let (client, stub) = stub_client();
        let query = LinkHistoryQuery {
            limit: Some(10),
            offset: Some(20),
            expand_client_id: Some(true),
            archived: Some(false),
            ..Default::default()
        };
        client.user_info_history().link_history(&query).unwrap();

        let (path, pairs) = stub.last_request();
        assert_eq!(path, "/v3/user/link_history");
        assert_eq!(
            pairs,
            expected(&[
                ("limit", "10"),
                ("offset", "20"),
                ("expand_client_id", "true"),
                ("archived", "false"),
            ])
        );
    }

    #[test]
    fn test_network_history() {
        let (client, stub) = stub_client();
        client
            .user_info_history()
            .network_history(None, None, Some(3), Some(true))
            .unwrap();

        assert_eq!(
            stub.last_request().1,
            expected(&[("limit", "3"), ("expand_user", "true")])
        );
    }

    #[test]
    fn test_tracking_domain_list_sends_only_credentials() {
        let (client, stub) = stub_client();
        client.user_info_history().tracking_domain_list().unwrap();

        let (path, query) = stub.last_request();
        assert_eq!(path, "/v3/user/tracking_domain_list");
        assert_eq!(query, expected(&[]));
    }
}
