//! Links API: shortening, expansion and the user's saved links.

use crate::client::Client;
use crate::error::Result;
use crate::params::RawParams;
use crate::response::ResponseData;

/// Link shortening, expansion and lookup.
///
/// JSON payloads of the common calls deserialize into the structs in
/// [`crate::types`]:
///
/// ```rust,no_run
/// use bitly::{Client, Shorten};
///
/// fn main() -> Result<(), bitly::Error> {
///     let client = Client::new("your-access-token")?;
///     let short: Shorten = client
///         .links()
///         .shorten("http://example.com/", None)?
///         .deserialize()?;
///     println!("{}", short.url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Links {
    client: Client,
}

impl Links {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client this group sends requests through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Long URLs for one or more short links and/or hashes.
    pub fn expand(&self, short_urls: &[&str], hashes: &[&str]) -> Result<ResponseData> {
        self.client.get(
            "/expand",
            RawParams::new()
                .with_list("shortUrl", short_urls)
                .with_list("hash", hashes),
        )
    }

    /// Title, creator and creation time of one or more short links.
    pub fn info(
        &self,
        short_urls: &[&str],
        hashes: &[&str],
        expand_user: Option<bool>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/info",
            RawParams::new()
                .with_list("shortUrl", short_urls)
                .with_list("hash", hashes)
                .with_opt("expand_user", expand_user),
        )
    }

    /// Public short links for one or more long URLs.
    pub fn lookup(&self, urls: &[&str]) -> Result<ResponseData> {
        self.client
            .get("/link/lookup", RawParams::new().with_list("url", urls))
    }

    /// Shorten a long URL, optionally on a specific short domain.
    pub fn shorten(&self, long_url: &str, domain: Option<&str>) -> Result<ResponseData> {
        self.client.get(
            "/shorten",
            RawParams::new()
                .with("longUrl", long_url)
                .with_opt("domain", domain),
        )
    }

    /// Edit a link in the user's history.
    ///
    /// Only the fields named in `edit` are changed, e.g. `&["title", "note"]`.
    #[allow(clippy::too_many_arguments)]
    pub fn link_edit(
        &self,
        link: &str,
        edit: &[&str],
        title: Option<&str>,
        note: Option<&str>,
        private: Option<bool>,
        user_ts: Option<i64>,
        archived: Option<bool>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/user/link_edit",
            RawParams::new()
                .with("link", link)
                .with_fields("edit", edit)
                .with_opt("title", title)
                .with_opt("note", note)
                .with_opt("private", private)
                .with_opt("user_ts", user_ts)
                .with_opt("archived", archived),
        )
    }

    /// The user's own short links for one or more long URLs.
    pub fn link_lookup(&self, urls: &[&str]) -> Result<ResponseData> {
        self.client
            .get("/user/link_lookup", RawParams::new().with_list("url", urls))
    }

    /// Save a long URL to the user's history.
    pub fn link_save(
        &self,
        long_url: &str,
        title: Option<&str>,
        note: Option<&str>,
        private: Option<bool>,
        user_ts: Option<i64>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/user/link_save",
            RawParams::new()
                .with("longUrl", long_url)
                .with_opt("title", title)
                .with_opt("note", note)
                .with_opt("private", private)
                .with_opt("user_ts", user_ts),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{expected, stub_client};

    #[test]
    fn test_shorten_with_domain() {
        let (client, stub) = stub_client();
        client
            .links()
            .shorten("http://example.com/a b", Some("j.mp"))
            .unwrap();

        let (path, query) = stub.last_request();
        assert_eq!(path, "/v3/shorten");
        assert_eq!(
            query,
            expected(&[("longUrl", "http://example.com/a b"), ("domain", "j.mp")])
        );
    }

    #[test]
    fn test_expand_repeats_keys() {
        let (client, stub) = stub_client();
        client
            .links()
            .expand(&["http://bit.ly/a", "http://bit.ly/b"], &["c"])
            .unwrap();

        assert_eq!(
            stub.last_request().1,
            expected(&[
                ("shortUrl", "http://bit.ly/a"),
                ("shortUrl", "http://bit.ly/b"),
                ("hash", "c"),
            ])
        );
    }

    #[test]
    fn test_info_without_hashes() {
        let (client, stub) = stub_client();
        client.links().info(&["http://bit.ly/a"], &[], Some(true)).unwrap();

        let (path, query) = stub.last_request();
        assert_eq!(path, "/v3/info");
        assert_eq!(
            query,
            expected(&[("shortUrl", "http://bit.ly/a"), ("expand_user", "true")])
        );
    }

    #[test]
    fn test_lookup_paths() {
        let (client, stub) = stub_client();

        client.links().lookup(&["http://example.com/"]).unwrap();
        assert_eq!(stub.last_request().0, "/v3/link/lookup");

        client.links().link_lookup(&["http://example.com/"]).unwrap();
        let (path, query) = stub.last_request();
        assert_eq!(path, "/v3/user/link_lookup");
        assert_eq!(query, expected(&[("url", "http://example.com/")]));
    }

    #[test]
    fn test_link_edit() {
        let (client, stub) = stub_client();
        client
            .links()
            .link_edit(
                "http://bit.ly/a",
                &["title", "archived"],
                Some("Hello"),
                None,
                None,
                None,
                Some(true),
            )
            .unwrap();

        assert!(stub.requests()[0].contains("edit=title,archived"));
        assert_eq!(
            stub.last_request().1,
            expected(&[
                ("link", "http://bit.ly/a"),
                ("edit", "title,archived"),
                ("title", "Hello"),
                ("archived", "true"),
            ])
        );
    }

    #[test]
    fn test_link_edit_sends_empty_field_list() {
        let (client, stub) = stub_client();
        client
            .links()
            .link_edit("http://bit.ly/a", &[], None, None, None, None, None)
            .unwrap();

        assert!(stub.requests()[0].contains("&edit=&"));
        assert_eq!(
            stub.last_request().1,
            expected(&[("link", "http://bit.ly/a"), ("edit", "")])
        );
    }

    #[test]
    fn test_link_save() {
        let (client, stub) = stub_client();
        client
            .links()
            .link_save("http://example.com/", None, Some(""), Some(false), Some(1_360_000_000))
            .unwrap();

        let (path, query) = stub.last_request();
        assert_eq!(path, "/v3/user/link_save");
        assert_eq!(
            query,
            expected(&[
                ("longUrl", "http://example.com/"),
                ("note", ""),
                ("private", "false"),
                ("user_ts", "1360000000"),
            ])
        );
    }
}
