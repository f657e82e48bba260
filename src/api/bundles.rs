//! Bundles API.
//!
//! Bundles are ordered, commentable collections of links owned by a user.
//! Bundles are addressed by their `bundle_link` URL.

use crate::client::Client;
use crate::error::Result;
use crate::params::{QueryValue, RawParams};
use crate::response::ResponseData;

/// Bundles API (`/v3/bundle/*`, `/v3/user/bundle_history`).
#[derive(Debug, Clone)]
pub struct Bundles {
    client: Client,
}

impl Bundles {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// The client this group sends requests through.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Archive a bundle. Only the owner may archive it.
    pub fn archive(&self, bundle_link: &str) -> Result<ResponseData> {
        self.client.get(
            "/bundle/archive",
            RawParams::new().with("bundle_link", bundle_link),
        )
    }

    /// Public bundles created by `user`.
    pub fn bundles_by_user(&self, user: &str, expand_user: Option<bool>) -> Result<ResponseData> {
        self.client.get(
            "/bundle/bundles_by_user",
            RawParams::new()
                .with("user", user)
                .with_opt("expand_user", expand_user),
        )
    }

    /// Clone a bundle into the authenticated user's account.
    pub fn clone_bundle(&self, bundle_link: &str) -> Result<ResponseData> {
        self.client.get(
            "/bundle/clone",
            RawParams::new().with("bundle_link", bundle_link),
        )
    }

    /// Add a collaborator by login or email address.
    pub fn collaborator_add(&self, bundle_link: &str, collaborator: &str) -> Result<ResponseData> {
        self.client.get(
            "/bundle/collaborator_add",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("collaborator", collaborator),
        )
    }

    /// Remove a collaborator from a bundle.
    pub fn collaborator_remove(
        &self,
        bundle_link: &str,
        collaborator: &str,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/collaborator_remove",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("collaborator", collaborator),
        )
    }

    /// Contents of a bundle.
    pub fn contents(&self, bundle_link: &str, expand_user: Option<bool>) -> Result<ResponseData> {
        self.client.get(
            "/bundle/contents",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with_opt("expand_user", expand_user),
        )
    }

    /// Create a bundle. The service defaults `private` to false.
    pub fn create(
        &self,
        private: Option<bool>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/create",
            RawParams::new()
                .with_opt("private", private)
                .with_opt("title", title)
                .with_opt("description", description),
        )
    }

    /// Edit bundle properties.
    ///
    /// Fields named in `edit` are updated even when the new value is absent,
    /// which is how a title or description gets cleared. `None` leaves the
    /// `edit` parameter off.
    #[allow(clippy::too_many_arguments)]
    pub fn edit(
        &self,
        bundle_link: &str,
        edit: Option<&[&str]>,
        title: Option<&str>,
        description: Option<&str>,
        private: Option<bool>,
        preview: Option<bool>,
        og_image: Option<&str>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/edit",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with_opt("edit", edit.map(QueryValue::fields))
                .with_opt("title", title)
                .with_opt("description", description)
                .with_opt("private", private)
                .with_opt("preview", preview)
                .with_opt("og_image", og_image),
        )
    }

    /// Add a link. Long URLs are saved to the user's account first.
    pub fn link_add(&self, bundle_link: &str, link: &str, title: Option<&str>) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_add",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link)
                .with_opt("title", title),
        )
    }

    /// Comment on a link in a bundle (at most 512 characters).
    pub fn link_comment_add(&self, bundle_link: &str, link: &str, comment: &str) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_comment_add",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link)
                .with("comment", comment),
        )
    }

    /// Replace the text of an existing comment.
    pub fn link_comment_edit(
        &self,
        bundle_link: &str,
        link: &str,
        comment_id: i64,
        comment: &str,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_comment_edit",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link)
                .with("comment_id", comment_id)
                .with("comment", comment),
        )
    }

    /// Delete a comment.
    pub fn link_comment_remove(
        &self,
        bundle_link: &str,
        link: &str,
        comment_id: i64,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_comment_remove",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link)
                .with("comment_id", comment_id),
        )
    }

    /// Edit a link inside a bundle. `edit` names the fields (title, preview).
    pub fn link_edit(
        &self,
        bundle_link: &str,
        link: &str,
        edit: &[&str],
        title: Option<&str>,
        preview: Option<bool>,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_edit",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link)
                .with_fields("edit", edit)
                .with_opt("title", title)
                .with_opt("preview", preview),
        )
    }

    /// Remove a link from a bundle.
    pub fn link_remove(&self, bundle_link: &str, link: &str) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_remove",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link),
        )
    }

    /// Move a link: -1 to the end, 0 to the front, otherwise to that slot.
    pub fn link_reorder(&self, bundle_link: &str, link: &str, display_order: i64) -> Result<ResponseData> {
        self.client.get(
            "/bundle/link_reorder",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("link", link)
                .with("display_order", display_order),
        )
    }

    /// Withdraw an invitation that has not been accepted yet.
    pub fn pending_collaborator_remove(
        &self,
        bundle_link: &str,
        collaborator: &str,
    ) -> Result<ResponseData> {
        self.client.get(
            "/bundle/pending_collaborator_remove",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with("collaborator", collaborator),
        )
    }

    /// Reorder several links at once, in the order given.
    pub fn reorder(&self, bundle_link: &str, links: &[&str]) -> Result<ResponseData> {
        self.client.get(
            "/bundle/reorder",
            RawParams::new()
                .with("bundle_link", bundle_link)
                .with_list("link", links),
        )
    }

    /// Number of views a bundle has had.
    pub fn view_count(&self, bundle_link: &str) -> Result<ResponseData> {
        self.client.get(
            "/bundle/view_count",
            RawParams::new().with("bundle_link", bundle_link),
        )
    }

    /// Bundles owned by or shared with the authenticated user.
    pub fn bundle_history(&self, expand_user: Option<bool>) -> Result<ResponseData> {
        self.client.get(
            "/user/bundle_history",
            RawParams::new().with_opt("expand_user", expand_user),
        )
    }
}
