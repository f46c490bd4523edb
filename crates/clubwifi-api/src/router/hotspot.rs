// Hotspot operations against the router's session table and user list.

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::router::client::RouterClient;
use crate::router::models::{HotspotLoginParams, HotspotUser, HotspotUserPatch, NewHotspotUser};

impl RouterClient {
    /// Log a client into the captive portal.
    ///
    /// Issues the `login` command on `/ip/hotspot/active`, which inserts
    /// the client into the router's session table. A rejected login comes
    /// back as `Error::RouterApi` carrying the router's own failure text
    /// (`invalid username or password`, `unknown host IP ...`, etc.).
    pub async fn login(&self, params: &HotspotLoginParams) -> Result<(), Error> {
        debug!(user = %params.user, ip = %params.ip, "hotspot login");

        let url = self.rest_url("ip/hotspot/active/login");
        self.send_json(Method::POST, url, params).await
    }

    /// List every hotspot account on the router.
    pub async fn list_users(&self) -> Result<Vec<HotspotUser>, Error> {
        let url = self.rest_url("ip/hotspot/user");
        self.get_json(url).await
    }

    /// Resolve a hotspot account name to its RouterOS internal id.
    pub async fn find_user_id(&self, username: &str) -> Result<String, Error> {
        let mut url = self.rest_url("ip/hotspot/user");
        url.query_pairs_mut().append_pair("name", username);

        let users: Vec<HotspotUser> = self.get_json(url).await?;
        users
            .into_iter()
            .next()
            .map(|u| u.id)
            .ok_or_else(|| Error::AccountNotFound {
                username: username.to_owned(),
            })
    }

    /// Create a hotspot account.
    pub async fn create_user(&self, user: &NewHotspotUser) -> Result<(), Error> {
        debug!(name = %user.name, profile = %user.profile, "creating hotspot user");

        let url = self.rest_url("ip/hotspot/user");
        self.send_json(Method::PUT, url, user).await
    }

    /// Remove a hotspot account by name.
    pub async fn remove_user(&self, username: &str) -> Result<(), Error> {
        let id = self.find_user_id(username).await?;
        debug!(name = %username, id = %id, "removing hotspot user");

        let url = self.rest_url(&format!("ip/hotspot/user/{id}"));
        self.send_empty(Method::DELETE, url).await
    }

    /// Apply a partial update to a hotspot account by name.
    pub async fn update_user(&self, username: &str, patch: &HotspotUserPatch) -> Result<(), Error> {
        let id = self.find_user_id(username).await?;
        debug!(name = %username, id = %id, "updating hotspot user");

        let url = self.rest_url(&format!("ip/hotspot/user/{id}"));
        self.send_json(Method::PATCH, url, patch).await
    }
}
