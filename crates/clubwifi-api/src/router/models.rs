// Raw wire types for the RouterOS hotspot endpoints.
//
// RouterOS serializes everything as strings ("true"/"false", numbers in
// quotes); these types keep that shape and leave normalization to
// `clubwifi-core`.

use serde::{Deserialize, Serialize};

/// A row from `GET /rest/ip/hotspot/user`. Serializable too -- the user
/// list endpoint proxies these rows back out as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotUser {
    /// RouterOS internal id (`*1`, `*2A`, ...). Required for item-level
    /// PATCH/DELETE calls.
    #[serde(rename = ".id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for `PUT /rest/ip/hotspot/user` (account creation).
#[derive(Debug, Clone, Serialize)]
pub struct NewHotspotUser {
    pub name: String,
    pub password: String,
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Partial body for `PATCH /rest/ip/hotspot/user/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HotspotUserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body for `POST /rest/ip/hotspot/active/login` -- the captive-portal
/// session login. Key spellings match the RouterOS command arguments.
#[derive(Debug, Clone, Serialize)]
pub struct HotspotLoginParams {
    pub user: String,
    pub password: String,
    #[serde(rename = "mac-address")]
    pub mac_address: String,
    pub ip: String,
}
