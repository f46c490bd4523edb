// ── Hotspot domain types ──
//
// Wire keys on the inbound request bodies keep the spellings the portal
// frontend has always sent (`user`, `mac-address`, lowercase Vietnamese
// field names).

use serde::Deserialize;

/// Credentials a WiFi client presents to the captive portal.
///
/// Transient: held for the duration of one login call, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct HotspotCredential {
    #[serde(rename = "user")]
    pub username: String,
    pub password: String,
    #[serde(rename = "mac-address")]
    pub mac_address: String,
    #[serde(rename = "ip")]
    pub ip_address: String,
}

/// A router-side hotspot account paired with club-membership metadata.
///
/// Explicit named optional fields; anything the caller omits stays
/// `None` rather than being collected into an untyped bag.
#[derive(Debug, Clone, Deserialize)]
pub struct HotspotAccount {
    #[serde(rename = "user")]
    pub username: String,
    pub password: String,
    #[serde(default = "default_profile")]
    pub profile: String,

    // Member linkage, all optional.
    #[serde(rename = "mssv", default)]
    pub student_id: Option<String>,
    #[serde(rename = "ho", default)]
    pub surname: Option<String>,
    #[serde(rename = "ten", default)]
    pub given_name: Option<String>,
    #[serde(rename = "ngaysinh", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "lop", default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "sdt", default)]
    pub phone: Option<String>,
    #[serde(rename = "accountID", default)]
    pub account_id: Option<String>,
}

fn default_profile() -> String {
    "default".into()
}
