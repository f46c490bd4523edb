// Membership API HTTP client
//
// The university service exposes stored procedures as JSON POST
// endpoints and wraps every result set in a `{"data": [...]}` envelope
// (capitalized `Data` on some deployments). This client unwraps the
// envelope and turns a missing key into its own error variant -- the
// upstream drops the key when the auth token is rejected.

use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::{Error, preview};
use crate::membership::models::{CheckinRow, MemberRow, NewMemberRow};
use crate::transport::TransportConfig;

#[derive(serde::Deserialize)]
struct DataEnvelope<T> {
    #[serde(rename = "data", alias = "Data")]
    data: Option<Vec<T>>,
}

/// HTTP client for the club membership API.
pub struct MembershipClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl MembershipClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the procedure root
    /// (e.g. `https://tapi.lhu.edu.vn/nema/auth`); `token`, when present,
    /// is sent as the `Authorization` header on every call.
    pub fn new(
        base_url: Url,
        token: Option<SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests).
    pub fn with_client(http: reqwest::Client, base_url: Url, token: Option<SecretString>) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Fetch the raw check-in rows for one date.
    pub async fn attendance_by_date(&self, date: &str) -> Result<Vec<CheckinRow>, Error> {
        self.post_rows("CLB_DiemDanh_Select_byDate", &json!({ "Date": date }))
            .await
    }

    /// Fetch every member row.
    pub async fn list_members(&self) -> Result<Vec<MemberRow>, Error> {
        self.post_rows("CLB_ThanhVien_SelectAll", &json!({})).await
    }

    /// Fetch one member by student id.
    pub async fn member_by_id(&self, student_id: &str) -> Result<MemberRow, Error> {
        let rows: Vec<MemberRow> = self
            .post_rows("CLB_ThanhVien_Select_byMSSV", &json!({ "MSSV": student_id }))
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| Error::MemberNotFound {
                student_id: student_id.to_owned(),
            })
    }

    /// Insert a new member.
    pub async fn insert_member(&self, member: &NewMemberRow) -> Result<(), Error> {
        let _: Vec<serde_json::Value> = self.post_rows("CLB_ThanhVien_Insert", member).await?;
        Ok(())
    }

    /// Delete a member by student id.
    pub async fn delete_member(&self, student_id: &str) -> Result<(), Error> {
        let _: Vec<serde_json::Value> = self
            .post_rows("CLB_ThanhVien_Delete", &json!({ "MSSV": student_id }))
            .await?;
        Ok(())
    }

    // ── Request plumbing ─────────────────────────────────────────────

    /// POST a JSON body to a procedure endpoint and unwrap the `data`
    /// envelope.
    async fn post_rows<T: DeserializeOwned>(
        &self,
        procedure: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<Vec<T>, Error> {
        let url = self.procedure_url(procedure)?;
        debug!("POST {}", url);

        let mut builder = self.http.post(url).json(body);
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, token.expose_secret());
        }

        let resp = builder.send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Membership {
                status: status.as_u16(),
                message: preview(&text).to_owned(),
            });
        }

        let envelope: DataEnvelope<T> = serde_json::from_str(&text).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&text)),
                body: text.clone(),
            }
        })?;

        envelope.data.ok_or(Error::MissingData { body: text })
    }

    /// Build `{base}/{procedure}`, tolerating a trailing slash on the base.
    fn procedure_url(&self, procedure: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{procedure}")).map_err(Error::InvalidUrl)
    }
}
